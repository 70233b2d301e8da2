//! Input masking for payment fields
//!
//! These are pure string transforms applied on every keystroke. They never
//! reject input; validation lives in [`crate::core::validation`].

use derive_more::Display;

/// Longest card number the formatter keeps
pub const MAX_CARD_DIGITS: usize = 16;

/// Longest CVV the formatter keeps
pub const MAX_CVV_DIGITS: usize = 4;

fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Regroup a card number into space separated blocks of four digits.
///
/// Non-digits are discarded. Input with fewer than four digits is returned
/// as the bare digits; anything past sixteen digits is dropped.
pub fn format_card_number(value: &str) -> String {
    let digits = digits_only(value);
    if digits.len() < 4 {
        return digits;
    }

    digits
        .as_bytes()
        .chunks(4)
        .take(MAX_CARD_DIGITS / 4)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Insert `/` after the month once two digits are present: `1225` -> `12/25`
pub fn format_expiry_date(value: &str) -> String {
    let digits = digits_only(value);
    if digits.len() < 2 {
        return digits;
    }
    let (month, rest) = digits.split_at(2);
    let year: String = rest.chars().take(2).collect();
    format!("{}/{}", month, year)
}

/// Keep at most four digits
pub fn sanitize_cvv(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_CVV_DIGITS)
        .collect()
}

/// Card network guessed from the leading digit. Display only.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum CardBrand {
    #[display("visa")]
    Visa,
    #[display("mastercard")]
    Mastercard,
    #[display("amex")]
    Amex,
    #[display("unknown")]
    Unknown,
}

impl CardBrand {
    pub fn detect(card_number: &str) -> Self {
        match card_number.chars().find(|c| !c.is_whitespace()) {
            Some('4') => CardBrand::Visa,
            Some('5') => CardBrand::Mastercard,
            Some('3') => CardBrand::Amex,
            _ => CardBrand::Unknown,
        }
    }

    /// Short badge text shown inside the card number input
    pub fn badge(&self) -> &'static str {
        match self {
            CardBrand::Visa => "VISA",
            CardBrand::Mastercard => "MC",
            CardBrand::Amex => "AMEX",
            CardBrand::Unknown => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_number_grouping() {
        assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(format_card_number("4111 1111 1111 1111"), "4111 1111 1111 1111");
        assert_eq!(format_card_number("41111"), "4111 1");
        assert_eq!(format_card_number("4111-2222"), "4111 2222");
    }

    #[test]
    fn test_card_number_short_and_long_input() {
        assert_eq!(format_card_number(""), "");
        assert_eq!(format_card_number("41a"), "41");
        assert_eq!(
            format_card_number("41111111111111119999"),
            "4111 1111 1111 1111"
        );
    }

    #[test]
    fn test_card_number_blocks_never_exceed_four_digits() {
        for input in ["1", "12345", "1234 5678 9", "abc123def4567", "9999999999999999999"] {
            let formatted = format_card_number(input);
            assert!(formatted.split(' ').all(|block| block.len() <= 4));
            assert!(!formatted.contains("  "));
            let digits: String = input.chars().filter(|c| c.is_ascii_digit()).take(16).collect();
            assert_eq!(formatted.replace(' ', ""), digits);
        }
    }

    #[test]
    fn test_expiry_insertion() {
        assert_eq!(format_expiry_date("1"), "1");
        assert_eq!(format_expiry_date("12"), "12/");
        assert_eq!(format_expiry_date("122"), "12/2");
        assert_eq!(format_expiry_date("1225"), "12/25");
        assert_eq!(format_expiry_date("12/25"), "12/25");
        assert_eq!(format_expiry_date("12/2599"), "12/25");
    }

    #[test]
    fn test_expiry_never_doubles_slash() {
        for input in ["12/", "12//", "1/2/3/4", "12/25/"] {
            assert!(format_expiry_date(input).matches('/').count() <= 1);
        }
    }

    #[test]
    fn test_cvv_sanitize() {
        assert_eq!(sanitize_cvv("12a3"), "123");
        assert_eq!(sanitize_cvv("123456"), "1234");
        assert_eq!(sanitize_cvv("abc"), "");
    }

    #[test]
    fn test_card_brand() {
        assert_eq!(CardBrand::detect("4111 1111"), CardBrand::Visa);
        assert_eq!(CardBrand::detect("5500"), CardBrand::Mastercard);
        assert_eq!(CardBrand::detect(" 3782"), CardBrand::Amex);
        assert_eq!(CardBrand::detect("6011"), CardBrand::Unknown);
        assert_eq!(CardBrand::detect(""), CardBrand::Unknown);
        assert_eq!(CardBrand::Visa.to_string(), "visa");
    }
}
