//! Display currencies and price formatting
//!
//! Catalogue prices are stored in US dollars. Other currencies are derived
//! with a fixed conversion rate at display time.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Currencies offered by the header selector
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[display("USD")]
    Usd,
    #[display("INR")]
    Inr,
    #[display("EUR")]
    Eur,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported currency: {0}")]
pub struct UnknownCurrency(pub String);

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Inr, Currency::Eur];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Inr => "INR",
            Currency::Eur => "EUR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Inr => "₹",
            Currency::Eur => "€",
        }
    }

    /// Units of this currency per US dollar
    pub fn rate(&self) -> Decimal {
        match self {
            Currency::Usd => Decimal::ONE,
            Currency::Inr => Decimal::new(83, 0),
            Currency::Eur => Decimal::new(92, 2),
        }
    }

    /// Convert a USD amount into this currency, rounded to cents
    pub fn convert(&self, usd: Decimal) -> Decimal {
        (usd * self.rate()).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Format a USD amount for display in this currency, e.g. `₹1,659.17`
    pub fn format_price(&self, usd: Decimal) -> String {
        let converted = self.convert(usd);
        let sign = if converted.is_sign_negative() { "-" } else { "" };
        let text = format!("{:.2}", converted.abs());
        let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
        format!("{}{}{}.{}", sign, self.symbol(), group_thousands(whole), cents)
    }
}

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(Currency::Usd.format_price(Decimal::new(1999, 2)), "$19.99");
        assert_eq!(Currency::Usd.format_price(Decimal::ZERO), "$0.00");
        assert_eq!(
            Currency::Usd.format_price(Decimal::new(1234567, 1)),
            "$123,456.70"
        );
    }

    #[test]
    fn test_format_inr_and_eur() {
        assert_eq!(Currency::Inr.format_price(Decimal::new(10, 0)), "₹830.00");
        assert_eq!(Currency::Inr.format_price(Decimal::new(1999, 2)), "₹1,659.17");
        assert_eq!(Currency::Eur.format_price(Decimal::new(100, 0)), "€92.00");
    }

    #[test]
    fn test_convert_rounds_to_cents() {
        assert_eq!(
            Currency::Eur.convert(Decimal::new(1, 2)),
            Decimal::new(1, 2)
        );
        assert_eq!(
            Currency::Eur.convert(Decimal::new(999, 2)),
            Decimal::new(919, 2)
        );
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!("INR".parse::<Currency>(), Ok(Currency::Inr));
        assert_eq!(" eur ".parse::<Currency>(), Ok(Currency::Eur));
        assert!("GBP".parse::<Currency>().is_err());
        assert_eq!(Currency::Inr.to_string(), "INR");
    }
}
