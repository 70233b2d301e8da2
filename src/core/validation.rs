//! Validation for checkout form fields
//!
//! Each tracked field maps to a pure validator in [`VALIDATION_TABLE`].
//! Fields without an entry only have to be non-blank.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use derive_more::Display;
use regex::Regex;

/// Loose `x@y.z` shape; matches anywhere in the value
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

static EXPIRY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}$").expect("expiry pattern compiles"));

/// Minimum digits in a card number
pub const CARD_NUMBER_DIGITS: usize = 16;

/// Minimum digits in a CVV
pub const MIN_CVV_DIGITS: usize = 3;

/// Text fields tracked by the checkout form
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckoutField {
    #[display("email")]
    Email,
    #[display("firstName")]
    FirstName,
    #[display("lastName")]
    LastName,
    #[display("address")]
    Address,
    #[display("city")]
    City,
    #[display("country")]
    Country,
    #[display("zipCode")]
    ZipCode,
    #[display("cardNumber")]
    CardNumber,
    #[display("expiryDate")]
    ExpiryDate,
    #[display("cvv")]
    Cvv,
    #[display("nameOnCard")]
    NameOnCard,
}

impl CheckoutField {
    pub const ALL: [CheckoutField; 11] = [
        CheckoutField::Email,
        CheckoutField::FirstName,
        CheckoutField::LastName,
        CheckoutField::Address,
        CheckoutField::City,
        CheckoutField::Country,
        CheckoutField::ZipCode,
        CheckoutField::CardNumber,
        CheckoutField::ExpiryDate,
        CheckoutField::Cvv,
        CheckoutField::NameOnCard,
    ];

    /// Input placeholder text
    pub fn placeholder(&self) -> &'static str {
        match self {
            CheckoutField::Email => "Email address",
            CheckoutField::FirstName => "First name",
            CheckoutField::LastName => "Last name",
            CheckoutField::Address => "Street address",
            CheckoutField::City => "City",
            CheckoutField::Country => "Select country",
            CheckoutField::ZipCode => "ZIP code",
            CheckoutField::CardNumber => "1234 5678 9012 3456",
            CheckoutField::ExpiryDate => "MM/YY",
            CheckoutField::Cvv => "123",
            CheckoutField::NameOnCard => "Name on card",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckoutField::Email => "Email",
            CheckoutField::FirstName => "First Name",
            CheckoutField::LastName => "Last Name",
            CheckoutField::Address => "Address",
            CheckoutField::City => "City",
            CheckoutField::Country => "Country",
            CheckoutField::ZipCode => "ZIP Code",
            CheckoutField::CardNumber => "Card Number",
            CheckoutField::ExpiryDate => "Expiry Date",
            CheckoutField::Cvv => "CVV",
            CheckoutField::NameOnCard => "Name on Card",
        }
    }

    /// `autocomplete` hint for the browser
    pub fn autocomplete(&self) -> &'static str {
        match self {
            CheckoutField::Email => "email",
            CheckoutField::FirstName => "given-name",
            CheckoutField::LastName => "family-name",
            CheckoutField::Address => "street-address",
            CheckoutField::City => "address-level2",
            CheckoutField::Country => "country",
            CheckoutField::ZipCode => "postal-code",
            CheckoutField::CardNumber => "cc-number",
            CheckoutField::ExpiryDate => "cc-exp",
            CheckoutField::Cvv => "cc-csc",
            CheckoutField::NameOnCard => "cc-name",
        }
    }
}

/// Why a field value was rejected. The message is shown inline under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Card number must be 16 digits")]
    CardNumberLength,
    #[error("Please enter MM/YY format")]
    ExpiryFormat,
    #[error("Invalid month")]
    InvalidMonth,
    #[error("Card has expired")]
    CardExpired,
    #[error("CVV must be 3-4 digits")]
    CvvLength,
    #[error("This field is required")]
    Required,
}

/// Calendar month used as "now" when checking card expiry
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The current month in local time
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// Two digit year as printed on cards
    pub fn short_year(&self) -> u32 {
        self.year.rem_euclid(100) as u32
    }
}

/// A validator receives the field value and the current month
pub type Validator = fn(&str, YearMonth) -> Option<FieldError>;

/// Fields with rules beyond "required"
pub const VALIDATION_TABLE: [(CheckoutField, Validator); 4] = [
    (CheckoutField::Email, validate_email),
    (CheckoutField::CardNumber, validate_card_number),
    (CheckoutField::ExpiryDate, validate_expiry_date),
    (CheckoutField::Cvv, validate_cvv),
];

/// Look up the validator for a field
pub fn validator_for(field: CheckoutField) -> Validator {
    VALIDATION_TABLE
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, validator)| *validator)
        .unwrap_or(validate_required as Validator)
}

/// Validate a single field value
pub fn validate_field(field: CheckoutField, value: &str, now: YearMonth) -> Option<FieldError> {
    validator_for(field)(value, now)
}

pub fn validate_email(value: &str, _now: YearMonth) -> Option<FieldError> {
    (!EMAIL_PATTERN.is_match(value)).then_some(FieldError::InvalidEmail)
}

pub fn validate_card_number(value: &str, _now: YearMonth) -> Option<FieldError> {
    let digits = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .filter(|c| c.is_ascii_digit())
        .count();
    (digits < CARD_NUMBER_DIGITS).then_some(FieldError::CardNumberLength)
}

pub fn validate_expiry_date(value: &str, now: YearMonth) -> Option<FieldError> {
    if !EXPIRY_PATTERN.is_match(value) {
        return Some(FieldError::ExpiryFormat);
    }

    let parsed = value
        .split_once('/')
        .and_then(|(m, y)| Some((m.parse::<u32>().ok()?, y.parse::<u32>().ok()?)));
    let Some((month, year)) = parsed else {
        return Some(FieldError::ExpiryFormat);
    };

    if !(1..=12).contains(&month) {
        return Some(FieldError::InvalidMonth);
    }

    let current_year = now.short_year();
    if year < current_year || (year == current_year && month < now.month) {
        return Some(FieldError::CardExpired);
    }

    None
}

pub fn validate_cvv(value: &str, _now: YearMonth) -> Option<FieldError> {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    (digits < MIN_CVV_DIGITS).then_some(FieldError::CvvLength)
}

pub fn validate_required(value: &str, _now: YearMonth) -> Option<FieldError> {
    value.trim().is_empty().then_some(FieldError::Required)
}

/// Outstanding errors keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<CheckoutField, FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of validating `field`; `None` clears it
    pub fn set(&mut self, field: CheckoutField, outcome: Option<FieldError>) {
        match outcome {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn get(&self, field: CheckoutField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn message(&self, field: CheckoutField) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> YearMonth {
        YearMonth::new(2025, 6)
    }

    #[test]
    fn test_email() {
        assert_eq!(validate_email("user@example.com", now()), None);
        assert_eq!(validate_email("a@b.c", now()), None);
        assert_eq!(
            validate_email("user@example", now()),
            Some(FieldError::InvalidEmail)
        );
        assert_eq!(validate_email("", now()), Some(FieldError::InvalidEmail));
        assert_eq!(
            validate_email("user @example.com", now()),
            Some(FieldError::InvalidEmail)
        );
    }

    #[test]
    fn test_card_number() {
        assert_eq!(validate_card_number("4111 1111 1111 1111", now()), None);
        assert_eq!(
            validate_card_number("4111 1111 1111", now()),
            Some(FieldError::CardNumberLength)
        );
        assert_eq!(
            FieldError::CardNumberLength.to_string(),
            "Card number must be 16 digits"
        );
    }

    #[test]
    fn test_expiry_date() {
        assert_eq!(
            validate_expiry_date("01/20", now()),
            Some(FieldError::CardExpired)
        );
        assert_eq!(
            validate_expiry_date("13/30", now()),
            Some(FieldError::InvalidMonth)
        );
        assert_eq!(
            validate_expiry_date("00/30", now()),
            Some(FieldError::InvalidMonth)
        );
        assert_eq!(validate_expiry_date("12/30", now()), None);
        assert_eq!(
            validate_expiry_date("1230", now()),
            Some(FieldError::ExpiryFormat)
        );
        assert_eq!(
            validate_expiry_date("12/", now()),
            Some(FieldError::ExpiryFormat)
        );
    }

    #[test]
    fn test_expiry_current_month_is_valid() {
        assert_eq!(validate_expiry_date("06/25", now()), None);
        assert_eq!(
            validate_expiry_date("05/25", now()),
            Some(FieldError::CardExpired)
        );
        assert_eq!(validate_expiry_date("01/26", now()), None);
    }

    #[test]
    fn test_expiry_messages() {
        assert_eq!(FieldError::CardExpired.to_string(), "Card has expired");
        assert_eq!(FieldError::InvalidMonth.to_string(), "Invalid month");
    }

    #[test]
    fn test_cvv() {
        assert_eq!(validate_cvv("123", now()), None);
        assert_eq!(validate_cvv("1234", now()), None);
        assert_eq!(validate_cvv("12", now()), Some(FieldError::CvvLength));
    }

    #[test]
    fn test_required_fallback() {
        assert_eq!(
            validate_field(CheckoutField::City, "   ", now()),
            Some(FieldError::Required)
        );
        assert_eq!(validate_field(CheckoutField::City, "Pune", now()), None);
        assert_eq!(
            validate_field(CheckoutField::Country, "", now()),
            Some(FieldError::Required)
        );
    }

    #[test]
    fn test_table_dispatch() {
        assert_eq!(
            validate_field(CheckoutField::Email, "nope", now()),
            Some(FieldError::InvalidEmail)
        );
        assert_eq!(
            validate_field(CheckoutField::Cvv, "1", now()),
            Some(FieldError::CvvLength)
        );
    }

    #[test]
    fn test_field_names() {
        assert_eq!(CheckoutField::ZipCode.to_string(), "zipCode");
        assert_eq!(CheckoutField::NameOnCard.to_string(), "nameOnCard");
        assert_eq!(CheckoutField::CardNumber.to_string(), "cardNumber");
    }

    #[test]
    fn test_field_errors_set_and_clear() {
        let mut errors = FieldErrors::new();
        errors.set(CheckoutField::Cvv, Some(FieldError::CvvLength));
        errors.set(CheckoutField::City, Some(FieldError::Required));
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.message(CheckoutField::Cvv).as_deref(),
            Some("CVV must be 3-4 digits")
        );

        errors.set(CheckoutField::Cvv, None);
        assert_eq!(errors.len(), 1);
        assert!(errors.get(CheckoutField::Cvv).is_none());
    }

    #[test]
    fn test_year_month_from_date() {
        let date = NaiveDate::from_ymd_opt(2031, 2, 14).expect("valid date");
        let ym = YearMonth::from_date(date);
        assert_eq!(ym, YearMonth::new(2031, 2));
        assert_eq!(ym.short_year(), 31);
    }
}
