//! Checkout form state
//!
//! The form walks through three steps (contact, shipping, payment). Moving
//! between steps is never gated; every field is re-validated on submit.

use rust_decimal::Decimal;

use super::cart::Cart;
use super::payment::PaymentPhase;
use super::format::{CardBrand, format_card_number, format_expiry_date, sanitize_cvv};
use super::validation::{CheckoutField, FieldErrors, YearMonth, validate_field};

/// Sales tax applied on top of the cart subtotal (10%)
pub const TAX_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Countries offered in the shipping step as `(code, name)`
pub const COUNTRIES: [(&str, &str); 4] = [
    ("US", "United States"),
    ("CA", "Canada"),
    ("UK", "United Kingdom"),
    ("IN", "India"),
];

/// Checkout step
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum CheckoutStep {
    #[default]
    Contact = 1,
    Shipping = 2,
    Payment = 3,
}

impl CheckoutStep {
    pub const ALL: [CheckoutStep; 3] = [
        CheckoutStep::Contact,
        CheckoutStep::Shipping,
        CheckoutStep::Payment,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn title(self) -> &'static str {
        match self {
            CheckoutStep::Contact => "Contact",
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            CheckoutStep::Contact => "📧",
            CheckoutStep::Shipping => "🚚",
            CheckoutStep::Payment => "💳",
        }
    }

    /// Following step; stays on the last one
    pub fn next(self) -> Self {
        match self {
            CheckoutStep::Contact => CheckoutStep::Shipping,
            CheckoutStep::Shipping | CheckoutStep::Payment => CheckoutStep::Payment,
        }
    }

    /// Previous step; stays on the first one
    pub fn prev(self) -> Self {
        match self {
            CheckoutStep::Contact | CheckoutStep::Shipping => CheckoutStep::Contact,
            CheckoutStep::Payment => CheckoutStep::Shipping,
        }
    }

    pub fn is_first(self) -> bool {
        self == CheckoutStep::Contact
    }

    pub fn is_last(self) -> bool {
        self == CheckoutStep::Payment
    }

    /// Fields entered on this step
    pub fn fields(self) -> &'static [CheckoutField] {
        match self {
            CheckoutStep::Contact => &[CheckoutField::Email],
            CheckoutStep::Shipping => &[
                CheckoutField::FirstName,
                CheckoutField::LastName,
                CheckoutField::Address,
                CheckoutField::City,
                CheckoutField::ZipCode,
                CheckoutField::Country,
            ],
            CheckoutStep::Payment => &[
                CheckoutField::NameOnCard,
                CheckoutField::CardNumber,
                CheckoutField::ExpiryDate,
                CheckoutField::Cvv,
            ],
        }
    }
}

/// Reasons the final submit is refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Please agree to the terms and conditions")]
    TermsNotAgreed,
    #[error("Please fix all errors before proceeding")]
    InvalidFields(FieldErrors),
    #[error("Payment is already being processed")]
    AlreadyProcessing,
}

/// Field values, flags and outstanding errors for one checkout attempt
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub zip_code: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub name_on_card: String,
    pub save_card: bool,
    pub agree_terms: bool,
    pub errors: FieldErrors,
}

impl CheckoutForm {
    /// Empty form with the contact email prefilled
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn value(&self, field: CheckoutField) -> &str {
        match field {
            CheckoutField::Email => &self.email,
            CheckoutField::FirstName => &self.first_name,
            CheckoutField::LastName => &self.last_name,
            CheckoutField::Address => &self.address,
            CheckoutField::City => &self.city,
            CheckoutField::Country => &self.country,
            CheckoutField::ZipCode => &self.zip_code,
            CheckoutField::CardNumber => &self.card_number,
            CheckoutField::ExpiryDate => &self.expiry_date,
            CheckoutField::Cvv => &self.cvv,
            CheckoutField::NameOnCard => &self.name_on_card,
        }
    }

    fn value_mut(&mut self, field: CheckoutField) -> &mut String {
        match field {
            CheckoutField::Email => &mut self.email,
            CheckoutField::FirstName => &mut self.first_name,
            CheckoutField::LastName => &mut self.last_name,
            CheckoutField::Address => &mut self.address,
            CheckoutField::City => &mut self.city,
            CheckoutField::Country => &mut self.country,
            CheckoutField::ZipCode => &mut self.zip_code,
            CheckoutField::CardNumber => &mut self.card_number,
            CheckoutField::ExpiryDate => &mut self.expiry_date,
            CheckoutField::Cvv => &mut self.cvv,
            CheckoutField::NameOnCard => &mut self.name_on_card,
        }
    }

    /// Apply a keystroke: mask payment fields, store, then revalidate that field
    pub fn set_field(&mut self, field: CheckoutField, raw: &str, now: YearMonth) {
        let formatted = match field {
            CheckoutField::CardNumber => format_card_number(raw),
            CheckoutField::ExpiryDate => format_expiry_date(raw),
            CheckoutField::Cvv => sanitize_cvv(raw),
            _ => raw.to_string(),
        };
        self.errors.set(field, validate_field(field, &formatted, now));
        *self.value_mut(field) = formatted;
    }

    pub fn error(&self, field: CheckoutField) -> Option<String> {
        self.errors.message(field)
    }

    pub fn card_brand(&self) -> CardBrand {
        CardBrand::detect(&self.card_number)
    }

    /// Re-validate every tracked text field, replacing the error set
    pub fn validate_all(&mut self, now: YearMonth) -> &FieldErrors {
        let mut errors = FieldErrors::new();
        for field in CheckoutField::ALL {
            errors.set(field, validate_field(field, self.value(field), now));
        }
        self.errors = errors;
        &self.errors
    }

    /// Final pre-flight before payment. Errors found here stay on the form
    /// so they show inline.
    pub fn submit(&mut self, now: YearMonth) -> Result<(), SubmitError> {
        let errors = self.validate_all(now).clone();

        if !self.agree_terms {
            return Err(SubmitError::TermsNotAgreed);
        }
        if !errors.is_empty() {
            return Err(SubmitError::InvalidFields(errors));
        }
        Ok(())
    }
}

/// Totals shown in the order summary sidebar, in USD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl OrderSummary {
    pub fn for_cart(cart: &Cart) -> Self {
        let subtotal = cart.total_price();
        let tax = subtotal * TAX_RATE;
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

/// Everything the checkout page tracks for one visit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutState {
    pub step: CheckoutStep,
    pub form: CheckoutForm,
    pub phase: PaymentPhase,
    pub order_complete: bool,
}

impl CheckoutState {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            form: CheckoutForm::new(email),
            ..Self::default()
        }
    }

    pub fn next_step(&mut self) {
        self.step = self.step.next();
        tracing::debug!(step = self.step.number(), "checkout step");
    }

    pub fn prev_step(&mut self) {
        self.step = self.step.prev();
        tracing::debug!(step = self.step.number(), "checkout step");
    }

    pub fn is_processing(&self) -> bool {
        self.phase.is_in_progress()
    }

    /// The pay button is live only with terms agreed and nothing running
    pub fn can_submit(&self) -> bool {
        self.form.agree_terms && !self.is_processing() && !self.order_complete
    }

    /// Validate and arm the payment sequence
    pub fn begin_payment(&mut self, now: YearMonth) -> Result<(), SubmitError> {
        if self.is_processing() || self.order_complete {
            return Err(SubmitError::AlreadyProcessing);
        }
        self.form.submit(now)?;
        self.phase = PaymentPhase::Idle.next();
        Ok(())
    }

    /// Record a phase reported by the running sequence. Reaching `Done`
    /// completes the order and empties the cart.
    pub fn enter_phase(&mut self, phase: PaymentPhase, cart: &mut Cart) {
        self.phase = phase;
        if phase == PaymentPhase::Done {
            self.order_complete = true;
            self.form.errors.clear();
            cart.clear();
            tracing::info!("order complete");
        }
    }
}
