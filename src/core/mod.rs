//! Storefront domain logic: cart, currency, auth, checkout validation and
//! the simulated payment sequence. Nothing here depends on the UI layer.

pub mod auth;
pub mod cart;
pub mod catalog;
#[cfg(feature = "ssr")]
pub mod config;
pub mod checkout;
pub mod currency;
pub mod format;
pub mod navigation;
pub mod payment;
pub mod validation;
#[cfg(test)]
mod tests;

pub use auth::{AuthError, AuthSession, DemoAuthService, Role, User};
pub use cart::{Cart, CartItem};
pub use catalog::{CATALOG, Product};
pub use checkout::{COUNTRIES, CheckoutForm, CheckoutStep, OrderSummary, SubmitError};
pub use currency::Currency;
pub use format::CardBrand;
pub use navigation::{CurrencyChoice, NAVIGATION_ITEMS, OpenPopover, Page, select_currency};
pub use payment::{PaymentPhase, run_payment_sequence};
pub use validation::{CheckoutField, FieldError, FieldErrors, YearMonth};
