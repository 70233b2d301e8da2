//! Routed pages
//!
//! Every page takes the shared [`AppServices`](crate::ui::services::AppServices)
//! bundle and, where it links elsewhere, the page-change callback.

mod auth;
mod cart;
mod checkout;
mod not_found;
mod section;
mod tools;

pub use auth::{AuthEvent, AuthPage, AuthStage};
pub use cart::CartPage;
pub use checkout::CheckoutPage;
pub use not_found::NotFoundPage;
pub use section::SectionPage;
pub use tools::ToolsPage;
