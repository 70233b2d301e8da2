//! Authentication service and the components built on it

mod context;
mod login_form;
mod user_menu;
mod verify_form;

pub use context::AuthService;
pub use login_form::CredentialsForm;
pub use user_menu::{UserAvatar, UserMenu};
pub use verify_form::VerificationForm;
