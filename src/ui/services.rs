//! Application service bundle
//!
//! Built once by the root component and handed to every page as a prop.
//! Each field is a `Copy` signal handle, so passing the bundle around is
//! free and every component sees the same state.

use super::auth::AuthService;
use super::cart::CartService;
use super::currency::CurrencyService;
use super::notifications::ToastService;
use super::theme::ThemeService;

#[derive(Clone, Copy)]
pub struct AppServices {
    pub theme: ThemeService,
    pub auth: AuthService,
    pub cart: CartService,
    pub currency: CurrencyService,
    pub toasts: ToastService,
}

impl AppServices {
    /// Must be called inside the reactive owner of the app root
    pub fn new() -> Self {
        let services = Self {
            theme: ThemeService::new(),
            auth: AuthService::new(),
            cart: CartService::new(),
            currency: CurrencyService::new(),
            toasts: ToastService::new(),
        };
        tracing::debug!("app services initialised");
        services
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self::new()
    }
}
