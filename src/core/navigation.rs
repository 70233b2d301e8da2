//! Page identifiers and header menu state
//!
//! Pages are addressed by a stable string id (the same id the page-change
//! callback receives) and mapped onto router paths.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::currency::Currency;

/// Every page the storefront can show
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    #[display("home")]
    Home,
    #[display("ai-tools")]
    AiTools,
    #[display("courses")]
    Courses,
    #[display("about-us")]
    AboutUs,
    #[display("contact")]
    Contact,
    #[display("cart")]
    Cart,
    #[display("checkout")]
    Checkout,
    #[display("auth")]
    Auth,
    #[display("profile")]
    Profile,
    #[display("admin")]
    Admin,
}

impl Page {
    pub const ALL: [Page; 10] = [
        Page::Home,
        Page::AiTools,
        Page::Courses,
        Page::AboutUs,
        Page::Contact,
        Page::Cart,
        Page::Checkout,
        Page::Auth,
        Page::Profile,
        Page::Admin,
    ];

    /// Router path for this page
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::AiTools => "/ai-tools",
            Page::Courses => "/courses",
            Page::AboutUs => "/about-us",
            Page::Contact => "/contact",
            Page::Cart => "/cart",
            Page::Checkout => "/checkout",
            Page::Auth => "/auth",
            Page::Profile => "/profile",
            Page::Admin => "/admin",
        }
    }

    /// Human readable title
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::AiTools => "AI Tools",
            Page::Courses => "Courses",
            Page::AboutUs => "About Us",
            Page::Contact => "Contact Us",
            Page::Cart => "Cart",
            Page::Checkout => "Checkout",
            Page::Auth => "Sign In",
            Page::Profile => "Profile",
            Page::Admin => "Admin Dashboard",
        }
    }

    /// Resolve a router path, ignoring a trailing slash
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|p| p.path() == normalized)
    }
}

/// Pages listed in the header navigation, in display order
pub const NAVIGATION_ITEMS: [Page; 5] = [
    Page::Home,
    Page::AiTools,
    Page::Courses,
    Page::AboutUs,
    Page::Contact,
];

/// Which header popover is open. At most one can be open at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OpenPopover {
    #[default]
    None,
    Currency,
    User,
    Mobile,
}

impl OpenPopover {
    /// Toggle `target`: opening it closes whatever else was open,
    /// toggling the already-open popover closes it.
    pub fn toggle(self, target: OpenPopover) -> OpenPopover {
        if self == target {
            OpenPopover::None
        } else {
            target
        }
    }

    pub fn is_open(self, target: OpenPopover) -> bool {
        target != OpenPopover::None && self == target
    }

    /// Close `target` if it is the one open; leave anything else alone
    pub fn close(self, target: OpenPopover) -> OpenPopover {
        if self == target { OpenPopover::None } else { self }
    }
}

/// Outcome of picking an entry in the header currency menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrencyChoice {
    pub currency: Currency,
    /// False when the picked currency was already selected
    pub changed: bool,
    pub open: OpenPopover,
}

/// Picking a currency always closes the currency menu. Picking the one
/// already selected changes nothing else.
pub fn select_currency(open: OpenPopover, current: Currency, chosen: Currency) -> CurrencyChoice {
    CurrencyChoice {
        currency: chosen,
        changed: chosen != current,
        open: open.close(OpenPopover::Currency),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert_eq!(Page::AiTools.to_string(), "ai-tools");
        assert_eq!(Page::AboutUs.to_string(), "about-us");
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Page::from_path("/"), Some(Page::Home));
        assert_eq!(Page::from_path(""), Some(Page::Home));
        assert_eq!(Page::from_path("/checkout/"), Some(Page::Checkout));
        assert_eq!(Page::from_path("/about-us"), Some(Page::AboutUs));
        assert_eq!(Page::from_path("/missing"), None);
    }

    #[test]
    fn test_navigation_order() {
        let labels: Vec<_> = NAVIGATION_ITEMS.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            vec!["Home", "AI Tools", "Courses", "About Us", "Contact Us"]
        );
    }

    #[test]
    fn test_popover_toggle_is_exclusive() {
        let open = OpenPopover::None.toggle(OpenPopover::Currency);
        assert!(open.is_open(OpenPopover::Currency));

        let open = open.toggle(OpenPopover::User);
        assert!(open.is_open(OpenPopover::User));
        assert!(!open.is_open(OpenPopover::Currency));

        let open = open.toggle(OpenPopover::User);
        assert_eq!(open, OpenPopover::None);
        assert!(!open.is_open(OpenPopover::None));
    }

    #[test]
    fn test_close_only_affects_target() {
        assert_eq!(OpenPopover::Currency.close(OpenPopover::Currency), OpenPopover::None);
        assert_eq!(OpenPopover::Mobile.close(OpenPopover::Currency), OpenPopover::Mobile);
    }

    #[test]
    fn test_select_currency_closes_menu() {
        let choice = select_currency(OpenPopover::Currency, Currency::Usd, Currency::Inr);
        assert_eq!(choice.currency, Currency::Inr);
        assert!(choice.changed);
        assert_eq!(choice.open, OpenPopover::None);
    }

    #[test]
    fn test_select_same_currency_is_noop_but_still_closes() {
        let choice = select_currency(OpenPopover::Currency, Currency::Eur, Currency::Eur);
        assert_eq!(choice.currency, Currency::Eur);
        assert!(!choice.changed);
        assert_eq!(choice.open, OpenPopover::None);
    }
}
