use leptos::prelude::*;

/// SVG icon served from `/icons/{name}.svg`
#[component]
pub fn Icon(
    /// File stem of the icon
    name: &'static str,
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon names used across the storefront
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CART: &str = "shopping-cart";
    pub const CHECK: &str = "check";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const EYE: &str = "eye";
    pub const EYE_CLOSED: &str = "eye-closed";
    pub const INFORMATION_CIRCLE: &str = "information-circle";
    pub const LOCK: &str = "lock";
    pub const LOGOUT: &str = "logout";
    pub const MENU: &str = "menu";
    pub const MOON: &str = "moon";
    pub const SHIELD: &str = "shield";
    pub const SPARKLES: &str = "sparkles";
    pub const SUN: &str = "sun";
    pub const TRASH: &str = "trash";
    pub const USER: &str = "user";
    pub const X: &str = "x";
}
