//! Header account menu
//!
//! Signed in: avatar button opening a popover with a greeting, Profile,
//! Admin Dashboard (admins only) and Sign Out. Signed out: a single
//! "Sign In / Sign Up" button.

use leptos::prelude::*;

use super::context::AuthService;
use crate::core::{OpenPopover, Page, User};
use crate::ui::common::{Popover, PopoverItem};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn UserMenu(
    auth: AuthService,
    open: RwSignal<OpenPopover>,
    on_page_change: Callback<Page>,
) -> impl IntoView {
    let go = move |page: Page| {
        open.set(OpenPopover::None);
        on_page_change.run(page);
    };

    let sign_out = move || {
        open.set(OpenPopover::None);
        auth.logout();
        on_page_change.run(Page::Home);
    };

    move || match auth.verified_user() {
        Some(user) => {
            let is_admin = user.is_admin();
            let greeting = format!("Hello, {}", user.username);
            view! {
                <Popover
                    open=Signal::derive(move || open.get().is_open(OpenPopover::User))
                    on_toggle=Callback::new(move |_| open.update(|o| *o = o.toggle(OpenPopover::User)))
                    on_close=Callback::new(move |_| open.set(OpenPopover::None))
                    label="Account menu"
                    trigger=Box::new(move || view! {
                        <span class="flex items-center gap-2">
                            <UserAvatar user=user.clone() size=32 />
                            <Icon name=icons::CHEVRON_DOWN class="h-4 w-4" />
                        </span>
                    }.into_any())
                >
                    <div class="px-4 py-3 border-b border-theme">
                        <p class="text-sm font-medium text-theme-primary truncate">{greeting.clone()}</p>
                    </div>
                    <PopoverItem on_select=Callback::new(move |_| go(Page::Profile))>
                        <Icon name=icons::USER class="h-4 w-4" />
                        {Page::Profile.label()}
                    </PopoverItem>
                    {is_admin.then(|| view! {
                        <PopoverItem on_select=Callback::new(move |_| go(Page::Admin))>
                            <Icon name=icons::SHIELD class="h-4 w-4" />
                            {Page::Admin.label()}
                        </PopoverItem>
                    })}
                    <div class="dropdown-separator"></div>
                    <PopoverItem danger=true on_select=Callback::new(move |_| sign_out())>
                        <Icon name=icons::LOGOUT class="h-4 w-4" />
                        "Sign Out"
                    </PopoverItem>
                </Popover>
            }
            .into_any()
        }
        None => view! {
            <button
                type="button"
                class="px-3 py-1.5 text-sm font-medium text-white bg-accent-primary hover:bg-accent-primary-hover rounded-lg transition-colors"
                on:click=move |_| go(Page::Auth)
            >
                "Sign In / Sign Up"
            </button>
        }
        .into_any(),
    }
}

/// Round avatar showing the first letter of the username
#[component]
pub fn UserAvatar(
    user: User,
    #[prop(default = 32)]
    size: u32,
) -> impl IntoView {
    let initial = user
        .username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());

    // Stable colour per username
    let hash = user
        .username
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_add(b as u32));
    let colors = [
        "bg-blue-500",
        "bg-green-500",
        "bg-purple-500",
        "bg-pink-500",
        "bg-indigo-500",
        "bg-teal-500",
    ];
    let color = colors[(hash as usize) % colors.len()];
    let font_size = if size >= 40 { "text-lg" } else { "text-sm" };

    view! {
        <div
            class=format!("{} rounded-full flex items-center justify-center text-white font-medium {}", color, font_size)
            style=format!("width: {0}px; height: {0}px; min-width: {0}px;", size)
            title=user.username.clone()
        >
            {initial}
        </div>
    }
}
