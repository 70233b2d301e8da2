//! Site header
//!
//! Navigation, theme toggle, currency selector, cart badge and account menu.
//! The three popovers (currency, account, mobile) share one [`OpenPopover`]
//! value, so opening one closes the others.

use leptos::prelude::*;

use crate::core::{Currency, NAVIGATION_ITEMS, OpenPopover, Page};
use crate::ui::auth::UserMenu;
use crate::ui::common::{Popover, PopoverItem};
use crate::ui::icon::{Icon, icons};
use crate::ui::services::AppServices;
use crate::ui::theme::ThemeService;

#[component]
pub fn Header(
    #[prop(into)]
    current_page: Signal<Option<Page>>,
    on_page_change: Callback<Page>,
    services: AppServices,
) -> impl IntoView {
    let open = RwSignal::new(OpenPopover::None);

    let go = move |page: Page| {
        open.set(OpenPopover::None);
        on_page_change.run(page);
    };

    view! {
        <header class="sticky top-0 z-40 bg-theme-primary/80 backdrop-blur-md border-b border-theme/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <button
                        type="button"
                        class="flex items-center gap-2 hover:opacity-80 transition-opacity"
                        on:click=move |_| go(Page::Home)
                    >
                        <Icon name=icons::SPARKLES class="w-7 h-7" />
                        <span class="text-xl font-bold text-theme-primary">"AI Tool Hub"</span>
                    </button>

                    <nav class="hidden md:flex items-center gap-6" aria-label="Main">
                        {NAVIGATION_ITEMS.iter().map(|&page| view! {
                            <NavLink page=page current_page=current_page on_select=Callback::new(move |_| go(page)) />
                        }).collect_view()}
                    </nav>

                    <div class="flex items-center gap-2">
                        <ThemeToggle theme=services.theme />
                        <CurrencySelector services=services open=open />
                        <CartButton services=services on_select=Callback::new(move |_| go(Page::Cart)) />
                        <div class="hidden md:block">
                            <UserMenu auth=services.auth open=open on_page_change=on_page_change />
                        </div>
                        <button
                            type="button"
                            class="md:hidden p-2 rounded-lg hover:bg-theme-secondary transition-colors"
                            aria-label="Toggle mobile menu"
                            aria-expanded=move || open.get().is_open(OpenPopover::Mobile).to_string()
                            on:click=move |_| open.update(|o| *o = o.toggle(OpenPopover::Mobile))
                        >
                            {move || {
                                let icon = if open.get().is_open(OpenPopover::Mobile) { icons::X } else { icons::MENU };
                                view! { <Icon name=icon class="w-6 h-6" /> }
                            }}
                        </button>
                    </div>
                </div>

                <Show when=move || open.get().is_open(OpenPopover::Mobile)>
                    <MobileMenu services=services current_page=current_page on_page_change=on_page_change open=open />
                </Show>
            </div>
        </header>
    }
}

#[component]
fn NavLink(page: Page, current_page: Signal<Option<Page>>, on_select: Callback<()>) -> impl IntoView {
    let active = move || current_page.get() == Some(page);

    view! {
        <button
            type="button"
            class="text-sm font-medium transition-colors"
            class:text-accent-primary=active
            class:text-theme-secondary=move || !active()
            aria-current=move || active().then_some("page")
            on:click=move |_| on_select.run(())
        >
            {page.label()}
        </button>
    }
}

#[component]
fn ThemeToggle(theme: ThemeService) -> impl IntoView {
    view! {
        <button
            type="button"
            class="p-2 rounded-lg hover:bg-theme-secondary transition-colors"
            aria-label=move || theme.mode.get().toggle_label()
            on:click=move |_| theme.toggle()
        >
            {move || {
                let icon = if theme.is_dark.get() { icons::SUN } else { icons::MOON };
                view! { <Icon name=icon class="w-5 h-5" /> }
            }}
        </button>
    }
}

#[component]
fn CurrencySelector(services: AppServices, open: RwSignal<OpenPopover>) -> impl IntoView {
    let currency = services.currency;

    view! {
        <Popover
            open=Signal::derive(move || open.get().is_open(OpenPopover::Currency))
            on_toggle=Callback::new(move |_| open.update(|o| *o = o.toggle(OpenPopover::Currency)))
            on_close=Callback::new(move |_| open.set(OpenPopover::None))
            label="Select currency"
            trigger=Box::new(move || view! {
                <span class="flex items-center gap-1 text-sm font-medium">
                    {move || {
                        let c = currency.currency.get();
                        format!("{} {}", c.symbol(), c.code())
                    }}
                    <Icon name=icons::CHEVRON_DOWN class="h-4 w-4" />
                </span>
            }.into_any())
        >
            {Currency::ALL.iter().map(|&c| view! {
                <PopoverItem
                    active=Signal::derive(move || currency.currency.get() == c)
                    on_select=Callback::new(move |_| currency.select(c, open))
                >
                    <span class="w-6">{c.symbol()}</span>
                    <span>{c.code()}</span>
                </PopoverItem>
            }).collect_view()}
        </Popover>
    }
}

#[component]
fn CartButton(services: AppServices, on_select: Callback<()>) -> impl IntoView {
    let count = Memo::new(move |_| services.cart.total_items());

    view! {
        <button
            type="button"
            class="relative p-2 rounded-lg hover:bg-theme-secondary transition-colors"
            aria-label=move || format!("Cart ({} items)", count.get())
            on:click=move |_| on_select.run(())
        >
            <Icon name=icons::CART class="w-5 h-5" />
            <Show when=move || { count.get() > 0 }>
                <span class="absolute -top-1 -right-1 min-w-[1.25rem] h-5 px-1 rounded-full bg-red-500 text-white text-xs flex items-center justify-center">
                    {move || count.get()}
                </span>
            </Show>
        </button>
    }
}

#[component]
fn MobileMenu(
    services: AppServices,
    current_page: Signal<Option<Page>>,
    on_page_change: Callback<Page>,
    open: RwSignal<OpenPopover>,
) -> impl IntoView {
    let auth = services.auth;
    let go = move |page: Page| {
        open.set(OpenPopover::None);
        on_page_change.run(page);
    };
    let link_class = "block w-full text-left px-4 py-2 text-sm font-medium rounded-lg hover:bg-theme-secondary/30 transition-colors";

    view! {
        <div class="md:hidden py-4 space-y-2 border-t border-theme/50">
            <nav class="flex flex-col gap-1" aria-label="Mobile">
                {NAVIGATION_ITEMS.iter().map(|&page| view! {
                    <button
                        type="button"
                        class=link_class
                        class:text-accent-primary=move || current_page.get() == Some(page)
                        on:click=move |_| go(page)
                    >
                        {page.label()}
                    </button>
                }).collect_view()}
            </nav>
            <div class="border-t border-theme/50 pt-2 flex flex-col gap-1">
                {move || match auth.verified_user() {
                    Some(user) => view! {
                        <p class="px-4 py-2 text-sm text-theme-secondary">{format!("Hello, {}", user.username)}</p>
                        <button type="button" class=link_class on:click=move |_| go(Page::Profile)>
                            {Page::Profile.label()}
                        </button>
                        {user.is_admin().then(|| view! {
                            <button type="button" class=link_class on:click=move |_| go(Page::Admin)>
                                {Page::Admin.label()}
                            </button>
                        })}
                        <button
                            type="button"
                            class=format!("{} text-red-500", link_class)
                            on:click=move |_| {
                                auth.logout();
                                go(Page::Home);
                            }
                        >
                            "Sign Out"
                        </button>
                    }
                    .into_any(),
                    None => view! {
                        <button type="button" class=link_class on:click=move |_| go(Page::Auth)>
                            "Sign In / Sign Up"
                        </button>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
