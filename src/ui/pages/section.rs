//! Simple content pages: home, courses, about, contact, profile and admin

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::Page;
use crate::ui::auth::UserAvatar;
use crate::ui::services::AppServices;

#[component]
pub fn SectionPage(
    page: Page,
    services: AppServices,
    on_page_change: Callback<Page>,
) -> impl IntoView {
    let body = match page {
        Page::Home => view! {
            <div class="text-center py-20">
                <h1 class="text-5xl font-bold text-theme-primary mb-6">"AI Tool Hub"</h1>
                <p class="text-xl text-theme-secondary max-w-2xl mx-auto mb-10">
                    "Find, compare and subscribe to the best AI tools in one place."
                </p>
                <button
                    type="button"
                    class="px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg"
                    on:click=move |_| on_page_change.run(Page::AiTools)
                >
                    "Browse AI Tools"
                </button>
            </div>
        }
        .into_any(),
        Page::Profile | Page::Admin => view! { <AccountSection page=page services=services on_page_change=on_page_change /> }.into_any(),
        other => view! {
            <div class="py-12">
                <h1 class="text-3xl font-bold text-theme-primary mb-4">{other.label()}</h1>
                <p class="text-theme-secondary">"Coming soon."</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <Title text=page.label() />
        <section class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">{body}</section>
    }
}

/// Profile and admin pages need a verified user; admin also needs the role
#[component]
fn AccountSection(page: Page, services: AppServices, on_page_change: Callback<Page>) -> impl IntoView {
    let auth = services.auth;

    move || {
        let Some(user) = auth.verified_user() else {
            return view! {
                <div class="py-12 text-center">
                    <p class="text-theme-secondary mb-6">"Please sign in to continue."</p>
                    <button
                        type="button"
                        class="px-6 py-3 bg-accent-primary text-white font-medium rounded-lg"
                        on:click=move |_| on_page_change.run(Page::Auth)
                    >
                        "Sign In"
                    </button>
                </div>
            }
            .into_any();
        };

        if page == Page::Admin && !user.is_admin() {
            return view! {
                <div class="py-12">
                    <h1 class="text-3xl font-bold text-theme-primary mb-4">{page.label()}</h1>
                    <p class="text-theme-secondary">"You do not have access to this page."</p>
                </div>
            }
            .into_any();
        }

        view! {
            <div class="py-12 flex items-center gap-6">
                <UserAvatar user=user.clone() size=64 />
                <div>
                    <h1 class="text-3xl font-bold text-theme-primary">{page.label()}</h1>
                    <p class="text-theme-secondary">{format!("{} · {}", user.username, user.email)}</p>
                </div>
            </div>
        }
        .into_any()
    }
}
