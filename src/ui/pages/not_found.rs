//! 404 page

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::Page;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage(on_page_change: Callback<Page>) -> impl IntoView {
    view! {
        <Title text="Page Not Found" />
        <div class="min-h-[calc(100vh-4rem)] flex flex-col items-center justify-center p-4 text-center">
            <div class="w-24 h-24 mx-auto mb-6 bg-theme-secondary rounded-full flex items-center justify-center">
                <Icon name=icons::ALERT_CIRCLE class="w-12 h-12 text-theme-tertiary" />
            </div>
            <h1 class="text-6xl font-bold text-theme-primary mb-4">"404"</h1>
            <h2 class="text-2xl font-semibold text-theme-primary mb-2">"Page Not Found"</h2>
            <p class="text-theme-secondary mb-8 max-w-md mx-auto">
                "The page you're looking for doesn't exist or has been moved."
            </p>
            <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                <button
                    type="button"
                    class="px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
                    on:click=move |_| on_page_change.run(Page::Home)
                >
                    "Go Home"
                </button>
                <button
                    type="button"
                    class="px-6 py-3 border border-theme text-theme-primary hover:bg-theme-secondary font-medium rounded-lg transition-colors"
                    on:click=move |_| on_page_change.run(Page::AiTools)
                >
                    "Browse AI Tools"
                </button>
            </div>
        </div>
    }
}
