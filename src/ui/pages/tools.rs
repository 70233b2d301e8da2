//! AI tools catalogue

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::{CATALOG, Product};
use crate::ui::services::AppServices;

#[component]
pub fn ToolsPage(services: AppServices) -> impl IntoView {
    view! {
        <Title text="AI Tools" />
        <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <h1 class="text-3xl font-bold text-theme-primary mb-2">"AI Tools"</h1>
            <p class="text-theme-secondary mb-8">"Subscriptions to the tools people actually use."</p>
            <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                {CATALOG.iter().map(|product| view! {
                    <ProductCard product=product services=services />
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProductCard(product: &'static Product, services: AppServices) -> impl IntoView {
    let add = move |_| {
        services.cart.add_item(product.to_cart_item());
        services.toasts.success(format!("{} added to cart", product.title));
    };

    view! {
        <article class="flex flex-col p-6 rounded-xl border border-theme bg-theme-primary shadow-sm">
            <h2 class="text-lg font-semibold text-theme-primary">{product.title}</h2>
            <p class="mt-2 flex-1 text-sm text-theme-secondary">{product.description}</p>
            <p class="mt-4 text-xl font-bold text-theme-primary">
                {move || services.currency.format_price(product.price())}
                <span class="text-sm font-normal text-theme-tertiary">" / month"</span>
            </p>
            <button
                type="button"
                class="mt-4 w-full py-2 px-4 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
                on:click=add
            >
                "Add to Cart"
            </button>
        </article>
    }
}
