//! Cart page: quantities, removal and the hand-off to checkout

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::{CartItem, Page};
use crate::ui::icon::{Icon, icons};
use crate::ui::services::AppServices;

#[component]
pub fn CartPage(services: AppServices, on_page_change: Callback<Page>) -> impl IntoView {
    let cart = services.cart;
    let currency = services.currency;

    view! {
        <Title text="Cart" />
        <section class="max-w-3xl mx-auto px-4 py-12">
            <h1 class="text-3xl font-bold text-theme-primary mb-8">"Your Cart"</h1>
            <Show
                when=move || !cart.is_empty()
                fallback=move || view! {
                    <div class="text-center py-16">
                        <p class="text-theme-secondary mb-6">"Your cart is empty."</p>
                        <button
                            type="button"
                            class="px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg"
                            on:click=move |_| on_page_change.run(Page::AiTools)
                        >
                            "Continue Shopping"
                        </button>
                    </div>
                }
            >
                <ul class="divide-y divide-theme border border-theme rounded-xl">
                    <For
                        each=move || cart.items()
                        key=|item| (item.id.clone(), item.quantity)
                        let:item
                    >
                        <CartRow item=item services=services />
                    </For>
                </ul>
                <div class="mt-6 flex items-center justify-between">
                    <span class="text-lg text-theme-secondary">"Total"</span>
                    <span class="text-2xl font-bold text-theme-primary">
                        {move || currency.format_price(cart.total_price())}
                    </span>
                </div>
                <button
                    type="button"
                    class="mt-6 w-full py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg"
                    on:click=move |_| on_page_change.run(Page::Checkout)
                >
                    "Proceed to Checkout"
                </button>
            </Show>
        </section>
    }
}

#[component]
fn CartRow(item: CartItem, services: AppServices) -> impl IntoView {
    let cart = services.cart;
    let id = StoredValue::new(item.id.clone());
    let quantity = item.quantity;
    let line_total = item.line_total();
    let unit_price = item.price;

    view! {
        <li class="flex items-center gap-4 p-4">
            <div class="flex-1">
                <p class="font-medium text-theme-primary">{item.title.clone()}</p>
                <p class="text-sm text-theme-tertiary">
                    {move || services.currency.format_price(unit_price)}
                    " each"
                </p>
            </div>
            <div class="flex items-center gap-2">
                <button
                    type="button"
                    class="w-8 h-8 rounded border border-theme"
                    aria-label="Decrease quantity"
                    on:click=move |_| cart.set_quantity(&id.get_value(), quantity.saturating_sub(1))
                >
                    "-"
                </button>
                <span class="w-8 text-center">{quantity}</span>
                <button
                    type="button"
                    class="w-8 h-8 rounded border border-theme"
                    aria-label="Increase quantity"
                    on:click=move |_| cart.set_quantity(&id.get_value(), quantity + 1)
                >
                    "+"
                </button>
            </div>
            <span class="w-24 text-right font-medium text-theme-primary">
                {move || services.currency.format_price(line_total)}
            </span>
            <button
                type="button"
                class="p-2 text-theme-tertiary hover:text-red-500"
                aria-label="Remove from cart"
                on:click=move |_| cart.remove_item(&id.get_value())
            >
                <Icon name=icons::TRASH class="w-4 h-4" />
            </button>
        </li>
    }
}
