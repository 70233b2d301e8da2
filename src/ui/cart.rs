//! Reactive cart service, persisted to localStorage as JSON

use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::core::{Cart, CartItem};
use crate::ui::storage::{self, CART_KEY};

#[derive(Clone, Copy)]
pub struct CartService {
    cart: RwSignal<Cart>,
}

impl CartService {
    pub fn new() -> Self {
        let cart = RwSignal::new(Cart::new());

        #[cfg(not(feature = "ssr"))]
        {
            Effect::new(move |_| {
                if let Some(stored) = storage::load::<Cart>(CART_KEY) {
                    cart.set(stored);
                }
            });
        }

        Self { cart }
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.cart.with(|c| c.items().to_vec())
    }

    pub fn is_empty(&self) -> bool {
        self.cart.with(Cart::is_empty)
    }

    pub fn total_items(&self) -> u32 {
        self.cart.with(Cart::total_items)
    }

    pub fn total_price(&self) -> Decimal {
        self.cart.with(Cart::total_price)
    }

    pub fn with<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
        self.cart.with(f)
    }

    /// Read the cart without tracking
    pub fn with_untracked<R>(&self, f: impl FnOnce(&Cart) -> R) -> R {
        self.cart.with_untracked(f)
    }

    pub fn add_item(&self, item: CartItem) {
        tracing::debug!(id = %item.id, "add to cart");
        self.mutate(|c| c.add_item(item));
    }

    pub fn remove_item(&self, id: &str) {
        self.mutate(|c| {
            c.remove_item(id);
        });
    }

    pub fn set_quantity(&self, id: &str, quantity: u32) {
        self.mutate(|c| c.set_quantity(id, quantity));
    }

    pub fn clear(&self) {
        self.mutate(Cart::clear);
    }

    /// Apply a change and write the result through to storage
    pub fn mutate(&self, f: impl FnOnce(&mut Cart)) {
        self.cart.update(f);
        self.cart.with_untracked(|c| storage::persist(CART_KEY, c));
    }
}

impl Default for CartService {
    fn default() -> Self {
        Self::new()
    }
}
