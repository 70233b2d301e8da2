//! Shopping cart model
//!
//! Prices are unit prices in US dollars; currency conversion happens only
//! when the cart is displayed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A line in the cart
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub title: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            quantity: 1,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// `price * quantity`
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add an item, merging quantities when the id is already present
    pub fn add_item(&mut self, item: CartItem) {
        if item.quantity == 0 {
            return;
        }
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => existing.quantity += item.quantity,
            None => self.items.push(item),
        }
    }

    /// Remove a line entirely. Returns the removed line, if any.
    pub fn remove_item(&mut self, id: &str) -> Option<CartItem> {
        let index = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(index))
    }

    /// Set a line's quantity; zero removes the line
    pub fn set_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
        } else if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity;
        }
    }

    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(CartItem::new("gpt", "ChatGPT Plus", Decimal::new(2000, 2)));
        cart.add_item(CartItem::new("mj", "Midjourney", Decimal::new(1050, 2)).with_quantity(2));
        cart
    }

    #[test]
    fn test_totals() {
        let cart = sample_cart();
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), Decimal::new(4100, 2));
    }

    #[test]
    fn test_add_merges_same_id() {
        let mut cart = sample_cart();
        cart.add_item(CartItem::new("gpt", "ChatGPT Plus", Decimal::new(2000, 2)));
        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_add_ignores_zero_quantity() {
        let mut cart = Cart::new();
        cart.add_item(CartItem::new("x", "X", Decimal::ONE).with_quantity(0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_and_remove() {
        let mut cart = sample_cart();
        cart.set_quantity("mj", 5);
        assert_eq!(cart.total_items(), 6);

        cart.set_quantity("mj", 0);
        assert_eq!(cart.items().len(), 1);

        assert!(cart.remove_item("missing").is_none());
        let removed = cart.remove_item("gpt");
        assert_eq!(removed.map(|i| i.title), Some("ChatGPT Plus".to_string()));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = sample_cart();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }
}
