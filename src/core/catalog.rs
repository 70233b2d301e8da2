//! Demo catalogue of AI tools sold by the storefront

use rust_decimal::Decimal;

use super::cart::CartItem;

/// A purchasable tool subscription
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Price in US cents
    pub price_cents: i64,
}

impl Product {
    pub fn price(&self) -> Decimal {
        Decimal::new(self.price_cents, 2)
    }

    pub fn to_cart_item(&self) -> CartItem {
        CartItem::new(self.id, self.title, self.price())
    }
}

pub static CATALOG: [Product; 4] = [
    Product {
        id: "chatgpt-plus",
        title: "ChatGPT Plus",
        description: "Conversational assistant for writing, coding and research.",
        price_cents: 2000,
    },
    Product {
        id: "midjourney-standard",
        title: "Midjourney Standard",
        description: "Text-to-image generation with fast GPU hours.",
        price_cents: 3000,
    },
    Product {
        id: "github-copilot",
        title: "GitHub Copilot",
        description: "AI pair programmer inside your editor.",
        price_cents: 1000,
    },
    Product {
        id: "notion-ai",
        title: "Notion AI",
        description: "Summaries, drafts and Q&A across your workspace.",
        price_cents: 1000,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in CATALOG.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_product_to_cart_item() {
        let product = CATALOG
            .iter()
            .find(|p| p.id == "chatgpt-plus")
            .expect("product exists");
        let item = product.to_cart_item();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price, Decimal::new(20, 0));
    }
}
