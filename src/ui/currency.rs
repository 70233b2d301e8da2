//! Selected display currency

use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::core::{Currency, OpenPopover, select_currency};
use crate::ui::storage::{self, CURRENCY_KEY};

#[derive(Clone, Copy)]
pub struct CurrencyService {
    pub currency: RwSignal<Currency>,
}

impl CurrencyService {
    pub fn new() -> Self {
        let currency = RwSignal::new(Currency::default());

        #[cfg(not(feature = "ssr"))]
        {
            Effect::new(move |_| {
                if let Some(stored) = storage::load::<Currency>(CURRENCY_KEY) {
                    currency.set(stored);
                }
            });
        }

        Self { currency }
    }

    /// Apply a pick from the header menu and close the menu. Picking the
    /// current currency again leaves the selection and storage untouched.
    pub fn select(&self, chosen: Currency, open: RwSignal<OpenPopover>) {
        let choice = select_currency(
            open.get_untracked(),
            self.currency.get_untracked(),
            chosen,
        );
        open.set(choice.open);
        if !choice.changed {
            return;
        }
        self.currency.set(choice.currency);
        storage::persist(CURRENCY_KEY, &choice.currency);
        tracing::debug!(currency = %choice.currency, "currency changed");
    }

    /// Format a USD amount in the selected currency; tracks the selection
    pub fn format_price(&self, usd: Decimal) -> String {
        self.currency.get().format_price(usd)
    }
}

impl Default for CurrencyService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_updates_currency_and_closes_menu() {
        let owner = Owner::new();
        owner.with(|| {
            let service = CurrencyService::new();
            let open = RwSignal::new(OpenPopover::Currency);

            service.select(Currency::Inr, open);
            assert_eq!(service.currency.get_untracked(), Currency::Inr);
            assert_eq!(open.get_untracked(), OpenPopover::None);
            assert_eq!(
                service.currency.get_untracked().format_price(Decimal::new(30, 0)),
                "₹2,490.00"
            );
        });
    }

    #[test]
    fn test_reselecting_same_currency_still_closes_menu() {
        let owner = Owner::new();
        owner.with(|| {
            let service = CurrencyService::new();
            let open = RwSignal::new(OpenPopover::Currency);
            service.select(Currency::Inr, open);

            open.set(OpenPopover::Currency);
            service.select(Currency::Inr, open);
            assert_eq!(service.currency.get_untracked(), Currency::Inr);
            assert_eq!(open.get_untracked(), OpenPopover::None);
        });
    }
}
