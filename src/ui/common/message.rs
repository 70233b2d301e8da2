//! Inline message components

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Shows the message while the signal holds one
#[component]
pub fn ErrorMessage(
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Always-visible informational note
#[component]
pub fn InfoNote(children: Children) -> impl IntoView {
    view! {
        <div class="flex items-start gap-2 p-3 rounded-lg text-sm bg-blue-500/10 text-blue-600 dark:text-blue-400">
            <Icon name=icons::INFORMATION_CIRCLE class="icon-text mt-0.5"/>
            <div>{children()}</div>
        </div>
    }
}
