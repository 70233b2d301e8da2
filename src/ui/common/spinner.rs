use leptos::prelude::*;

/// Small spinner sized for button labels
#[component]
pub fn InlineSpinner() -> impl IntoView {
    view! {
        <span class="spinner spinner-ring spinner-sm spinner-inline" role="status">
            <span class="spinner-ring-inner"></span>
        </span>
    }
}
