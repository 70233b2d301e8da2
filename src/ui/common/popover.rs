use leptos::prelude::*;

/// Controlled dropdown panel.
///
/// The parent owns the open state, so several popovers can share a single
/// "which one is open" value. Clicking the backdrop calls `on_close`.
#[component]
pub fn Popover(
    #[prop(into)]
    open: Signal<bool>,
    on_toggle: Callback<()>,
    on_close: Callback<()>,
    /// Accessible name for the trigger button
    label: &'static str,
    trigger: Children,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div class="dropdown-container dropdown-align-right">
            <button
                type="button"
                class="dropdown-trigger"
                aria-label=label
                aria-haspopup="true"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| on_toggle.run(())
            >
                {trigger()}
            </button>

            <Show when=move || open.get()>
                <div class="dropdown-backdrop" on:click=move |_| on_close.run(())></div>
                <div class="dropdown-menu" role="menu">
                    {children()}
                </div>
            </Show>
        </div>
    }
}

/// One entry in a popover menu
#[component]
pub fn PopoverItem(
    on_select: Callback<()>,
    #[prop(into, default = Signal::stored(false))]
    active: Signal<bool>,
    #[prop(default = false)]
    danger: bool,
    children: Children,
) -> impl IntoView {
    let variant = if danger { "dropdown-item-danger" } else { "dropdown-item-normal" };

    view! {
        <button
            type="button"
            role="menuitem"
            class=format!("dropdown-item {}", variant)
            class:dropdown-item-active=move || active.get()
            on:click=move |_| on_select.run(())
        >
            {children()}
        </button>
    }
}
