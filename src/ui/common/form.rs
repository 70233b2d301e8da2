use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Labelled text input with an inline error line.
///
/// Anything passed as children is laid over the right edge of the input,
/// e.g. a show/hide toggle for secret fields.
#[component]
pub fn FormField(
    label: &'static str,
    /// Form control name, also used as the element id
    #[prop(into)]
    name: String,
    #[prop(into, default = Signal::stored("text"))]
    input_type: Signal<&'static str>,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(optional)]
    autocomplete: Option<&'static str>,
    #[prop(optional_no_strip)]
    maxlength: Option<u32>,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into, optional)]
    error: Option<Signal<Option<String>>>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let has_error = move || error.map(|e| e.get().is_some()).unwrap_or(false);
    let has_trailing = children.is_some();
    let maxlength = maxlength.map(|n| n.to_string());

    view! {
        <div class="space-y-1.5">
            <label for=name.clone() class="label">{label}</label>
            <div class="relative">
                <input
                    type=move || input_type.get()
                    id=name.clone()
                    name=name
                    class="input-base"
                    class:pr-10=has_trailing
                    class:border-red-500=has_error
                    placeholder=placeholder
                    autocomplete=autocomplete
                    maxlength=maxlength
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    disabled=move || disabled.get()
                />
                {children.map(|c| view! {
                    <div class="absolute inset-y-0 right-0 pr-3 flex items-center">{c()}</div>
                })}
            </div>
            <FieldErrorLine error=error />
        </div>
    }
}

/// Labelled `<select>` over `(value, text)` pairs
#[component]
pub fn SelectField(
    label: &'static str,
    name: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    /// Shown first with an empty value
    #[prop(default = "Select...")]
    prompt: &'static str,
    options: &'static [(&'static str, &'static str)],
    #[prop(into, optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label for=name class="label">{label}</label>
            <select
                id=name
                name=name
                class="select-base"
                class:border-red-500=move || error.map(|e| e.get().is_some()).unwrap_or(false)
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{prompt}</option>
                {options.iter().map(|(val, text)| {
                    view! { <option value=*val>{*text}</option> }
                }).collect_view()}
            </select>
            <FieldErrorLine error=error />
        </div>
    }
}

#[component]
pub fn CheckboxField(
    label: &'static str,
    name: &'static str,
    #[prop(into)]
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="flex items-start gap-3">
            <input
                type="checkbox"
                id=name
                name=name
                class="mt-1 w-4 h-4 rounded border-theme-primary text-theme-accent focus:ring-2 focus:ring-theme-accent"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
                disabled=move || disabled.get()
            />
            <label for=name class="label cursor-pointer">{label}</label>
        </div>
    }
}

#[component]
fn FieldErrorLine(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error.and_then(|e| e.get()).map(|err| view! {
            <div class="flex items-center text-sm text-theme-error">
                <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                <span>{err}</span>
            </div>
        })
    }
}
