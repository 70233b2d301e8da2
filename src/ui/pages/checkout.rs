//! Checkout page
//!
//! Guards come first: signed-out visitors get a sign-in prompt, a finished
//! order gets its confirmation and an empty cart gets a shopping prompt.
//! Otherwise the three step form is shown next to the order summary.
//!
//! Submitting runs the scripted payment sequence as one abortable task.
//! Leaving the page aborts it, so a half-finished run never completes the
//! order or empties the cart.

use std::time::Duration;

use futures::future::{AbortHandle, Abortable};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::core::checkout::CheckoutState;
use crate::core::payment::PROCESSING_TOAST_ID;
use crate::core::{
    COUNTRIES, CardBrand, Cart, CartItem, CheckoutField, CheckoutStep, OrderSummary, Page,
    PaymentPhase, YearMonth, run_payment_sequence,
};
use crate::ui::common::{CheckboxField, FormField, InlineSpinner, SelectField};
use crate::ui::icon::{Icon, icons};
use crate::ui::services::AppServices;

/// Browser timer; the server never runs the sequence
#[cfg(not(feature = "ssr"))]
fn sleep(duration: Duration) -> gloo_timers::future::TimeoutFuture {
    gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32)
}

#[cfg(feature = "ssr")]
fn sleep(_duration: Duration) -> futures::future::Ready<()> {
    futures::future::ready(())
}

/// Clear the running payment's abort handle, if any. Safe after disposal.
fn take_pending(pending: StoredValue<Option<AbortHandle>>) -> Option<AbortHandle> {
    pending.try_update_value(Option::take).flatten()
}

#[component]
pub fn CheckoutPage(services: AppServices, on_page_change: Callback<Page>) -> impl IntoView {
    let auth = services.auth;
    let cart = services.cart;

    let state = RwSignal::new(CheckoutState::new(String::new()));

    // Prefill the contact email once a verified user is known
    Effect::new(move |_| {
        if let Some(user) = auth.verified_user() {
            state.update(|s| {
                if s.form.email.is_empty() {
                    s.form.email = user.email;
                }
            });
        }
    });

    let order_complete = Memo::new(move |_| state.with(|s| s.order_complete));

    view! {
        <Title text="Checkout" />
        {move || {
            if !auth.is_authenticated() {
                view! { <SignInPrompt on_page_change=on_page_change /> }.into_any()
            } else if order_complete.get() {
                view! { <OrderComplete on_page_change=on_page_change /> }.into_any()
            } else if cart.is_empty() {
                view! { <EmptyCart on_page_change=on_page_change /> }.into_any()
            } else {
                view! { <CheckoutFlow services=services state=state /> }.into_any()
            }
        }}
    }
}

#[component]
fn CheckoutFlow(services: AppServices, state: RwSignal<CheckoutState>) -> impl IntoView {
    let cart = services.cart;
    let toasts = services.toasts;
    let pending = StoredValue::new(None::<AbortHandle>);

    on_cleanup(move || {
        if let Some(handle) = take_pending(pending) {
            handle.abort();
            toasts.dismiss(PROCESSING_TOAST_ID);
            tracing::debug!("payment sequence aborted");
        }
    });

    let start_payment = move || {
        let (handle, registration) = AbortHandle::new_pair();
        pending.set_value(Some(handle));

        spawn_local(async move {
            let on_phase = move |phase: PaymentPhase| {
                if let Some(message) = phase.message() {
                    toasts.loading(PROCESSING_TOAST_ID, message);
                }
                let mut scratch = cart.with_untracked(Cart::clone);
                state.update(|s| s.enter_phase(phase, &mut scratch));
                if phase == PaymentPhase::Done {
                    cart.mutate(|c| *c = scratch);
                    toasts.dismiss(PROCESSING_TOAST_ID);
                    toasts.success("Order placed successfully!");
                }
            };

            let run = Abortable::new(run_payment_sequence(sleep, on_phase), registration);
            if run.await.is_ok() {
                take_pending(pending);
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = state.try_update(|s| s.begin_payment(YearMonth::current()));
        match outcome {
            Some(Ok(())) => start_payment(),
            Some(Err(err)) => {
                tracing::warn!(%err, "checkout submission rejected");
                toasts.error(err.to_string());
            }
            None => {}
        }
    };

    let step = Memo::new(move |_| state.with(|s| s.step));
    let processing = Memo::new(move |_| state.with(|s| s.is_processing()));
    let can_submit = Memo::new(move |_| state.with(|s| s.can_submit()));

    view! {
        <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="text-center mb-8">
                <h1 class="text-4xl font-bold text-theme-primary mb-2">"Secure Checkout"</h1>
                <p class="text-theme-secondary">"Complete your purchase securely"</p>
            </div>

            <ProgressSteps step=step />

            <div class="grid lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2 bg-theme-primary rounded-2xl shadow-xl p-8 border border-theme">
                    <form on:submit=on_submit class="space-y-8" novalidate=true>
                        {move || match step.get() {
                            CheckoutStep::Contact => view! { <ContactStep state=state /> }.into_any(),
                            CheckoutStep::Shipping => view! { <ShippingStep state=state /> }.into_any(),
                            CheckoutStep::Payment => view! { <PaymentStep state=state /> }.into_any(),
                        }}

                        <div class="flex justify-between pt-6 border-t border-theme">
                            <Show when=move || !step.get().is_first() fallback=|| view! { <div></div> }>
                                <button
                                    type="button"
                                    class="px-6 py-3 border border-theme text-theme-primary rounded-lg hover:bg-theme-secondary"
                                    disabled=move || processing.get()
                                    on:click=move |_| state.update(CheckoutState::prev_step)
                                >
                                    "Previous"
                                </button>
                            </Show>
                            <Show
                                when=move || step.get().is_last()
                                fallback=move || view! {
                                    <button
                                        type="button"
                                        class="px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white rounded-lg"
                                        on:click=move |_| state.update(CheckoutState::next_step)
                                    >
                                        "Next"
                                    </button>
                                }
                            >
                                <button
                                    type="submit"
                                    class="px-8 py-3 rounded-lg font-semibold flex items-center justify-center bg-accent-primary hover:bg-accent-primary-hover text-white disabled:opacity-50 disabled:cursor-not-allowed"
                                    disabled=move || !can_submit.get()
                                >
                                    <Show
                                        when=move || processing.get()
                                        fallback=move || view! {
                                            <Icon name=icons::LOCK class="w-4 h-4 mr-2" />
                                            <span>"Complete Order"</span>
                                        }
                                    >
                                        <InlineSpinner />
                                        <span class="ml-2">"Processing..."</span>
                                    </Show>
                                </button>
                            </Show>
                        </div>
                    </form>
                </div>

                <OrderSummaryPanel services=services />
            </div>
        </div>
    }
}

#[component]
fn ProgressSteps(step: Memo<CheckoutStep>) -> impl IntoView {
    view! {
        <ol class="flex items-center justify-center mb-8" aria-label="Checkout progress">
            {CheckoutStep::ALL.iter().map(|&s| {
                let reached = move || step.get() >= s;
                view! {
                    <li class="flex items-center">
                        <div
                            class="w-12 h-12 rounded-full flex items-center justify-center text-lg"
                            class:bg-accent-primary=reached
                            class:text-white=reached
                            class:bg-theme-secondary=move || !reached()
                            aria-current=move || (step.get() == s).then_some("step")
                        >
                            {s.icon()}
                        </div>
                        <span class="ml-2 text-sm font-medium" class:text-accent-primary=reached>
                            {s.title()}
                        </span>
                        {(!s.is_last()).then(|| view! {
                            <div
                                class="w-16 h-1 mx-4 rounded"
                                class:bg-accent-primary={move || step.get() > s}
                                class:bg-theme-secondary={move || step.get() <= s}
                            ></div>
                        })}
                    </li>
                }
            }).collect_view()}
        </ol>
    }
}

/// Text input bound to one checkout field
#[component]
fn CheckoutInput(
    state: RwSignal<CheckoutState>,
    field: CheckoutField,
    #[prop(into, default = Signal::stored("text"))]
    input_type: Signal<&'static str>,
    #[prop(optional)]
    maxlength: Option<u32>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let value = Signal::derive(move || state.with(|s| s.form.value(field).to_string()));
    let error = Signal::derive(move || state.with(|s| s.form.error(field)));
    let on_input = Callback::new(move |raw: String| {
        state.update(|s| s.form.set_field(field, &raw, YearMonth::current()));
    });

    match children {
        Some(children) => view! {
            <FormField
                label=field.label()
                name=field.to_string()
                input_type=input_type
                placeholder=field.placeholder()
                autocomplete=field.autocomplete()
                maxlength=maxlength
                value=value
                on_input=on_input
                error=error
            >
                {children()}
            </FormField>
        }
        .into_any(),
        None => view! {
            <FormField
                label=field.label()
                name=field.to_string()
                input_type=input_type
                placeholder=field.placeholder()
                autocomplete=field.autocomplete()
                maxlength=maxlength
                value=value
                on_input=on_input
                error=error
            />
        }
        .into_any(),
    }
}

#[component]
fn StepHeading(step: CheckoutStep, title: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center mb-6">
            <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center mr-3">
                <span class="text-white text-sm">{step.icon()}</span>
            </div>
            <h2 class="text-2xl font-bold text-theme-primary">{title}</h2>
        </div>
    }
}

#[component]
fn ContactStep(state: RwSignal<CheckoutState>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <StepHeading step=CheckoutStep::Contact title="Contact Information" />
            <CheckoutInput state=state field=CheckoutField::Email input_type="email" />
        </div>
    }
}

#[component]
fn ShippingStep(state: RwSignal<CheckoutState>) -> impl IntoView {
    let country = CheckoutField::Country;

    view! {
        <div class="space-y-6">
            <StepHeading step=CheckoutStep::Shipping title="Shipping Address" />
            <div class="grid sm:grid-cols-2 gap-4">
                <CheckoutInput state=state field=CheckoutField::FirstName />
                <CheckoutInput state=state field=CheckoutField::LastName />
            </div>
            <CheckoutInput state=state field=CheckoutField::Address />
            <div class="grid sm:grid-cols-3 gap-4">
                <CheckoutInput state=state field=CheckoutField::City />
                <SelectField
                    label=country.label()
                    name="country"
                    prompt=country.placeholder()
                    options=&COUNTRIES
                    value=Signal::derive(move || state.with(|s| s.form.country.clone()))
                    on_change=Callback::new(move |v: String| {
                        state.update(|s| s.form.set_field(country, &v, YearMonth::current()))
                    })
                    error=Signal::derive(move || state.with(|s| s.form.error(country)))
                />
                <CheckoutInput state=state field=CheckoutField::ZipCode />
            </div>
        </div>
    }
}

#[component]
fn PaymentStep(state: RwSignal<CheckoutState>) -> impl IntoView {
    let show_cvv = RwSignal::new(false);
    let brand = Memo::new(move |_| state.with(|s| s.form.card_brand()));

    view! {
        <div class="space-y-6">
            <StepHeading step=CheckoutStep::Payment title="Payment Information" />
            <CheckoutInput state=state field=CheckoutField::NameOnCard />
            <CheckoutInput state=state field=CheckoutField::CardNumber maxlength=19>
                <Show when=move || brand.get() != CardBrand::Unknown>
                    <span class="px-2 py-0.5 text-xs font-bold rounded bg-theme-secondary text-theme-primary">
                        {move || brand.get().badge()}
                    </span>
                </Show>
            </CheckoutInput>
            <div class="grid grid-cols-2 gap-4">
                <CheckoutInput state=state field=CheckoutField::ExpiryDate maxlength=5 />
                <CheckoutInput
                    state=state
                    field=CheckoutField::Cvv
                    input_type=Signal::derive(move || if show_cvv.get() { "text" } else { "password" })
                    maxlength=4
                >
                    <button
                        type="button"
                        class="text-theme-tertiary hover:text-theme-secondary"
                        aria-label=move || if show_cvv.get() { "Hide CVV" } else { "Show CVV" }
                        on:click=move |_| show_cvv.update(|v| *v = !*v)
                    >
                        {move || {
                            let icon = if show_cvv.get() { icons::EYE_CLOSED } else { icons::EYE };
                            view! { <Icon name=icon class="h-5 w-5" /> }
                        }}
                    </button>
                </CheckoutInput>
            </div>
            <div class="space-y-4">
                <CheckboxField
                    label="Save card for future purchases"
                    name="saveCard"
                    checked=Signal::derive(move || state.with(|s| s.form.save_card))
                    on_change=Callback::new(move |v| state.update(|s| s.form.save_card = v))
                />
                <CheckboxField
                    label="I agree to the Terms and Conditions"
                    name="agreeTerms"
                    checked=Signal::derive(move || state.with(|s| s.form.agree_terms))
                    on_change=Callback::new(move |v| state.update(|s| s.form.agree_terms = v))
                    disabled=Signal::derive(move || state.with(|s| s.is_processing()))
                />
            </div>
        </div>
    }
}

#[component]
fn OrderSummaryPanel(services: AppServices) -> impl IntoView {
    let cart = services.cart;
    let currency = services.currency;
    let summary = Memo::new(move |_| cart.with(OrderSummary::for_cart));

    view! {
        <aside class="bg-theme-primary rounded-2xl shadow-xl p-6 border border-theme h-fit sticky top-24">
            <h2 class="text-xl font-bold text-theme-primary mb-6">"Order Summary"</h2>
            <ul class="space-y-4 mb-6">
                <For
                    each=move || cart.items()
                    key=|item| (item.id.clone(), item.quantity)
                    let:item
                >
                    <SummaryLine item=item services=services />
                </For>
            </ul>
            <dl class="space-y-2 border-t border-theme pt-4 text-sm">
                <div class="flex justify-between">
                    <dt class="text-theme-secondary">"Subtotal"</dt>
                    <dd class="text-theme-primary">{move || currency.format_price(summary.get().subtotal)}</dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-theme-secondary">"Tax"</dt>
                    <dd class="text-theme-primary">{move || currency.format_price(summary.get().tax)}</dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-theme-secondary">"Shipping"</dt>
                    <dd class="text-green-600 dark:text-green-400">"Free"</dd>
                </div>
                <div class="flex justify-between border-t border-theme pt-2 text-lg font-bold">
                    <dt class="text-theme-primary">"Total"</dt>
                    <dd class="text-theme-primary">{move || currency.format_price(summary.get().total)}</dd>
                </div>
            </dl>
        </aside>
    }
}

#[component]
fn SummaryLine(item: CartItem, services: AppServices) -> impl IntoView {
    let line_total = item.line_total();

    view! {
        <li class="flex justify-between gap-4">
            <div>
                <p class="font-medium text-theme-primary">{item.title}</p>
                <p class="text-sm text-theme-tertiary">{format!("Qty: {}", item.quantity)}</p>
            </div>
            <span class="font-medium text-theme-primary">
                {move || services.currency.format_price(line_total)}
            </span>
        </li>
    }
}

#[component]
fn SignInPrompt(on_page_change: Callback<Page>) -> impl IntoView {
    view! {
        <GuardCard
            icon=icons::LOCK
            title="Please Sign In"
            message="You need to be signed in to proceed with checkout."
        >
            <button
                type="button"
                class="px-8 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white rounded-lg"
                on:click=move |_| on_page_change.run(Page::Auth)
            >
                "Sign In"
            </button>
        </GuardCard>
    }
}

#[component]
fn EmptyCart(on_page_change: Callback<Page>) -> impl IntoView {
    view! {
        <GuardCard icon=icons::CART title="Your cart is empty" message="">
            <button
                type="button"
                class="px-8 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white rounded-lg"
                on:click=move |_| on_page_change.run(Page::AiTools)
            >
                "Continue Shopping"
            </button>
        </GuardCard>
    }
}

#[component]
fn OrderComplete(on_page_change: Callback<Page>) -> impl IntoView {
    view! {
        <GuardCard
            icon=icons::CHECK
            title="Order Complete!"
            message="Thank you for your purchase. You'll receive an email confirmation shortly."
        >
            <div class="space-y-4">
                <button
                    type="button"
                    class="w-full px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white rounded-lg"
                    on:click=move |_| on_page_change.run(Page::Profile)
                >
                    "View Orders"
                </button>
                <button
                    type="button"
                    class="w-full px-6 py-3 border border-theme text-theme-primary rounded-lg hover:bg-theme-secondary"
                    on:click=move |_| on_page_change.run(Page::Home)
                >
                    "Continue Browsing"
                </button>
            </div>
        </GuardCard>
    }
}

#[component]
fn GuardCard(
    icon: &'static str,
    title: &'static str,
    message: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-[calc(100vh-4rem)] flex items-center justify-center p-4">
            <div class="text-center max-w-md bg-theme-primary rounded-2xl shadow-xl p-8 border border-theme">
                <div class="w-16 h-16 bg-theme-secondary rounded-full flex items-center justify-center mx-auto mb-4">
                    <Icon name=icon class="w-8 h-8" />
                </div>
                <h2 class="text-2xl font-bold text-theme-primary mb-4">{title}</h2>
                {(!message.is_empty()).then(|| view! {
                    <p class="text-theme-secondary mb-8">{message}</p>
                })}
                {children()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::ready;
    use std::cell::RefCell;

    #[test]
    fn test_taking_stored_handle_aborts_the_run() {
        let owner = Owner::new();
        owner.with(|| {
            let pending = StoredValue::new(None::<AbortHandle>);
            let (handle, registration) = AbortHandle::new_pair();
            pending.set_value(Some(handle));

            take_pending(pending).expect("handle stored").abort();

            let entered = RefCell::new(Vec::new());
            let result = block_on(Abortable::new(
                run_payment_sequence(|_| ready(()), |phase| entered.borrow_mut().push(phase)),
                registration,
            ));
            assert!(result.is_err());
            assert!(entered.borrow().is_empty());
            assert!(take_pending(pending).is_none());
        });
    }
}
