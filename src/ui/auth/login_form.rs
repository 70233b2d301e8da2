//! Sign in / sign up form
//!
//! One form for both modes: registering adds an email field. A successful
//! submit leaves the user pending verification and hands over to the
//! verification step.

use leptos::prelude::*;

use super::context::AuthService;
use crate::ui::common::{ErrorMessage, FormField, InfoNote};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn CredentialsForm(
    auth: AuthService,
    /// `true` for sign in, `false` for sign up
    is_login: RwSignal<bool>,
    /// Called after every submit with whether the credentials were accepted
    on_result: Callback<bool>,
) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        auth.clear_error();

        let accepted = if is_login.get_untracked() {
            auth.login(&username.get_untracked(), &password.get_untracked())
        } else {
            auth.register(
                &username.get_untracked(),
                &email.get_untracked(),
                &password.get_untracked(),
            )
        };

        if accepted {
            password.set(String::new());
        }
        on_result.run(accepted);
    };

    let toggle_mode = move |_| {
        is_login.update(|v| *v = !*v);
        auth.clear_error();
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">
                    {move || if is_login.get() { "Welcome Back" } else { "Create Account" }}
                </h2>
                <p class="mt-2 text-sm text-theme-secondary">
                    {move || if is_login.get() {
                        "Sign in to your account to continue"
                    } else {
                        "Join AI Tool Hub today"
                    }}
                </p>
            </div>

            <ErrorMessage error=auth.error />

            <FormField
                label="Username"
                name="username"
                placeholder="Enter your username"
                autocomplete="username"
                value=username
                on_input=Callback::new(move |v| username.set(v))
            />

            <Show when=move || !is_login.get()>
                <FormField
                    label="Email"
                    name="email"
                    input_type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    value=email
                    on_input=Callback::new(move |v| email.set(v))
                />
            </Show>

            <FormField
                label="Password"
                name="password"
                input_type=Signal::derive(move || if show_password.get() { "text" } else { "password" })
                placeholder="Enter your password"
                autocomplete="current-password"
                value=password
                on_input=Callback::new(move |v| password.set(v))
            >
                <button
                    type="button"
                    class="text-theme-tertiary hover:text-theme-secondary"
                    aria-label=move || if show_password.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| show_password.update(|v| *v = !*v)
                >
                    {move || {
                        let icon = if show_password.get() { icons::EYE_CLOSED } else { icons::EYE };
                        view! { <Icon name=icon class="h-5 w-5" /> }
                    }}
                </button>
            </FormField>

            <button
                type="submit"
                class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
            >
                {move || if is_login.get() { "Sign In" } else { "Sign Up" }}
            </button>

            <div class="text-center text-sm text-theme-secondary">
                {move || if is_login.get() { "Don't have an account? " } else { "Already have an account? " }}
                <button
                    type="button"
                    class="text-accent-primary hover:text-accent-primary-hover font-medium"
                    on:click=toggle_mode
                >
                    {move || if is_login.get() { "Sign up" } else { "Sign in" }}
                </button>
            </div>

            <Show when=move || is_login.get()>
                <InfoNote>
                    <p class="font-medium">"Demo credentials"</p>
                    <p>"User: aman@example.com / Aman@123"</p>
                    <p>"Admin: avinash@example.com / Avinash@123"</p>
                </InfoNote>
            </Show>
        </form>
    }
}
