//! Verification code step

use leptos::prelude::*;

use super::context::AuthService;
use crate::core::auth::VERIFICATION_CODE_LEN;
use crate::ui::common::{ErrorMessage, FormField, InfoNote};

#[component]
pub fn VerificationForm(
    auth: AuthService,
    /// Called after every submit with whether the code matched
    on_result: Callback<bool>,
    on_back: Callback<()>,
) -> impl IntoView {
    let code = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let verified = auth.verify_code(&code.get_untracked());
        if verified {
            code.set(String::new());
        }
        on_result.run(verified);
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">"Verify Your Account"</h2>
                <p class="mt-2 text-sm text-theme-secondary">
                    {move || {
                        let email = auth.user().map(|u| u.email).unwrap_or_default();
                        format!("Enter the {}-digit code sent to {}", VERIFICATION_CODE_LEN, email)
                    }}
                </p>
            </div>

            {move || auth.pending_code().map(|demo_code| view! {
                <InfoNote>
                    <p>"Demo code: " <span class="font-mono font-bold">{demo_code}</span></p>
                </InfoNote>
            })}

            <ErrorMessage error=auth.error />

            <FormField
                label="Verification Code"
                name="code"
                placeholder="123456"
                autocomplete="one-time-code"
                maxlength=Some(VERIFICATION_CODE_LEN as u32)
                value=code
                on_input=Callback::new(move |v: String| {
                    code.set(v.chars().take(VERIFICATION_CODE_LEN).collect())
                })
            />

            <button
                type="submit"
                class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
            >
                "Verify"
            </button>

            <button
                type="button"
                class="w-full text-sm text-theme-secondary hover:text-theme-primary"
                on:click=move |_| {
                    auth.clear_error();
                    on_back.run(());
                }
            >
                "Back to sign in"
            </button>
        </form>
    }
}
