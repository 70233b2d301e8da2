//! Sign in / sign up page
//!
//! Two stages: credentials entry, then verification once the credentials are
//! accepted. Verifying successfully sends the user home; a wrong code keeps
//! them on the verification stage.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::Page;
use crate::ui::auth::{CredentialsForm, VerificationForm};
use crate::ui::services::AppServices;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthStage {
    #[default]
    Credentials,
    Verification,
}

/// What the user just did on the auth page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    /// Login or register submitted; `true` when accepted
    Credentials(bool),
    /// Verification code submitted; `true` when it matched
    Code(bool),
    /// "Back to sign in" from the verification stage
    Back,
}

impl AuthStage {
    /// Stage after `event`, plus the page to leave for once the flow is done.
    /// Events that do not belong to the current stage are ignored.
    pub fn after(self, event: AuthEvent) -> (AuthStage, Option<Page>) {
        match (self, event) {
            (AuthStage::Credentials, AuthEvent::Credentials(true)) => {
                (AuthStage::Verification, None)
            }
            (AuthStage::Verification, AuthEvent::Code(true)) => {
                (AuthStage::Credentials, Some(Page::Home))
            }
            (AuthStage::Verification, AuthEvent::Back) => (AuthStage::Credentials, None),
            (stage, _) => (stage, None),
        }
    }
}

#[component]
pub fn AuthPage(services: AppServices, on_page_change: Callback<Page>) -> impl IntoView {
    let auth = services.auth;
    let stage = RwSignal::new(AuthStage::default());
    let is_login = RwSignal::new(true);

    let dispatch = move |event: AuthEvent| {
        let (next, leave_for) = stage.get_untracked().after(event);
        stage.set(next);
        if let Some(page) = leave_for {
            services.toasts.success("Signed in successfully");
            on_page_change.run(page);
        }
    };

    let on_credentials = Callback::new(move |accepted| dispatch(AuthEvent::Credentials(accepted)));
    let on_code = Callback::new(move |verified| dispatch(AuthEvent::Code(verified)));
    let on_back = Callback::new(move |_| dispatch(AuthEvent::Back));

    view! {
        <Title text=move || if is_login.get() { "Sign In" } else { "Sign Up" } />
        <div class="min-h-[calc(100vh-4rem)] flex items-center justify-center p-4">
            <div class="w-full max-w-md bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
                {move || match stage.get() {
                    AuthStage::Credentials => view! {
                        <CredentialsForm auth=auth is_login=is_login on_result=on_credentials />
                    }
                    .into_any(),
                    AuthStage::Verification => view! {
                        <VerificationForm auth=auth on_result=on_code on_back=on_back />
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
