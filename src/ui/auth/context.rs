//! Reactive auth service
//!
//! Wraps the in-memory [`DemoAuthService`] in signals so the header and
//! pages re-render when the session changes. A verified user is written to
//! localStorage and restored after hydration.

use leptos::prelude::*;

use crate::core::{AuthError, DemoAuthService, User};
use crate::ui::storage::{self, USER_KEY};

#[derive(Clone, Copy)]
pub struct AuthService {
    inner: RwSignal<DemoAuthService>,
    /// Message from the last failed operation
    pub error: RwSignal<Option<String>>,
}

impl AuthService {
    /// Starts signed out on both server and client to avoid a hydration
    /// mismatch; the stored user is restored once mounted.
    pub fn new() -> Self {
        let inner = RwSignal::new(DemoAuthService::new());
        let error = RwSignal::new(None::<String>);

        #[cfg(not(feature = "ssr"))]
        {
            Effect::new(move |_| {
                if let Some(user) = storage::load::<User>(USER_KEY) {
                    tracing::debug!(username = %user.username, "restored session");
                    inner.update(|auth| auth.restore(user));
                }
            });
        }

        Self { inner, error }
    }

    /// Current user, including one still pending verification
    pub fn user(&self) -> Option<User> {
        self.inner.with(|auth| auth.session().user.clone())
    }

    /// Current user once verified
    pub fn verified_user(&self) -> Option<User> {
        self.inner
            .with(|auth| auth.session().current_user().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.with(|auth| auth.session().is_authenticated())
    }

    pub fn is_admin(&self) -> bool {
        self.inner.with(|auth| auth.session().is_admin())
    }

    /// Code for the demo panel on the verification screen
    pub fn pending_code(&self) -> Option<String> {
        self.inner.with(|auth| {
            auth.session()
                .user
                .as_ref()
                .and_then(|u| u.verification_code.clone())
        })
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }

    pub fn login(&self, identifier: &str, password: &str) -> bool {
        let outcome = self
            .inner
            .try_update(|auth| auth.login(identifier, password).map(|_| ()));
        self.settle(outcome)
    }

    pub fn register(&self, username: &str, email: &str, password: &str) -> bool {
        let outcome = self
            .inner
            .try_update(|auth| auth.register(username, email, password).map(|_| ()));
        self.settle(outcome)
    }

    pub fn verify_code(&self, code: &str) -> bool {
        let outcome = self
            .inner
            .try_update(|auth| auth.verify_code(code).cloned());
        match outcome {
            Some(Ok(user)) => {
                storage::persist(USER_KEY, &user);
                self.error.set(None);
                true
            }
            Some(Err(err)) => {
                self.fail(err);
                false
            }
            None => false,
        }
    }

    pub fn logout(&self) {
        self.inner.update(|auth| auth.logout());
        storage::remove(USER_KEY);
        self.error.set(None);
    }

    fn settle(&self, outcome: Option<Result<(), AuthError>>) -> bool {
        match outcome {
            Some(Ok(())) => {
                self.error.set(None);
                true
            }
            Some(Err(err)) => {
                self.fail(err);
                false
            }
            None => false,
        }
    }

    fn fail(&self, err: AuthError) {
        tracing::warn!(%err, "auth operation failed");
        self.error.set(Some(err.to_string()));
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}
