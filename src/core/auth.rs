//! Demo authentication
//!
//! Accounts live in memory and are seeded with two demo users. Login and
//! registration both end in a pending state that requires echoing back a
//! six digit verification code before the session counts as signed in.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the verification code
pub const VERIFICATION_CODE_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// The signed-in (or pending) user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    pub role: Role,
    /// Set while the user still has to verify; never persisted
    #[serde(skip)]
    pub verification_code: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_pending_verification(&self) -> bool {
        self.verification_code.is_some()
    }
}

/// Authentication failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Email already registered")]
    EmailTaken,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid verification code")]
    InvalidCode,

    #[error("No verification in progress")]
    NoPendingVerification,
}

#[derive(Clone, Debug)]
struct Account {
    username: String,
    email: String,
    password: String,
    role: Role,
}

impl Account {
    fn to_user(&self) -> User {
        User {
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role,
            verification_code: None,
        }
    }
}

/// Current session as seen by the UI
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSession {
    pub user: Option<User>,
}

impl AuthSession {
    /// Signed in and verified
    pub fn is_authenticated(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|u| !u.is_pending_verification())
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.user.as_ref().is_some_and(User::is_admin)
    }

    /// Verified user, if any
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref().filter(|u| !u.is_pending_verification())
    }
}

/// In-memory account store with the demo login/register/verify flow
#[derive(Clone, Debug)]
pub struct DemoAuthService {
    accounts: Vec<Account>,
    session: AuthSession,
}

impl Default for DemoAuthService {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoAuthService {
    /// Service seeded with the demo accounts
    pub fn new() -> Self {
        let accounts = vec![
            Account {
                username: "aman".to_string(),
                email: "aman@example.com".to_string(),
                password: "Aman@123".to_string(),
                role: Role::User,
            },
            Account {
                username: "avinash".to_string(),
                email: "avinash@example.com".to_string(),
                password: "Avinash@123".to_string(),
                role: Role::Admin,
            },
        ];
        Self {
            accounts,
            session: AuthSession::default(),
        }
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    /// Restore a verified user, e.g. from browser storage
    pub fn restore(&mut self, user: User) {
        self.session.user = Some(User {
            verification_code: None,
            ..user
        });
    }

    /// Check credentials; `identifier` may be the username or the email.
    /// On success the user is pending verification.
    pub fn login(&mut self, identifier: &str, password: &str) -> Result<&User, AuthError> {
        let identifier = required(identifier, "Username")?;
        let password = required(password, "Password")?;

        let account = self
            .accounts
            .iter()
            .find(|a| {
                a.username.eq_ignore_ascii_case(identifier)
                    || a.email.eq_ignore_ascii_case(identifier)
            })
            .filter(|a| a.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        let user = account.to_user();
        tracing::info!(username = %user.username, "login accepted, awaiting verification");
        Ok(self.begin_verification(user))
    }

    /// Create a plain account. On success the new user is pending verification.
    pub fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<&User, AuthError> {
        let username = required(username, "Username")?;
        let email = required(email, "Email")?;
        let password = required(password, "Password")?;

        if self
            .accounts
            .iter()
            .any(|a| a.username.eq_ignore_ascii_case(username))
        {
            return Err(AuthError::UsernameTaken);
        }
        if self
            .accounts
            .iter()
            .any(|a| a.email.eq_ignore_ascii_case(email))
        {
            return Err(AuthError::EmailTaken);
        }

        let account = Account {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: Role::User,
        };
        let user = account.to_user();
        self.accounts.push(account);
        tracing::info!(username = %user.username, "account registered, awaiting verification");
        Ok(self.begin_verification(user))
    }

    /// Complete a pending login or registration
    pub fn verify_code(&mut self, code: &str) -> Result<&User, AuthError> {
        let user = self
            .session
            .user
            .as_mut()
            .filter(|u| u.is_pending_verification())
            .ok_or(AuthError::NoPendingVerification)?;

        if user.verification_code.as_deref() != Some(code.trim()) {
            tracing::warn!(username = %user.username, "verification code rejected");
            return Err(AuthError::InvalidCode);
        }

        user.verification_code = None;
        tracing::info!(username = %user.username, "user verified");
        Ok(user)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.session.user.take() {
            tracing::info!(username = %user.username, "logged out");
        }
    }

    fn begin_verification(&mut self, mut user: User) -> &User {
        user.verification_code = Some(generate_verification_code());
        self.session.user.insert(user)
    }
}

fn required<'a>(value: &'a str, name: &'static str) -> Result<&'a str, AuthError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AuthError::MissingField(name))
    } else {
        Ok(trimmed)
    }
}

/// Random zero-padded six digit code
pub fn generate_verification_code() -> String {
    let n = Uuid::new_v4().as_u128() % 1_000_000;
    format!("{:0width$}", n, width = VERIFICATION_CODE_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_code(service: &DemoAuthService) -> String {
        service
            .session()
            .user
            .as_ref()
            .and_then(|u| u.verification_code.clone())
            .expect("verification pending")
    }

    #[test]
    fn test_login_with_email_then_verify() {
        let mut service = DemoAuthService::new();
        let user = service.login("aman@example.com", "Aman@123").expect("login");
        assert_eq!(user.username, "aman");
        assert!(!service.session().is_authenticated());

        let code = pending_code(&service);
        let verified = service.verify_code(&code).expect("verify");
        assert!(verified.verification_code.is_none());
        assert!(service.session().is_authenticated());
        assert!(!service.session().is_admin());
    }

    #[test]
    fn test_login_with_username_admin() {
        let mut service = DemoAuthService::new();
        service.login("avinash", "Avinash@123").expect("login");
        let code = pending_code(&service);
        service.verify_code(&code).expect("verify");
        assert!(service.session().is_admin());
    }

    #[test]
    fn test_login_rejects_bad_password() {
        let mut service = DemoAuthService::new();
        assert_eq!(
            service.login("aman", "wrong").map(|u| u.clone()),
            Err(AuthError::InvalidCredentials)
        );
        assert!(service.session().user.is_none());
    }

    #[test]
    fn test_login_requires_fields() {
        let mut service = DemoAuthService::new();
        let err = service.login("  ", "x").unwrap_err();
        assert_eq!(err, AuthError::MissingField("Username"));
        assert_eq!(err.to_string(), "Username is required");
    }

    #[test]
    fn test_wrong_code_keeps_pending() {
        let mut service = DemoAuthService::new();
        service.login("aman", "Aman@123").expect("login");
        let code = pending_code(&service);
        let wrong = if code == "000000" { "111111" } else { "000000" };

        assert_eq!(
            service.verify_code(wrong).map(|u| u.clone()),
            Err(AuthError::InvalidCode)
        );
        assert!(!service.session().is_authenticated());
        assert!(service.verify_code(&code).is_ok());
    }

    #[test]
    fn test_verify_without_pending() {
        let mut service = DemoAuthService::new();
        assert_eq!(
            service.verify_code("123456").map(|u| u.clone()),
            Err(AuthError::NoPendingVerification)
        );
    }

    #[test]
    fn test_register_then_login() {
        let mut service = DemoAuthService::new();
        service
            .register("neha", "neha@example.com", "Neha@123")
            .expect("register");
        let code = pending_code(&service);
        service.verify_code(&code).expect("verify");
        assert_eq!(
            service.session().current_user().map(|u| u.email.as_str()),
            Some("neha@example.com")
        );

        service.logout();
        assert!(service.session().user.is_none());
        assert!(service.login("neha@example.com", "Neha@123").is_ok());
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut service = DemoAuthService::new();
        assert_eq!(
            service.register("AMAN", "new@example.com", "pw").map(|u| u.clone()),
            Err(AuthError::UsernameTaken)
        );
        assert_eq!(
            service
                .register("newbie", "aman@example.com", "pw")
                .map(|u| u.clone()),
            Err(AuthError::EmailTaken)
        );
        assert_eq!(
            service.register("newbie", "", "pw").map(|u| u.clone()),
            Err(AuthError::MissingField("Email"))
        );
    }

    #[test]
    fn test_verification_code_shape() {
        for _ in 0..20 {
            let code = generate_verification_code();
            assert_eq!(code.len(), VERIFICATION_CODE_LEN);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_restore_drops_code() {
        let mut service = DemoAuthService::new();
        service.restore(User {
            username: "aman".into(),
            email: "aman@example.com".into(),
            role: Role::User,
            verification_code: Some("123456".into()),
        });
        assert!(service.session().is_authenticated());
    }
}
