use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{RecetteError, Result};

/// The two sign-in routes the app offers: an email/password account or a
/// token from a federated sign-in provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    EmailPassword { email: String, password: String },
    Federated { issuer: String, token: String },
}

/// The signed-in user, as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user_id: String,
    pub display_name: String,
    pub email: String,
}

/// Narrow interface over the device identity services. Only the session
/// surface the app needs: sign in, sign out, and who is signed in now.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in(&self, credentials: Credentials) -> Result<UserProfile>;
    async fn sign_out(&self) -> Result<()>;
    async fn current_user(&self) -> Option<UserProfile>;
}

struct StubAccount {
    email: String,
    password: String,
    federated_token: Option<String>,
    profile: UserProfile,
}

/// Identity provider backed by a fixed account table, for demo mode and
/// tests.
#[derive(Default)]
pub struct StubIdentityProvider {
    accounts: Vec<StubAccount>,
    session: Mutex<Option<UserProfile>>,
}

impl StubIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo account the seeded recipes are authored by.
    pub fn demo() -> Self {
        Self::new().with_account(
            "demo@recette.example",
            "demodemo",
            Some("demo-token"),
            UserProfile {
                user_id: "demoUser1".to_string(),
                display_name: "デモユーザー1".to_string(),
                email: "demo@recette.example".to_string(),
            },
        )
    }

    pub fn with_account(
        mut self,
        email: &str,
        password: &str,
        federated_token: Option<&str>,
        profile: UserProfile,
    ) -> Self {
        self.accounts.push(StubAccount {
            email: email.to_string(),
            password: password.to_string(),
            federated_token: federated_token.map(str::to_string),
            profile,
        });
        self
    }
}

#[async_trait]
impl IdentityProvider for StubIdentityProvider {
    async fn sign_in(&self, credentials: Credentials) -> Result<UserProfile> {
        let account = match &credentials {
            Credentials::EmailPassword { email, password } => self
                .accounts
                .iter()
                .find(|a| a.email == *email && a.password == *password)
                .ok_or_else(|| {
                    RecetteError::SignInFailed("invalid email or password".to_string())
                })?,
            Credentials::Federated { issuer, token } => self
                .accounts
                .iter()
                .find(|a| a.federated_token.as_deref() == Some(token.as_str()))
                .ok_or_else(|| {
                    RecetteError::SignInFailed(format!("{issuer} rejected the token"))
                })?,
        };

        let profile = account.profile.clone();
        *self.session.lock().await = Some(profile.clone());
        Ok(profile)
    }

    async fn sign_out(&self) -> Result<()> {
        *self.session.lock().await = None;
        Ok(())
    }

    async fn current_user(&self) -> Option<UserProfile> {
        self.session.lock().await.clone()
    }
}
