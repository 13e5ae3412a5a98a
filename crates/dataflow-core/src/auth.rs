use crate::auth::error::AuthError;
use async_trait::async_trait;
use dataflow_config::account::AccountConfig;
use dataflow_model::session::{AuthView, Credentials, RegistrationForm, Session};
use std::fmt::Debug;
use std::sync::Arc;

pub mod error;

/// Decides whether a credential pair may open a session.
#[async_trait]
pub trait CredentialVerifier: Debug + Send + Sync {
    async fn verify(&self, credentials: &Credentials) -> Result<(), AuthError>;
}

/// Accepts a fixed list of accounts. Email and password are compared verbatim.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentialVerifier {
    accounts: Vec<Credentials>,
}

impl StaticCredentialVerifier {
    #[must_use]
    pub fn new(accounts: Vec<Credentials>) -> Self {
        Self { accounts }
    }

    #[must_use]
    pub fn from_config(accounts: &[AccountConfig]) -> Self {
        Self::new(
            accounts
                .iter()
                .map(|account| Credentials::new(account.email.clone(), account.password.clone()))
                .collect(),
        )
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn verify(&self, credentials: &Credentials) -> Result<(), AuthError> {
        if self.accounts.iter().any(|account| account == credentials) {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAllVerifier;

#[async_trait]
impl CredentialVerifier for DenyAllVerifier {
    async fn verify(&self, _credentials: &Credentials) -> Result<(), AuthError> {
        Err(AuthError::InvalidCredentials)
    }
}

/// Builds the verifier for a configured account list. No accounts means nobody can sign in with a password.
#[must_use]
pub fn verifier_from_config(accounts: &[AccountConfig]) -> Arc<dyn CredentialVerifier> {
    if accounts.is_empty() {
        tracing::warn!("no accounts configured, password sign-in is disabled");
        Arc::new(DenyAllVerifier)
    } else {
        Arc::new(StaticCredentialVerifier::from_config(accounts))
    }
}

#[derive(Debug)]
pub struct AuthGate {
    session: Session,
    view: AuthView,
    verifier: Arc<dyn CredentialVerifier>,
}

impl AuthGate {
    #[must_use]
    pub fn new(verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            session: Session::default(),
            view: AuthView::default(),
            verifier,
        }
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.session
    }

    #[must_use]
    pub fn view(&self) -> AuthView {
        self.view
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.authenticated
    }

    /// On failure the session is left as it was.
    pub async fn attempt_login(&mut self, credentials: &Credentials) -> Result<(), AuthError> {
        self.verifier.verify(credentials).await.inspect_err(|_| {
            tracing::warn!(email = %credentials.email, "authentication failed: invalid credentials");
        })?;
        tracing::info!(email = %credentials.email, "user signed in");
        self.session.authenticated = true;
        Ok(())
    }

    /// There is no identity provider behind this, it always succeeds.
    pub fn sign_in_with_provider(&mut self) {
        tracing::info!("simulating provider sign-in");
        self.session.authenticated = true;
    }

    pub fn register(&self, form: &RegistrationForm) -> Result<(), AuthError> {
        tracing::debug!(email = %form.email, "registration requested");
        Err(AuthError::RegistrationUnimplemented)
    }

    pub fn show_register(&mut self) {
        self.view = AuthView::Register;
    }

    pub fn show_sign_in(&mut self) {
        self.view = AuthView::SignIn;
    }
}
