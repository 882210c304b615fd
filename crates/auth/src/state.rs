//! Application state for auth.

use std::sync::Arc;

use oidc_gate_core::auth::{CodeExchanger, LoginPageProvider};

use crate::config::AuthConfig;
use crate::providers::{PassthroughExchanger, StaticLoginPage};
use crate::verifier::IdTokenVerifier;

/// Shared state for auth handlers and the error boundary.
#[derive(Clone)]
pub struct AuthState {
    pub config: AuthConfig,
    pub login_page: Arc<dyn LoginPageProvider>,
    pub exchanger: Arc<dyn CodeExchanger>,
    pub verifier: Arc<IdTokenVerifier>,
}

impl AuthState {
    /// Creates a new AuthState with explicit collaborators.
    pub fn new(
        config: AuthConfig,
        login_page: Arc<dyn LoginPageProvider>,
        exchanger: Arc<dyn CodeExchanger>,
    ) -> Self {
        let verifier = Arc::new(IdTokenVerifier::new(&config));

        Self {
            config,
            login_page,
            exchanger,
            verifier,
        }
    }

    /// Creates an AuthState using the configured login page and a pass-through
    /// exchanger, for local development against a provider that posts ID
    /// tokens directly.
    pub fn from_config(config: AuthConfig) -> Self {
        let login_page = Arc::new(StaticLoginPage::new(config.login_page.clone()));
        Self::new(config, login_page, Arc::new(PassthroughExchanger))
    }
}
