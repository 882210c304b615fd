use async_trait::async_trait;
use url::Url;

use super::AuthError;

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Knows where the identity provider's login page lives.
#[async_trait]
pub trait LoginPageProvider: Send + Sync {
    async fn login_page(&self) -> Result<Url>;
}

/// Trades an authorization code for a raw ID token.
///
/// Implementations talk to the provider's token endpoint; this crate only
/// validates what comes back.
#[async_trait]
pub trait CodeExchanger: Send + Sync {
    async fn exchange_code(&self, code: &str) -> Result<String>;
}
