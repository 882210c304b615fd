use std::collections::HashMap;
use std::time::Duration;

use oidc_gate_core::auth::{resolve_login_page, validate_login_path};
use url::Url;

use crate::error::AuthError;

/// Complete auth configuration.
#[derive(Clone)]
pub struct AuthConfig {
    pub base_url: Url,
    /// Expected `iss` claim.
    pub issuer: String,
    /// Expected `aud` claim.
    pub client_id: String,
    /// Where users are sent when their code or token is rejected.
    pub login_page: Url,
    /// HS256 secret shared with the identity provider.
    pub jwt_secret: Vec<u8>,
    /// Clock skew tolerated on `exp`.
    pub leeway: Duration,
    /// Relative path to land on after a successful login.
    pub post_login_redirect: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("base_url", &self.base_url.as_str())
            .field("issuer", &self.issuer)
            .field("client_id", &self.client_id)
            .field("login_page", &self.login_page.as_str())
            .field("jwt_secret", &"<redacted>")
            .field("leeway", &self.leeway)
            .field("post_login_redirect", &self.post_login_redirect)
            .finish()
    }
}

impl AuthConfig {
    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `AUTH_BASE_URL`: Base URL relative login pages are joined to (default: `http://localhost:3000`)
    /// - `OIDC_ISSUER`: Expected token issuer (required)
    /// - `OIDC_CLIENT_ID`: Expected token audience (required)
    /// - `OIDC_LOGIN_PAGE`: Identity provider login page, absolute URL or relative path (required)
    /// - `OIDC_JWT_SECRET`: HS256 secret used to verify ID tokens (required)
    /// - `OIDC_LEEWAY_SECS`: Clock skew tolerance in seconds (default: 60)
    /// - `OIDC_POST_LOGIN_REDIRECT`: Relative path after a successful login (default: `/`)
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Config` if a required variable is missing or a URL is invalid.
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an in-memory map, using the same keys as [`AuthConfig::from_env`].
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, AuthError> {
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AuthError> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AuthError::Config(format!("{key} is required")))
        };

        let base_url: Url = lookup("AUTH_BASE_URL")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .parse()
            .map_err(|e| AuthError::Config(format!("AUTH_BASE_URL must be a valid URL: {e}")))?;

        let raw_login_page = required("OIDC_LOGIN_PAGE")?;
        let login_page = resolve_login_page(&base_url, &raw_login_page).ok_or_else(|| {
            AuthError::Config(format!(
                "OIDC_LOGIN_PAGE must be an http(s) URL or a relative path: {raw_login_page}"
            ))
        })?;

        let leeway = match lookup("OIDC_LEEWAY_SECS") {
            Some(raw) => raw.parse::<u64>().map(Duration::from_secs).map_err(|e| {
                AuthError::Config(format!("OIDC_LEEWAY_SECS must be a number of seconds: {e}"))
            })?,
            None => Duration::from_secs(60),
        };

        let post_login_redirect = lookup("OIDC_POST_LOGIN_REDIRECT")
            .as_deref()
            .and_then(validate_login_path)
            .unwrap_or("/")
            .to_string();

        Ok(Self {
            base_url,
            issuer: required("OIDC_ISSUER")?,
            client_id: required("OIDC_CLIENT_ID")?,
            login_page,
            jwt_secret: required("OIDC_JWT_SECRET")?.into_bytes(),
            leeway,
            post_login_redirect,
        })
    }
}
