//! The "authorization code / JWT failed validation" error and its rendering.

use thiserror::Error;
use url::Url;

use super::{ErrorFields, LoginPageProvider, Result, ERROR_MESSAGE_KEY};

/// Message shown to the user when no override is supplied.
pub const DEFAULT_INVALID_CODE_MESSAGE: &str = "La validation du JWT a échoué. Veuillez réessayer.";

/// Raised when an authorization code or ID token fails validation during the
/// OIDC callback (bad signature, expired, wrong issuer or audience, rejected by
/// the provider).
///
/// It carries nothing but an optional message override and is consumed once,
/// at the HTTP boundary, where [`InvalidCodeError::render`] turns it into a
/// redirect back to the login page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", self.message())]
pub struct InvalidCodeError {
    message: Option<String>,
}

impl InvalidCodeError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default localized message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// The message that will be attached to the redirect.
    pub fn message(&self) -> &str {
        self.message
            .as_deref()
            .unwrap_or(DEFAULT_INVALID_CODE_MESSAGE)
    }

    /// Error payload for the redirect: always exactly `{ "msg": message }`.
    pub fn fields(&self) -> ErrorFields {
        ErrorFields::from([(ERROR_MESSAGE_KEY.to_string(), self.message().to_string())])
    }

    /// Translate this error into a redirect response.
    ///
    /// `login_page` supplies the target URL and `redirect` builds the response
    /// from the target and the error payload. `redirect` is called exactly once
    /// when the login page resolves. A login page failure is returned as is and
    /// `redirect` is never called.
    pub async fn render<P, F, R>(&self, login_page: &P, redirect: F) -> Result<R>
    where
        P: LoginPageProvider + ?Sized,
        F: FnOnce(Url, ErrorFields) -> R,
    {
        let url = login_page.login_page().await?;
        Ok(redirect(url, self.fields()))
    }
}
