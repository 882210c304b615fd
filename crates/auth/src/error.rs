use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use oidc_gate_core::auth::{resolve_error_kind, ErrorKind, InvalidCodeError, Resolution};
use thiserror::Error;

use crate::boundary::status_response;

/// Auth errors for the oidc_gate_auth crate.
///
/// This wraps the core `AuthError` and adds the configuration failures that
/// only the integration layer can hit.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Error from the core auth module (invalid code, exchange, login page)
    #[error(transparent)]
    Core(#[from] oidc_gate_core::auth::AuthError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Core(core_err) => core_err.kind(),
            AuthError::Config(_) => ErrorKind::Config,
        }
    }

    /// The invalid code error, if that is what this is.
    pub fn invalid_code(&self) -> Option<&InvalidCodeError> {
        match self {
            AuthError::Core(oidc_gate_core::auth::AuthError::InvalidCode(err)) => Some(err),
            _ => None,
        }
    }
}

impl From<InvalidCodeError> for AuthError {
    fn from(err: InvalidCodeError) -> Self {
        AuthError::Core(err.into())
    }
}

/// An error that needs application state to render, waiting for the boundary.
#[derive(Debug, Clone)]
pub(crate) struct PendingError(pub(crate) AuthError);

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match resolve_error_kind(self.kind()) {
            Resolution::Status(..) => status_response(&self),
            // The login page lives in `AuthState`, which is out of reach here.
            // `error_boundary` swaps this placeholder for the real redirect.
            Resolution::RedirectToLogin => {
                let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
                response.extensions_mut().insert(PendingError(self));
                response
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oidc_gate_core::auth::AuthError as CoreError;

    #[test]
    fn invalid_code_is_deferred_to_the_boundary() {
        let response = AuthError::from(InvalidCodeError::new()).into_response();

        let pending = response.extensions().get::<PendingError>().unwrap();
        assert_eq!(pending.0.kind(), ErrorKind::InvalidCode);
    }

    #[test]
    fn status_errors_render_immediately() {
        let response = AuthError::Core(CoreError::InvalidState).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.extensions().get::<PendingError>().is_none());
    }

    #[test]
    fn config_error_is_internal() {
        let response = AuthError::Config("OIDC_ISSUER is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_code_accessor() {
        let err = AuthError::from(InvalidCodeError::with_message("nope"));
        assert_eq!(err.invalid_code().map(|e| e.message()), Some("nope"));
        assert!(AuthError::Config("x".to_string()).invalid_code().is_none());
    }
}
