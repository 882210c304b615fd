//! The single place where auth errors become HTTP responses.
//!
//! Handlers return `Result<_, AuthError>`. Errors that only need a status code
//! are rendered straight away by `IntoResponse`; errors that need the login
//! page (invalid codes) are parked in the response extensions and picked up by
//! [`error_boundary`], which `auth_routes` always installs.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use oidc_gate_core::auth::{resolve_error_kind, Resolution};

use crate::error::{AuthError, PendingError};
use crate::flash::redirect_with_errors;
use crate::AuthState;

/// Middleware that renders errors left pending by handlers.
pub async fn error_boundary(
    State(state): State<AuthState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<PendingError>() {
        Some(PendingError(error)) => render_error(&state, error).await,
        None => response,
    }
}

/// Render an auth error according to the core mapping table.
///
/// Invalid codes become a redirect to the login page carrying `msg`. If the
/// login page itself cannot be resolved, that failure is rendered on its own
/// terms (502) rather than being folded into the redirect.
pub async fn render_error(state: &AuthState, error: AuthError) -> Response {
    match resolve_error_kind(error.kind()) {
        Resolution::Status(..) => status_response(&error),
        Resolution::RedirectToLogin => {
            let invalid_code = error.invalid_code().cloned().unwrap_or_default();

            match invalid_code
                .render(state.login_page.as_ref(), redirect_with_errors)
                .await
            {
                Ok(response) => {
                    tracing::debug!(flash = invalid_code.message(), "Redirecting to login page");
                    response
                }
                Err(login_error) => {
                    tracing::error!(
                        error = %login_error,
                        "Failed to resolve login page for invalid code redirect"
                    );
                    status_response(&AuthError::Core(login_error))
                }
            }
        }
    }
}

pub(crate) fn status_response(error: &AuthError) -> Response {
    let (status, message) = match resolve_error_kind(error.kind()) {
        Resolution::Status(code, message) => (
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            message,
        ),
        // Only reachable when a login page provider reports an invalid code.
        Resolution::RedirectToLogin => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
    };

    if status.is_server_error() {
        tracing::error!(error = %error, status = status.as_u16(), "Auth error");
    } else {
        tracing::warn!(error = %error, status = status.as_u16(), "Auth request rejected");
    }

    (status, message).into_response()
}
