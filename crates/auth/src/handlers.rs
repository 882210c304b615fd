//! HTTP handlers for auth routes.

use axum::{
    extract::{Query, State},
    middleware,
    response::{Redirect, Response},
    routing::get,
    Form, Router,
};
use oidc_gate_core::auth::{AuthError as CoreError, InvalidCodeError};
use serde::Deserialize;

use crate::boundary::error_boundary;
use crate::error::AuthError;
use crate::flash::{redirect_with_flash, FlashMessage};
use crate::AuthState;

/// Parameters of the OIDC callback, from the query string or, for
/// `response_mode=form_post` providers, from the form body.
///
/// Every field is optional so that a malformed callback reaches the handler
/// and is rejected through the error boundary rather than by the extractor.
#[derive(Deserialize, Default)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    /// Set by the provider when it refused to issue a code.
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Creates the auth router, wrapped in the error boundary.
///
/// Routes:
/// - `GET /auth/oidc/callback` - Validate the returned code and sign the user in
/// - `POST /auth/oidc/callback` - Same, for `response_mode=form_post` providers
/// - `GET /auth/oidc/login-page` - Redirect to the identity provider's login page
pub fn auth_routes(state: AuthState) -> Router {
    Router::new()
        .route(
            "/auth/oidc/callback",
            get(oidc_callback).post(oidc_callback_form),
        )
        .route("/auth/oidc/login-page", get(login_page))
        .layer(middleware::from_fn_with_state(state.clone(), error_boundary))
        .with_state(state)
}

async fn oidc_callback(
    State(state): State<AuthState>,
    Query(query): Query<CallbackQuery>,
) -> Result<Response, AuthError> {
    handle_callback(&state, query).await
}

async fn oidc_callback_form(
    State(state): State<AuthState>,
    Form(form): Form<CallbackQuery>,
) -> Result<Response, AuthError> {
    handle_callback(&state, form).await
}

async fn handle_callback(state: &AuthState, query: CallbackQuery) -> Result<Response, AuthError> {
    // The description is unauthenticated input: log it, never show it.
    if let Some(error) = query.error {
        tracing::warn!(
            error = %error,
            description = query.error_description.as_deref().unwrap_or_default(),
            "Identity provider rejected the authorization request"
        );
        return Err(InvalidCodeError::new().into());
    }

    let code = query
        .code
        .filter(|c| !c.is_empty())
        .ok_or(CoreError::InvalidState)?;
    query
        .state
        .filter(|s| !s.is_empty())
        .ok_or(CoreError::InvalidState)?;

    let id_token = state.exchanger.exchange_code(&code).await?;
    let claims = state.verifier.verify(&id_token)?;

    tracing::info!(subject = %claims.subject, "OIDC login succeeded");

    Ok(redirect_with_flash(
        &state.config.post_login_redirect,
        FlashMessage::success(format!("Signed in as {}", claims.display_name())),
    ))
}

async fn login_page(State(state): State<AuthState>) -> Result<Redirect, AuthError> {
    let url = state.login_page.login_page().await?;
    Ok(Redirect::to(url.as_str()))
}
