//! Axum integration for the oidc_gate login boundary.
//!
//! This crate provides:
//! - The OIDC callback route, which validates ID tokens and raises
//!   `InvalidCode` when they fail
//! - The error boundary middleware that renders every auth error exactly once,
//!   turning invalid codes into a redirect back to the login page
//! - Flash cookies used to carry the error message across that redirect

mod boundary;
mod config;
mod error;
mod flash;
mod handlers;
mod providers;
mod state;
mod verifier;

pub use boundary::{error_boundary, render_error};
pub use config::AuthConfig;
pub use error::AuthError;
pub use flash::{redirect_with_errors, redirect_with_flash, FlashMessage, FLASH_COOKIE_NAME};
pub use handlers::auth_routes;
pub use providers::{PassthroughExchanger, StaticLoginPage};
pub use state::AuthState;
pub use verifier::IdTokenVerifier;
