//! Pure mapping from auth error kinds to how the HTTP boundary answers them.
//!
//! Integration crates look a kind up here and build the response; nothing in
//! this module touches an HTTP framework.

use super::ErrorKind;

/// What the boundary does with an error of a given kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Send the user back to the login page with the error attached.
    RedirectToLogin,
    /// Answer with a plain status code and a generic message.
    Status(u16, &'static str),
}

/// The boundary's mapping table.
///
/// - `InvalidCode` -> redirect to the login page
/// - `InvalidState` -> 400 (Bad Request)
/// - `MissingClaim` -> 401 (Unauthorized)
/// - `CodeExchange`, `LoginPage` -> 502 (Bad Gateway)
/// - `Config` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use oidc_gate_core::auth::{resolve_error_kind, ErrorKind, Resolution};
///
/// assert_eq!(resolve_error_kind(ErrorKind::InvalidCode), Resolution::RedirectToLogin);
/// assert!(matches!(resolve_error_kind(ErrorKind::LoginPage), Resolution::Status(502, _)));
/// ```
pub fn resolve_error_kind(kind: ErrorKind) -> Resolution {
    match kind {
        ErrorKind::InvalidCode => Resolution::RedirectToLogin,
        ErrorKind::InvalidState => Resolution::Status(400, "Invalid authentication request"),
        ErrorKind::MissingClaim => Resolution::Status(401, "Incomplete identity token"),
        ErrorKind::CodeExchange | ErrorKind::LoginPage => {
            Resolution::Status(502, "Authentication provider error")
        }
        ErrorKind::Config => Resolution::Status(500, "Server configuration error"),
    }
}
