use thiserror::Error;

use super::InvalidCodeError;

#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error(transparent)]
    InvalidCode(#[from] InvalidCodeError),

    #[error("invalid OIDC callback: missing code or state")]
    InvalidState,

    #[error("failed to exchange authorization code: {0}")]
    CodeExchange(String),

    #[error("failed to resolve login page: {0}")]
    LoginPage(String),

    #[error("missing required claim: {0}")]
    MissingClaim(String),
}

impl AuthError {
    /// Fieldless tag used as the key of the boundary mapping table.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCode(_) => ErrorKind::InvalidCode,
            Self::InvalidState => ErrorKind::InvalidState,
            Self::CodeExchange(_) => ErrorKind::CodeExchange,
            Self::LoginPage(_) => ErrorKind::LoginPage,
            Self::MissingClaim(_) => ErrorKind::MissingClaim,
        }
    }
}

/// Every error kind the HTTP boundary knows how to render.
///
/// `Config` has no core variant; it is raised by integration crates that load
/// settings at startup or per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCode,
    InvalidState,
    CodeExchange,
    LoginPage,
    MissingClaim,
    Config,
}
