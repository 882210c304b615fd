mod error;
mod http_mapping;
mod invalid_code;
mod traits;
mod types;
mod validation;

pub use error::{AuthError, ErrorKind};
pub use http_mapping::{resolve_error_kind, Resolution};
pub use invalid_code::{InvalidCodeError, DEFAULT_INVALID_CODE_MESSAGE};
pub use traits::{CodeExchanger, LoginPageProvider, Result};
pub use types::{ErrorFields, OidcClaims, ERROR_MESSAGE_KEY};
pub use validation::{resolve_login_page, validate_login_path};
