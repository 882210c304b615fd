use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key under which the user-facing error message is attached to a redirect.
pub const ERROR_MESSAGE_KEY: &str = "msg";

/// Error payload attached to a redirect, keyed by field name.
pub type ErrorFields = BTreeMap<String, String>;

/// Claims extracted from a validated ID token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OidcClaims {
    /// Provider's unique user identifier.
    pub subject: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl OidcClaims {
    /// Best available name to greet the user with.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(name: Option<&str>, email: Option<&str>) -> OidcClaims {
        OidcClaims {
            subject: "sub-42".to_string(),
            email: email.map(String::from),
            name: name.map(String::from),
        }
    }

    #[test]
    fn display_name_prefers_name_then_email_then_subject() {
        assert_eq!(
            claims(Some("Ada"), Some("ada@example.com")).display_name(),
            "Ada"
        );
        assert_eq!(
            claims(None, Some("ada@example.com")).display_name(),
            "ada@example.com"
        );
        assert_eq!(claims(None, None).display_name(), "sub-42");
    }
}
