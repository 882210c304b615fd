//! Flash message utilities for carrying errors across redirects.
//!
//! Flash messages are short-lived messages stored in cookies that get displayed
//! once on the next page and then cleared.

use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Redirect, Response};
use oidc_gate_core::auth::{ErrorFields, ERROR_MESSAGE_KEY};
use serde::{Deserialize, Serialize};
use url::Url;

/// Name of the cookie holding the serialized flash message.
pub const FLASH_COOKIE_NAME: &str = "flash_message";

/// Flash message structure stored in cookie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashMessage {
    /// Message type (e.g., "error", "success")
    #[serde(rename = "type")]
    pub message_type: String,
    /// The message content to display
    pub message: String,
    /// Field errors, keyed by name (`msg` for the main message)
    #[serde(default, skip_serializing_if = "ErrorFields::is_empty")]
    pub errors: ErrorFields,
    /// Whether the message should auto-dismiss after a few seconds
    pub auto_dismiss: bool,
}

impl FlashMessage {
    /// Create an error flash message that requires manual dismissal.
    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            message_type: "error".to_string(),
            errors: ErrorFields::from([(ERROR_MESSAGE_KEY.to_string(), message.clone())]),
            message,
            auto_dismiss: false,
        }
    }

    /// Create an error flash message from a set of field errors.
    pub fn with_errors(errors: ErrorFields) -> Self {
        Self {
            message_type: "error".to_string(),
            message: errors.get(ERROR_MESSAGE_KEY).cloned().unwrap_or_default(),
            errors,
            auto_dismiss: false,
        }
    }

    /// Create a success flash message that auto-dismisses.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message_type: "success".to_string(),
            message: message.into(),
            errors: ErrorFields::new(),
            auto_dismiss: true,
        }
    }

    /// Serialize to JSON for cookie storage.
    pub fn to_cookie_value(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse an already percent-decoded cookie value, as handed out by a
    /// cookie jar.
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    /// Parse a raw (URL-encoded) cookie value back into a flash message.
    pub fn from_cookie_value(raw: &str) -> Option<Self> {
        let decoded = urlencoding::decode(raw).ok()?;
        Self::from_json(&decoded)
    }

    /// Build a Set-Cookie header value for the flash message.
    ///
    /// Cookie properties:
    /// - Path: / (accessible from any page)
    /// - SameSite: Lax (survives the top-level redirect back from the provider)
    /// - Max-Age: 60 (expires after 60 seconds as a safety net)
    /// - Not HttpOnly (must be readable by JavaScript)
    pub fn to_set_cookie_header(&self) -> String {
        let cookie_value = self.to_cookie_value();
        let encoded = urlencoding::encode(&cookie_value);
        format!("{FLASH_COOKIE_NAME}={encoded}; Path=/; SameSite=Lax; Max-Age=60")
    }
}

/// Create a redirect response with a flash message cookie.
pub fn redirect_with_flash(url: &str, flash: FlashMessage) -> Response {
    let cookie_header = flash.to_set_cookie_header();

    ([(SET_COOKIE, cookie_header)], Redirect::to(url)).into_response()
}

/// Redirect to `url` with `errors` attached as an error flash.
pub fn redirect_with_errors(url: Url, errors: ErrorFields) -> Response {
    redirect_with_flash(url.as_str(), FlashMessage::with_errors(errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::LOCATION, StatusCode};

    #[test]
    fn error_flash_carries_msg_field() {
        let flash = FlashMessage::error("Access denied");
        assert_eq!(flash.message_type, "error");
        assert_eq!(flash.message, "Access denied");
        assert_eq!(flash.errors.get("msg").map(String::as_str), Some("Access denied"));
        assert!(!flash.auto_dismiss);
    }

    #[test]
    fn success_flash_has_no_errors() {
        let flash = FlashMessage::success("Signed in");
        assert_eq!(flash.message_type, "success");
        assert!(flash.errors.is_empty());
        assert!(!flash.to_cookie_value().contains("errors"));
    }

    #[test]
    fn cookie_value_is_camel_case_json() {
        let json = FlashMessage::error("Test message").to_cookie_value();
        assert!(json.contains("\"type\":\"error\""));
        assert!(json.contains("\"errors\":{\"msg\":\"Test message\"}"));
        assert!(json.contains("\"autoDismiss\":false"));
    }

    #[test]
    fn set_cookie_header_survives_parsing() {
        let flash = FlashMessage::error("La validation du JWT a échoué.");
        let header = flash.to_set_cookie_header();

        assert!(header.contains("Path=/"));
        assert!(header.contains("SameSite=Lax"));
        assert!(header.contains("Max-Age=60"));

        let (pair, _) = header.split_once(';').unwrap();
        let raw = pair.strip_prefix("flash_message=").unwrap();
        assert_eq!(FlashMessage::from_cookie_value(raw), Some(flash));
    }

    #[test]
    fn garbage_cookie_is_ignored() {
        assert_eq!(FlashMessage::from_cookie_value("not%20json"), None);
        assert_eq!(FlashMessage::from_json("not json"), None);
    }

    #[test]
    fn decoded_value_keeps_percent_sequences() {
        let flash = FlashMessage::error("Code %41 invalide");

        let parsed = FlashMessage::from_json(&flash.to_cookie_value()).unwrap();
        assert_eq!(parsed.message, "Code %41 invalide");
    }

    #[test]
    fn redirect_with_errors_sets_location_and_cookie() {
        let errors = ErrorFields::from([("msg".to_string(), "Try again".to_string())]);
        let response =
            redirect_with_errors(Url::parse("https://idp.example/login").unwrap(), errors);

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "https://idp.example/login"
        );
        assert!(response
            .headers()
            .get(SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("flash_message="));
    }
}
