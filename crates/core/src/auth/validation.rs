use url::Url;

/// Validates a relative login page path.
///
/// Returns `Some(path)` for a plain relative path, `None` otherwise. Rejects:
/// - anything not starting with a single `/`
/// - protocol-relative paths (`//evil.com`)
/// - control characters
/// - embedded schemes (`://`)
///
/// # Examples
///
/// ```
/// use oidc_gate_core::auth::validate_login_path;
///
/// assert_eq!(validate_login_path("/login"), Some("/login"));
/// assert_eq!(validate_login_path("//evil.com"), None);
/// assert_eq!(validate_login_path("https://evil.com"), None);
/// ```
pub fn validate_login_path(path: &str) -> Option<&str> {
    if !path.starts_with('/') || path.starts_with("//") {
        return None;
    }

    if path.chars().any(|c| c.is_control()) {
        return None;
    }

    if path.contains("://") {
        return None;
    }

    Some(path)
}

/// Resolves a configured login page into an absolute URL.
///
/// Absolute `http`/`https` URLs are taken as is (the identity provider usually
/// lives on another host). Anything else must pass [`validate_login_path`] and
/// is joined onto `base_url`.
///
/// # Examples
///
/// ```
/// use oidc_gate_core::auth::resolve_login_page;
/// use url::Url;
///
/// let base = Url::parse("https://app.example").unwrap();
/// assert_eq!(
///     resolve_login_page(&base, "https://idp.example/login").unwrap().as_str(),
///     "https://idp.example/login"
/// );
/// assert_eq!(
///     resolve_login_page(&base, "/sso/login").unwrap().as_str(),
///     "https://app.example/sso/login"
/// );
/// assert!(resolve_login_page(&base, "javascript:alert(1)").is_none());
/// ```
pub fn resolve_login_page(base_url: &Url, raw: &str) -> Option<Url> {
    if let Ok(url) = Url::parse(raw) {
        return matches!(url.scheme(), "http" | "https").then_some(url);
    }

    let path = validate_login_path(raw)?;
    base_url.join(path).ok()
}
