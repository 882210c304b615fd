use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use oidc_gate_auth::{FlashMessage, FLASH_COOKIE_NAME};

/// Template wrapper that converts Askama templates into HTML responses.
pub struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {err}"),
            )
                .into_response(),
        }
    }
}

/// Landing page, showing the pending flash message if there is one.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    flash: Option<FlashMessage>,
}

/// Handler for the index page (GET /).
///
/// The flash cookie is read once and cleared in the same response. The jar
/// has already percent-decoded the value.
pub async fn index(jar: CookieJar) -> (CookieJar, HtmlTemplate<IndexTemplate>) {
    let flash = jar
        .get(FLASH_COOKIE_NAME)
        .and_then(|cookie| FlashMessage::from_json(cookie.value()));

    let jar = if flash.is_some() {
        jar.remove(Cookie::build(FLASH_COOKIE_NAME).path("/"))
    } else {
        jar
    };

    (jar, HtmlTemplate(IndexTemplate { flash }))
}
