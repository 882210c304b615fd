use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use oidc_gate_auth::{auth_routes, AuthState};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::handlers::{health::livez, pages::index};

/// Create the application router with all routes and middleware.
pub fn create_app(auth: AuthState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/livez", get(livez))
        .merge(auth_routes(auth))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{
            header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
            Request,
        },
    };
    use http_body_util::BodyExt;
    use oidc_gate_auth::{AuthConfig, FlashMessage};
    use tower::ServiceExt;
    use url::Url;

    fn app() -> Router {
        let config = AuthConfig {
            base_url: Url::parse("http://localhost:3000").unwrap(),
            issuer: "https://idp.example".to_string(),
            client_id: "gate".to_string(),
            login_page: Url::parse("https://idp.example/login").unwrap(),
            jwt_secret: b"test-secret".to_vec(),
            leeway: Duration::from_secs(60),
            post_login_redirect: "/".to_string(),
        };
        create_app(AuthState::from_config(config))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_livez() {
        let response = app()
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_index_without_flash() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(SET_COOKIE).is_none());

        let html = body_string(response).await;
        assert!(html.contains("/auth/oidc/login-page"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[tokio::test]
    async fn test_index_shows_and_clears_flash() {
        let flash = FlashMessage::error("<b>Échec</b>");
        let header = flash.to_set_cookie_header();
        let (pair, _) = header.split_once(';').unwrap();

        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(COOKIE, pair)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cleared = response
            .headers()
            .get(SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(cleared.starts_with("flash_message="));

        let html = body_string(response).await;
        assert!(html.contains("class=\"flash flash-error\""));
        assert!(html.contains("Échec"));
        assert!(!html.contains("<b>"));
    }

    #[tokio::test]
    async fn test_index_keeps_percent_sequences_in_flash() {
        let header = FlashMessage::error("Code %41 invalide").to_set_cookie_header();
        let (pair, _) = header.split_once(';').unwrap();

        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(COOKIE, pair)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let html = body_string(response).await;
        assert!(html.contains("role=\"alert\">Code %41 invalide</div>"));
    }

    #[tokio::test]
    async fn test_form_post_callback_redirects_to_login_page() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/auth/oidc/callback")
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("code=not-a-jwt&state=abc"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "https://idp.example/login"
        );
    }

    #[tokio::test]
    async fn test_garbage_code_redirects_to_login_page() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/auth/oidc/callback?code=not-a-jwt&state=abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "https://idp.example/login"
        );
    }
}
