use std::path::Path;

use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

const ALLOWED_METHODS: [Method; 3] = [Method::GET, Method::POST, Method::OPTIONS];

async fn health_check() -> &'static str {
    "OK"
}

/// Landing page files with an `index.html` fallback, plus a health probe.
pub fn build_router(dir: &Path) -> Router {
    let static_files = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));

    Router::new()
        .route("/api/health", get(health_check))
        .fallback_service(static_files)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods(ALLOWED_METHODS)
                .allow_origin(Any)
                .allow_headers([header::CONTENT_TYPE]),
        )
        // Plain responses advertise the same CORS policy as preflight answers.
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET,POST,OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("content-type"),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tempfile::TempDir;
    use tower::ServiceExt;

    /// Built site in a directory removed when the returned handle drops.
    fn site_dir() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>revel</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('hi')").unwrap();
        dir
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn health_check_responds_ok() {
        let site = site_dir();
        let app = build_router(site.path());
        let response = app
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "OK");
    }

    #[tokio::test]
    async fn serves_files_from_the_site_dir() {
        let site = site_dir();
        let app = build_router(site.path());
        let response = app
            .oneshot(Request::get("/app.js").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "console.log('hi')");
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index() {
        let site = site_dir();
        let app = build_router(site.path());
        let response = app
            .oneshot(Request::get("/no/such/page").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_text(response).await, "<html>revel</html>");
    }

    #[tokio::test]
    async fn responses_allow_any_origin() {
        let site = site_dir();
        let app = build_router(site.path());
        let response = app
            .oneshot(
                Request::get("/api/health")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn plain_responses_carry_allowed_methods_and_headers() {
        let site = site_dir();
        let app = build_router(site.path());
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let headers = response.headers();
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(), "GET,POST,OPTIONS");
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(), "content-type");
    }

    #[tokio::test]
    async fn preflight_is_answered_with_the_cors_policy() {
        let site = site_dir();
        let app = build_router(site.path());
        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/health")
                    .header(header::ORIGIN, "http://example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        let methods = headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap().to_str().unwrap();
        assert!(methods.contains("POST"));
        assert_eq!(headers.get_all(header::ACCESS_CONTROL_ALLOW_METHODS).iter().count(), 1);
        let allowed_headers = headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap();
        assert_eq!(allowed_headers, "content-type");
    }
}
