use axum::http::{HeaderValue, Method, header};
use core_config::cors::CorsConfig;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// Build the CORS layer for a [`CorsConfig`].
///
/// - `AnyOrigin`: `Access-Control-Allow-Origin: *`, no credentials
/// - `Origins`: only the listed origins, credentials allowed
///
/// Both allow GET, POST, PUT, DELETE and OPTIONS with a one hour preflight cache.
///
/// # Errors
/// Returns `InvalidInput` if a listed origin is not a valid header value.
pub fn create_cors_layer(config: &CorsConfig) -> io::Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods(ALLOWED_METHODS)
        .max_age(Duration::from_secs(3600));

    match config {
        CorsConfig::AnyOrigin => Ok(layer.allow_origin(Any).allow_headers(Any)),
        CorsConfig::Origins(origins) => {
            let origins = origins
                .iter()
                .map(|o| o.parse::<HeaderValue>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
                    )
                })?;

            Ok(layer
                .allow_origin(AllowOrigin::list(origins))
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
                .allow_credentials(true))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    async fn origin_header(config: CorsConfig, origin: &str) -> Option<String> {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(create_cors_layer(&config).unwrap());

        let response = app
            .oneshot(
                Request::get("/")
                    .header(header::ORIGIN, origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_any_origin_is_wildcard() {
        let header = origin_header(CorsConfig::AnyOrigin, "http://anywhere.test").await;
        assert_eq!(header.as_deref(), Some("*"));
    }

    #[tokio::test]
    async fn test_listed_origin_is_echoed() {
        let config = CorsConfig::Origins(vec!["http://localhost:3000".to_string()]);
        let header = origin_header(config, "http://localhost:3000").await;
        assert_eq!(header.as_deref(), Some("http://localhost:3000"));
    }

    #[tokio::test]
    async fn test_unlisted_origin_gets_no_header() {
        let config = CorsConfig::Origins(vec!["http://localhost:3000".to_string()]);
        assert!(origin_header(config, "http://evil.test").await.is_none());
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let config = CorsConfig::Origins(vec!["http://bad\norigin".to_string()]);
        assert!(create_cors_layer(&config).is_err());
    }
}
