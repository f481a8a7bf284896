//! Axum middleware for per-request HTTP metrics.

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{Request, Response, StatusCode},
    middleware::Next,
};
use metrics::{counter, histogram};
use std::time::Instant;

/// Records, per request:
/// - `http_requests_total{method, path, status, status_class}`
/// - `http_request_duration_seconds{method, path}`
/// - `http_requests_errors_total{method, path, status}` for 4xx and 5xx
///
/// `path` is the matched route template (`/api/properties/{id}`) so ids do
/// not explode label cardinality; unmatched requests are labelled `unmatched`.
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use observability::middleware::metrics_middleware;
///
/// let app = router.layer(middleware::from_fn(metrics_middleware));
/// ```
pub async fn metrics_middleware(
    matched_path: Option<MatchedPath>,
    request: Request<Body>,
    next: Next,
) -> Response<Body> {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = matched_path
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(request).await;

    let status = response.status();
    let status_code = status.as_u16().to_string();

    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status_code.clone(),
        "status_class" => status_class(status)
    )
    .increment(1);

    histogram!(
        "http_request_duration_seconds",
        "method" => method.clone(),
        "path" => path.clone()
    )
    .record(start.elapsed().as_secs_f64());

    if status.is_client_error() || status.is_server_error() {
        counter!(
            "http_requests_errors_total",
            "method" => method,
            "path" => path,
            "status" => status_code
        )
        .increment(1);
    }

    response
}

fn status_class(status: StatusCode) -> &'static str {
    match status.as_u16() {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class() {
        assert_eq!(status_class(StatusCode::OK), "2xx");
        assert_eq!(status_class(StatusCode::NOT_FOUND), "4xx");
        assert_eq!(status_class(StatusCode::SERVICE_UNAVAILABLE), "5xx");
    }
}
