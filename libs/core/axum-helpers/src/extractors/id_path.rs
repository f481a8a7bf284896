//! Integer id path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for a single `i64` path parameter such as `/{id}`.
///
/// Anything that does not parse as an `i64` is rejected with
/// `400 INVALID_ID` instead of axum's plain-text rejection.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::get};
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_property(IdPath(id): IdPath) -> String {
///     format!("Property {}", id)
/// }
///
/// let app: Router = Router::new().route("/properties/{id}", get(get_property));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InvalidId(e.body_text()).into_response())?;

        raw.trim()
            .parse::<i64>()
            .map(IdPath)
            .map_err(|_| AppError::InvalidId(raw).into_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new().route("/{id}", get(|IdPath(id): IdPath| async move { id.to_string() }))
    }

    #[tokio::test]
    async fn test_parses_integer_id() {
        let response = app()
            .oneshot(Request::get("/42").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rejects_non_integer_id() {
        let response = app()
            .oneshot(Request::get("/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rejects_overflowing_id() {
        let response = app()
            .oneshot(
                Request::get("/99999999999999999999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
