//! Query string extractor with validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query string counterpart of [`ValidatedJson`](super::ValidatedJson).
///
/// Unparseable parameters are rejected with `400 BAD_REQUEST`, rule
/// violations with `400 VALIDATION_ERROR`.
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        params
            .validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedQuery(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Range {
        #[validate(range(min = 0))]
        min: Option<i32>,
    }

    async fn status_for(uri: &str) -> StatusCode {
        Router::new()
            .route(
                "/",
                get(|ValidatedQuery(r): ValidatedQuery<Range>| async move {
                    format!("{:?}", r.min)
                }),
            )
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_query_parsing_and_validation() {
        assert_eq!(status_for("/").await, StatusCode::OK);
        assert_eq!(status_for("/?min=5").await, StatusCode::OK);
        assert_eq!(status_for("/?min=five").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_for("/?min=-1").await, StatusCode::BAD_REQUEST);
    }
}
