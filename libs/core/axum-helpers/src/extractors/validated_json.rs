//! JSON extractor with validation through the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body extractor that runs [`Validate`] after deserialization.
///
/// Syntax errors, missing fields and wrong types are rejected with
/// `400 JSON_EXTRACTION`; rule violations with `400 VALIDATION_ERROR` and
/// per-field details.
///
/// # Example
/// ```ignore
/// use axum::{Router, routing::post};
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateListing {
///     #[validate(length(min = 1, max = 255))]
///     address: String,
/// }
///
/// async fn create(ValidatedJson(input): ValidatedJson<CreateListing>) -> String {
///     input.address
/// }
///
/// let app: Router = Router::new().route("/listings", post(create));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::post,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Listing {
        #[validate(length(min = 1))]
        address: String,
        #[allow(dead_code)]
        size: i32,
    }

    fn app() -> Router {
        Router::new().route(
            "/",
            post(|ValidatedJson(l): ValidatedJson<Listing>| async move { l.address }),
        )
    }

    async fn post_json(body: &str) -> StatusCode {
        app()
            .oneshot(
                Request::post("/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_accepts_valid_body() {
        assert_eq!(post_json(r#"{"address":"1 Elm St","size":10}"#).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rule_violation_is_bad_request() {
        assert_eq!(post_json(r#"{"address":"","size":10}"#).await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_field_and_wrong_type_are_bad_request() {
        assert_eq!(post_json(r#"{"address":"1 Elm St"}"#).await, StatusCode::BAD_REQUEST);
        assert_eq!(
            post_json(r#"{"address":"1 Elm St","size":"big"}"#).await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        assert_eq!(post_json("{not json").await, StatusCode::BAD_REQUEST);
    }
}
