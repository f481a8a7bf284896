use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PropertyError {
    #[error("Property not found: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type PropertyResult<T> = Result<T, PropertyError>;

impl From<PropertyError> for AppError {
    fn from(err: PropertyError) -> Self {
        match err {
            PropertyError::NotFound(id) => AppError::NotFound(format!("Property {} not found", id)),
            PropertyError::Validation(msg) => AppError::InvalidInput(msg),
            PropertyError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for PropertyError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

impl From<sea_orm::DbErr> for PropertyError {
    fn from(err: sea_orm::DbErr) -> Self {
        PropertyError::Internal(format!("Database error: {}", err))
    }
}
