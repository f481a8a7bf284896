//! Custom extractors for Axum handlers.
//!
//! Their rejections are [`AppError`](crate::errors::AppError) responses, so a
//! malformed path, query or body yields the same JSON error body as every
//! other failure.

pub mod id_path;
pub mod validated_json;
pub mod validated_query;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
