//! HTTP middleware: CORS policy and security headers.
//!
//! ```ignore
//! use axum_helpers::http::{create_cors_layer, security_headers};
//! use core_config::{FromEnv, cors::CorsConfig};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(create_cors_layer(&CorsConfig::from_env()?)?);
//! ```

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::security_headers;
