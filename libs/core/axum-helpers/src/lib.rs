//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! - **[`server`]**: router assembly with OpenAPI UIs, health endpoints, graceful shutdown
//! - **[`http`]**: CORS policy and security headers
//! - **[`errors`]**: [`AppError`] and the JSON error body with error codes
//! - **[`extractors`]**: integer id path, validated JSON body and query string
//! - **[`audit`]**: audit events for data-changing requests
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::{create_production_app, create_router, health_router};
//! use core_config::{app_info, cors::CorsConfig, server::ServerConfig};
//!
//! let router = create_router::<ApiDoc>(Router::new(), &CorsConfig::AnyOrigin)?
//!     .merge(health_router(app_info!()));
//!
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod audit;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks,
};

pub use http::{create_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::{IdPath, ValidatedJson, ValidatedQuery};

pub use audit::{AuditEvent, AuditOutcome, extract_ip_from_headers, extract_user_agent};
