//! Properties Domain
//!
//! Real-estate listings: address, price, size and an optional description.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, audit events, metrics
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Existence checks, validation, search
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory and Postgres impls)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Property, DTOs, search criteria
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_properties::{
//!     handlers,
//!     repository::InMemoryPropertyRepository,
//!     service::PropertyService,
//! };
//!
//! let repository = InMemoryPropertyRepository::new();
//! let service = PropertyService::new(repository);
//!
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{PropertyError, PropertyResult};
pub use handlers::ApiDoc;
pub use models::{CreateProperty, Property, PropertySearch, UpdateProperty};
pub use postgres::PgPropertyRepository;
pub use repository::{InMemoryPropertyRepository, PropertyRepository};
pub use service::PropertyService;

/// Mount point of the properties router below `/api`
pub const URL: &str = "/properties";

/// OpenAPI tag for the property endpoints
pub const TAG: &str = "properties";
