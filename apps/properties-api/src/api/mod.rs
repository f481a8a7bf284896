use axum::{middleware, routing::get, Router};
use observability::middleware::metrics_middleware;

pub mod health;
pub mod properties;

/// API routes without the `/api` prefix; `create_router` adds it.
///
/// Every sub-router has its state applied, so the result is stateless.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest(domain_properties::URL, properties::router(state))
        .route_layer(middleware::from_fn(metrics_middleware))
}

/// `/ready` (database ping) and `/metrics` (Prometheus text), outside `/api`
pub fn ops_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
        .route("/metrics", get(observability::metrics_handler))
}
