//! Prometheus metrics for the properties service.
//!
//! - recorder installation and the `/metrics` handler
//! - [`middleware::metrics_middleware`] for per-request HTTP metrics
//! - [`PropertyMetrics`] for domain operation counters
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::{Router, middleware, routing::get};
//! use observability::{init_metrics, metrics_handler, middleware::metrics_middleware};
//!
//! init_metrics()?;
//!
//! let app = Router::new()
//!     .route("/metrics", get(metrics_handler))
//!     .layer(middleware::from_fn(metrics_middleware));
//! ```

pub mod middleware;
pub mod properties;

pub use properties::PropertyMetrics;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::info;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the global Prometheus recorder.
///
/// Safe to call more than once; later calls return the first handle.
pub fn init_metrics() -> Result<&'static PrometheusHandle, BuildError> {
    METRICS_HANDLE.get_or_try_init(|| {
        let handle = PrometheusBuilder::new().install_recorder()?;
        info!("Prometheus metrics recorder initialized");
        register_metric_descriptions();
        Ok(handle)
    })
}

pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// `GET /metrics` in Prometheus text format
pub async fn metrics_handler() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

fn register_metric_descriptions() {
    use metrics::{describe_counter, describe_histogram};

    describe_counter!("http_requests_total", "Total number of HTTP requests");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_counter!(
        "http_requests_errors_total",
        "Total number of HTTP requests answered with 4xx or 5xx"
    );

    describe_counter!(
        "property_operations_total",
        "Property operations by operation name"
    );
    describe_counter!(
        "property_not_found_total",
        "Property lookups that found no row, by operation"
    );
    describe_histogram!(
        "property_search_results",
        "Number of properties returned per search"
    );
}
