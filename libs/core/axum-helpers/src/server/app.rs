use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::{cors::create_cors_layer, security::security_headers};
use axum::{Router, middleware};
use core_config::{cors::CorsConfig, server::ServerConfig};
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Wraps the API routes with documentation UIs and cross-cutting middleware.
///
/// - `apis` is nested under `/api`; state must already be applied
/// - Swagger UI at `/swagger-ui`, ReDoc at `/redoc`, RapiDoc at `/rapidoc`,
///   Scalar at `/scalar`, all reading `/api-docs/openapi.json`
/// - unknown paths fall back to a `404 NOT_FOUND` JSON body
/// - request tracing, security headers, CORS and response compression
///
/// Health, readiness and metrics endpoints are merged in by the binary.
///
/// # Errors
/// Fails if the CORS origin list contains an invalid header value.
pub fn create_router<T>(apis: Router, cors: &CorsConfig) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = create_cors_layer(cors)?;
    match cors {
        CorsConfig::AnyOrigin => info!("CORS allows any origin"),
        CorsConfig::Origins(origins) => info!(origins = ?origins, "CORS restricted to origins"),
    }

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis.method_not_allowed_fallback(method_not_allowed))
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup`.
///
/// In-flight requests are drained first. `cleanup` (closing the database
/// pool, flushing metrics) gets at most `shutdown_timeout` before the process
/// moves on.
///
/// ```ignore
/// let cleanup = async move {
///     db.close().await.ok();
/// };
/// create_production_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (coordinator, _rx) = ShutdownCoordinator::new();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    serve_then_cleanup(listener, router, coordinator, shutdown_timeout, cleanup).await
}

/// Serve until `coordinator` fires, drain open connections, then run `cleanup`.
async fn serve_then_cleanup<F>(
    listener: tokio::net::TcpListener,
    router: Router,
    coordinator: ShutdownCoordinator,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { coordinator.wait_for_signal().await })
        .await
        .inspect_err(|e| tracing::error!("Server encountered an error: {:?}", e));

    info!(timeout = ?shutdown_timeout, "Requests drained, running cleanup");
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed"),
        Err(_) => warn!(timeout = ?shutdown_timeout, "Cleanup timed out, forcing shutdown"),
    }

    serve_result
}
