use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use std::time::Instant;
use tracing::debug;

use crate::common::DatabaseError;

/// Run `SELECT 1` against the pool
///
/// Used by the readiness probe.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running PostgreSQL health check");

    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1".to_owned());
    db.query_one_raw(stmt).await.map_err(|e| {
        DatabaseError::HealthCheckFailed(format!("PostgreSQL health check failed: {}", e))
    })?;

    Ok(())
}

/// Health check outcome with timing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub healthy: bool,
    pub message: Option<String>,
    pub response_time_ms: u64,
}

impl HealthStatus {
    pub fn healthy(response_time_ms: u64) -> Self {
        Self {
            healthy: true,
            message: None,
            response_time_ms,
        }
    }

    pub fn unhealthy(message: impl Into<String>, response_time_ms: u64) -> Self {
        Self {
            healthy: false,
            message: Some(message.into()),
            response_time_ms,
        }
    }
}

/// [`check_health`] that never fails, reporting the outcome and elapsed time instead
pub async fn check_health_detailed(db: &DatabaseConnection) -> HealthStatus {
    let start = Instant::now();
    let result = check_health(db).await;
    let elapsed = start.elapsed().as_millis() as u64;

    match result {
        Ok(()) => HealthStatus::healthy(elapsed),
        Err(e) => HealthStatus::unhealthy(e.to_string(), elapsed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbErr, MockDatabase};
    use std::collections::BTreeMap;

    #[test]
    fn test_health_status_constructors() {
        let up = HealthStatus::healthy(3);
        assert!(up.healthy);
        assert!(up.message.is_none());

        let down = HealthStatus::unhealthy("connection refused", 12);
        assert!(!down.healthy);
        assert_eq!(down.message.as_deref(), Some("connection refused"));
        assert_eq!(down.response_time_ms, 12);
    }

    #[tokio::test]
    async fn test_check_health_passes_on_mock_row() {
        let row: BTreeMap<&str, sea_orm::Value> = BTreeMap::from([("?column?", 1i32.into())]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();

        assert!(check_health(&db).await.is_ok());
    }

    #[tokio::test]
    async fn test_check_health_detailed_reports_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("pool closed".to_string())])
            .into_connection();

        let status = check_health_detailed(&db).await;
        assert!(!status.healthy);
        assert!(status.message.unwrap().contains("pool closed"));
    }
}
