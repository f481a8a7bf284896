//! Counters for property operations.

use metrics::{counter, histogram};

/// Records domain-level property metrics
pub struct PropertyMetrics;

impl PropertyMetrics {
    pub fn record_created() {
        counter!("property_operations_total", "operation" => "create").increment(1);
    }

    pub fn record_updated() {
        counter!("property_operations_total", "operation" => "update").increment(1);
    }

    pub fn record_deleted() {
        counter!("property_operations_total", "operation" => "delete").increment(1);
    }

    /// A get, update or delete that targeted a missing id
    pub fn record_not_found(operation: &'static str) {
        counter!("property_not_found_total", "operation" => operation).increment(1);
    }

    pub fn record_search(results: usize) {
        counter!("property_operations_total", "operation" => "search").increment(1);
        histogram!("property_search_results").record(results as f64);

        tracing::debug!(results, "Property search completed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[test]
    fn test_operations_are_labelled() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            PropertyMetrics::record_created();
            PropertyMetrics::record_created();
            PropertyMetrics::record_deleted();
            PropertyMetrics::record_not_found("update");
            PropertyMetrics::record_search(3);
        });

        let rendered = handle.render();
        assert!(rendered.contains(r#"property_operations_total{operation="create"} 2"#));
        assert!(rendered.contains(r#"property_operations_total{operation="delete"} 1"#));
        assert!(rendered.contains(r#"property_not_found_total{operation="update"} 1"#));
        assert!(rendered.contains("property_search_results"));
    }
}
