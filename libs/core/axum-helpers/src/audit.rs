//! Audit log of data-changing requests.
//!
//! Events are emitted on the `audit` tracing target so they can be routed
//! separately from application logs (the production filter keeps
//! `audit=info` even when everything else is at `warn`).
//!
//! # Example
//! ```ignore
//! use axum_helpers::audit::{AuditEvent, AuditOutcome, extract_ip_from_headers, extract_user_agent};
//!
//! AuditEvent::new("property.delete", Some(format!("property:{}", id)), AuditOutcome::Success)
//!     .with_ip(extract_ip_from_headers(&headers))
//!     .with_user_agent(extract_user_agent(&headers))
//!     .log();
//! ```

use axum::http::{HeaderMap, header};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditOutcome {
    Success,
    Failure,
}

#[derive(Debug, Serialize)]
pub struct AuditEvent {
    /// Dotted action name, e.g. `property.update`
    pub action: String,
    /// Affected resource, e.g. `property:42`
    pub resource: Option<String>,
    pub outcome: AuditOutcome,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(action: impl Into<String>, resource: Option<String>, outcome: AuditOutcome) -> Self {
        Self {
            action: action.into(),
            resource,
            outcome,
            ip_address: None,
            user_agent: None,
            timestamp: Utc::now(),
            details: None,
        }
    }

    pub fn with_ip(mut self, ip: Option<String>) -> Self {
        self.ip_address = ip;
        self
    }

    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Attach any serializable payload; serialization failures drop the details.
    pub fn with_details(mut self, details: impl Serialize) -> Self {
        self.details = serde_json::to_value(details).ok();
        self
    }

    /// Emit the event on the `audit` target
    pub fn log(self) {
        tracing::info!(
            target: "audit",
            action = %self.action,
            resource = self.resource,
            outcome = ?self.outcome,
            ip = self.ip_address,
            user_agent = self.user_agent,
            timestamp = %self.timestamp,
            details = ?self.details,
            "{}",
            serde_json::to_string(&self).unwrap_or_else(|_| self.action.clone())
        );
    }
}

/// Client IP from `X-Forwarded-For` (first hop) or `X-Real-IP`.
pub fn extract_ip_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .map(|s| s.trim().to_string())
        })
}

pub fn extract_user_agent(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;

    #[test]
    fn test_forwarded_for_takes_first_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));

        assert_eq!(extract_ip_from_headers(&headers).as_deref(), Some("203.0.113.7"));
    }

    #[test]
    fn test_real_ip_fallback_and_absent() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_ip_from_headers(&headers), None);

        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));
        assert_eq!(extract_ip_from_headers(&headers).as_deref(), Some("10.0.0.2"));
    }

    #[test]
    fn test_user_agent() {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static("curl/8.5.0"));
        assert_eq!(extract_user_agent(&headers).as_deref(), Some("curl/8.5.0"));
    }

    #[test]
    fn test_event_serializes_outcome_and_details() {
        let event = AuditEvent::new(
            "property.create",
            Some("property:1".to_string()),
            AuditOutcome::Success,
        )
        .with_details(json!({"address": "123 Main St"}));

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["outcome"], "success");
        assert_eq!(value["resource"], "property:1");
        assert_eq!(value["details"]["address"], "123 Main St");

        event.log();
    }
}
