//! Health check service for verifying external dependencies
//!
//! Linkboard has a single hard dependency, its PostgreSQL database. The
//! response shape stays a list of services so new dependencies slot in
//! without changing what probes parse.

use serde::Serialize;
use sqlx::PgPool;
use std::time::{Duration, Instant};

/// Status of an individual service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// Service is healthy and responding
    Healthy,
    /// Service is unhealthy or unreachable
    Unhealthy,
}

/// Result of a single service health check
#[derive(Debug, Clone, Serialize)]
pub struct ServiceHealth {
    /// Name of the service
    pub name: &'static str,
    /// Current status
    pub status: ServiceStatus,
    /// Response time in milliseconds (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
    /// Error message if unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Additional details about the service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ServiceHealth {
    /// Create a healthy service result
    pub fn healthy(name: &'static str, response_time: Duration) -> Self {
        Self {
            name,
            status: ServiceStatus::Healthy,
            response_time_ms: Some(response_time.as_millis() as u64),
            error: None,
            details: None,
        }
    }

    /// Attach details to a result
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Create an unhealthy service result with response time
    pub fn unhealthy(name: &'static str, error: impl Into<String>, response_time: Duration) -> Self {
        Self {
            name,
            status: ServiceStatus::Unhealthy,
            response_time_ms: Some(response_time.as_millis() as u64),
            error: Some(error.into()),
            details: None,
        }
    }
}

/// Aggregated health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckResponse {
    /// Overall status (healthy only if every service is healthy)
    pub status: ServiceStatus,
    /// Individual service health results
    pub services: Vec<ServiceHealth>,
    /// Total time to complete all health checks
    pub total_time_ms: u64,
    /// API version
    pub version: &'static str,
}

impl HealthCheckResponse {
    /// Create a new health check response from individual service results
    pub fn new(services: Vec<ServiceHealth>, total_time: Duration) -> Self {
        let status = if services.iter().all(|s| s.status == ServiceStatus::Healthy) {
            ServiceStatus::Healthy
        } else {
            ServiceStatus::Unhealthy
        };

        Self {
            status,
            services,
            total_time_ms: total_time.as_millis() as u64,
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    /// Check if overall health is good
    pub fn is_healthy(&self) -> bool {
        self.status == ServiceStatus::Healthy
    }
}

/// Health checks against the application's shared connection pool
#[derive(Clone)]
pub struct HealthService {
    pool: PgPool,
}

impl HealthService {
    /// Create a new health service
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check PostgreSQL connectivity through the pool
    pub async fn check_database(&self) -> ServiceHealth {
        let start = Instant::now();

        match sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
        {
            Ok(_) => {
                let elapsed = start.elapsed();
                let version = sqlx::query_scalar::<_, String>("SELECT version()")
                    .fetch_optional(&self.pool)
                    .await
                    .ok()
                    .flatten();

                let health = ServiceHealth::healthy("database", elapsed);
                match version {
                    Some(v) => health.with_details(serde_json::json!({ "version": v })),
                    None => health,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                ServiceHealth::unhealthy("database", format!("Query failed: {}", e), start.elapsed())
            }
        }
    }

    /// Run every dependency check
    pub async fn check_all(&self) -> HealthCheckResponse {
        let start = Instant::now();
        let services = vec![self.check_database().await];
        HealthCheckResponse::new(services, start.elapsed())
    }
}
