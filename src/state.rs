use crate::error::Result;
use crate::metrics::Metrics;
use crate::models::{CheckStats, HealthCheckRecord, NewHealthCheck};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::time::Instant;

/// # Shared Application State
///
/// Process-wide ledger of reported checks plus the service start time and
/// metrics. Registered once as `web::Data<AppState>` and shared by every
/// worker; all state lives for the lifetime of the process.
///
/// The ledger is append-only: records keep insertion order and are never
/// modified or removed.
pub struct AppState {
    checks: RwLock<Vec<HealthCheckRecord>>,
    started_at: DateTime<Utc>,
    started: Instant,
    metrics: Metrics,
}

impl AppState {
    pub fn new() -> Result<Self> {
        Ok(Self::with_metrics(Metrics::new()?))
    }

    pub fn with_metrics(metrics: Metrics) -> Self {
        Self {
            checks: RwLock::new(Vec::new()),
            started_at: Utc::now(),
            started: Instant::now(),
            metrics,
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Stamps and appends a submitted check, counting its outcome.
    pub fn record_check(&self, check: NewHealthCheck) -> HealthCheckRecord {
        let record = HealthCheckRecord::accept(check);
        self.checks.write().push(record.clone());
        self.metrics.observe_check(record.outcome());
        record
    }

    pub fn checks(&self) -> Vec<HealthCheckRecord> {
        self.checks.read().clone()
    }

    pub fn stats(&self) -> CheckStats {
        CheckStats::from_records(&self.checks.read())
    }

    pub fn uptime_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    pub fn start_time(&self) -> String {
        self.started_at.to_rfc3339()
    }
}
