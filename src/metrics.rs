//! Prometheus counters for request volume and reported check outcomes

use crate::error::Result;
use crate::models::CheckOutcome;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
pub const HEALTH_CHECKS_TOTAL: &str = "health_checks_total";

/// Counter set backed by its own registry, so separate app instances never
/// share or double-register series.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    http_requests: IntCounterVec,
    health_checks: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let http_requests = IntCounterVec::new(
            Opts::new(HTTP_REQUESTS_TOTAL, "Total HTTP requests"),
            &["method", "endpoint", "status"],
        )?;
        let health_checks = IntCounterVec::new(
            Opts::new(HEALTH_CHECKS_TOTAL, "Total health checks reported"),
            &["status"],
        )?;

        registry.register(Box::new(http_requests.clone()))?;
        registry.register(Box::new(health_checks.clone()))?;

        // expose both outcome series from the first scrape
        for outcome in CheckOutcome::ALL {
            health_checks.with_label_values(&[outcome.as_label()]);
        }

        Ok(Self {
            registry,
            http_requests,
            health_checks,
        })
    }

    pub fn observe_request(&self, method: &str, endpoint: &str, status: u16) {
        let status = status.to_string();
        self.http_requests
            .with_label_values(&[method, endpoint, status.as_str()])
            .inc();
    }

    pub fn observe_check(&self, outcome: CheckOutcome) {
        self.health_checks
            .with_label_values(&[outcome.as_label()])
            .inc();
    }

    pub fn request_count(&self, method: &str, endpoint: &str, status: u16) -> u64 {
        let status = status.to_string();
        self.http_requests
            .with_label_values(&[method, endpoint, status.as_str()])
            .get()
    }

    pub fn check_count(&self, outcome: CheckOutcome) -> u64 {
        self.health_checks
            .with_label_values(&[outcome.as_label()])
            .get()
    }

    /// Content type of [`Metrics::render`] output.
    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }

    /// Renders all series in the Prometheus text exposition format.
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
