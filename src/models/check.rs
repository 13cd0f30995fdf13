use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Status code a reported check must carry to count as healthy.
pub const HEALTHY_STATUS: i64 = 200;

/// # Health Check Submission
///
/// Body accepted by `POST /api/checks`. The payload shape is not enforced:
/// `url` and `status` are kept as whatever JSON value the caller sent, and
/// absent fields are stored as `null`.
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, ToSchema)]
pub struct NewHealthCheck {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub url: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<i64>)]
    pub status: Option<Value>,
}

impl From<Value> for NewHealthCheck {
    /// Picks `url` and `status` out of a JSON object. Anything other than an
    /// object yields an empty submission.
    fn from(payload: Value) -> Self {
        let Value::Object(mut fields) = payload else {
            return Self::default();
        };
        let mut take = |key: &str| fields.remove(key).filter(|v| !v.is_null());
        Self {
            url: take("url"),
            status: take("status"),
        }
    }
}

/// # Health Check Record
///
/// One caller-reported check result, stamped with the time the service
/// accepted it. Records are never modified once stored.
///
/// ## Example JSON
/// ```json
/// {
///   "url": "https://example.com",
///   "status": 200,
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct HealthCheckRecord {
    #[schema(value_type = Option<String>)]
    pub url: Option<Value>,
    #[schema(value_type = Option<i64>)]
    pub status: Option<Value>,
    pub timestamp: String,
}

impl HealthCheckRecord {
    pub fn accept(check: NewHealthCheck) -> Self {
        Self {
            url: check.url,
            status: check.status,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    /// Healthy when `status` is numerically 200 (`200` and `200.0` both
    /// count; the string `"200"` does not).
    pub fn is_healthy(&self) -> bool {
        self.status.as_ref().and_then(Value::as_f64) == Some(HEALTHY_STATUS as f64)
    }

    pub fn outcome(&self) -> CheckOutcome {
        if self.is_healthy() {
            CheckOutcome::Success
        } else {
            CheckOutcome::Failure
        }
    }
}

/// Binary classification of a reported check, used as a metric label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Success,
    Failure,
}

impl CheckOutcome {
    pub const ALL: [CheckOutcome; 2] = [CheckOutcome::Success, CheckOutcome::Failure];

    pub fn as_label(&self) -> &'static str {
        match self {
            CheckOutcome::Success => "success",
            CheckOutcome::Failure => "failure",
        }
    }
}

/// # Aggregate Check Statistics
///
/// Returned by `GET /api/stats`; `healthy + unhealthy == total_checks`.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, ToSchema)]
pub struct CheckStats {
    pub total_checks: usize,
    pub healthy: usize,
    pub unhealthy: usize,
}

impl CheckStats {
    pub fn from_records(records: &[HealthCheckRecord]) -> Self {
        let total_checks = records.len();
        let healthy = records.iter().filter(|r| r.is_healthy()).count();
        Self {
            total_checks,
            healthy,
            unhealthy: total_checks - healthy,
        }
    }
}
