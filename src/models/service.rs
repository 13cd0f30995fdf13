use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const APP_NAME: &str = "DevOps Monitoring App";
pub const HOSTNAME_VAR: &str = "HOSTNAME";
pub const UNKNOWN_HOSTNAME: &str = "unknown";

/// # Service Descriptor
///
/// Static information about the running service, returned by `GET /`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AppInfo {
    pub app: String,
    pub version: String,
    pub status: String,
    pub hostname: String,
    pub timestamp: String,
}

impl AppInfo {
    pub fn running(hostname: Option<String>) -> Self {
        Self {
            app: APP_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            status: "running".to_string(),
            hostname: hostname
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| UNKNOWN_HOSTNAME.to_string()),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// # Uptime Response
///
/// Seconds elapsed since process start along with the absolute start time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UptimeResponse {
    pub uptime_seconds: f64,
    pub start_time: String,
}
