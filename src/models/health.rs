use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Liveness Response
///
/// Fixed body returned by `GET /health`.
///
/// ## Example JSON
/// ```json
/// { "status": "healthy" }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}
