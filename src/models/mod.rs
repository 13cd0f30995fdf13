/// # Health Check Ledger Models
///
/// The stored [`HealthCheckRecord`], the [`NewHealthCheck`] submission body,
/// the success/failure [`CheckOutcome`] and derived [`CheckStats`].
///
/// [`HealthCheckRecord`]: crate::models::check::HealthCheckRecord
/// [`NewHealthCheck`]: crate::models::check::NewHealthCheck
/// [`CheckOutcome`]: crate::models::check::CheckOutcome
/// [`CheckStats`]: crate::models::check::CheckStats
pub mod check;

/// # Liveness Response
///
/// Body of `GET /health`: `{ "status": "healthy" }`.
pub mod health;

/// Service descriptor and uptime responses
pub mod service;

pub use check::{CheckOutcome, CheckStats, HealthCheckRecord, NewHealthCheck};
pub use health::HealthResponse;
pub use service::{AppInfo, UptimeResponse};
