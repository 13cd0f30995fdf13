use actix_web::web;

/// # Service Endpoints
///
/// - `GET /`: application descriptor (name, version, status, hostname, time)
/// - `GET /health`: liveness probe, always `{"status": "healthy"}`
/// - `GET /api/uptime`: seconds since process start
/// - `GET /metrics`: Prometheus text exposition
pub mod service;

/// # Health Check Ledger Endpoints
///
/// ## Example Endpoints
///
/// ```text
/// GET  /api/checks - All recorded checks, in submission order
/// POST /api/checks - Record a check: { "url": "...", "status": 200 }
/// GET  /api/stats  - { total_checks, healthy, unhealthy }
/// ```
pub mod checks;


/// # Route Configuration
///
/// Mounts every endpoint at the root path. The request metrics middleware is
/// applied by the caller around the whole `App` (see
/// [`RequestMetrics`](crate::middleware::RequestMetrics)) so that unmatched
/// routes are counted too.
///
/// Requires `web::Data<AppState>` to be registered as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(service::configure_routes)
        .configure(checks::configure_routes);
}
