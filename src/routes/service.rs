use crate::error::Error;
use crate::models::service::HOSTNAME_VAR;
use crate::models::{AppInfo, HealthResponse, UptimeResponse};
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, get, web};

/// # Service Descriptor Endpoint
///
/// Returns the application name, version, running status, host identifier
/// and the current server time. The host identifier is read from the
/// `HOSTNAME` environment variable on every request and falls back to
/// `"unknown"`.
///
/// ## Example Response
///
/// ```json
/// {
///   "app": "DevOps Monitoring App",
///   "version": "1.0.0",
///   "status": "running",
///   "hostname": "web-01",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service descriptor", body = AppInfo)),
    tag = "Service"
)]
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(AppInfo::running(std::env::var(HOSTNAME_VAR).ok()))
}

/// # Liveness Endpoint
///
/// Always answers `{"status": "healthy"}` with **200 OK**.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse)),
    tag = "Service"
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::healthy())
}

/// # Uptime Endpoint
///
/// Seconds elapsed since the process started, plus the start time itself.
#[utoipa::path(
    get,
    path = "/api/uptime",
    responses((status = 200, description = "Process uptime", body = UptimeResponse)),
    tag = "Service"
)]
#[get("/api/uptime")]
pub async fn uptime(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(UptimeResponse {
        uptime_seconds: state.uptime_seconds(),
        start_time: state.start_time(),
    })
}

/// # Metrics Endpoint
///
/// Current counter values in the Prometheus text exposition format.
#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "Prometheus text exposition", body = String, content_type = "text/plain"),
        (status = 500, description = "Metrics could not be encoded")
    ),
    tag = "Service"
)]
#[get("/metrics")]
pub async fn metrics(state: web::Data<AppState>) -> Result<HttpResponse, Error> {
    let metrics = state.metrics();
    let body = metrics.render()?;
    Ok(HttpResponse::Ok()
        .content_type(metrics.content_type())
        .body(body))
}

/// # Route Configuration
///
/// - `GET /`
/// - `GET /health`
/// - `GET /api/uptime`
/// - `GET /metrics`
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(health)
        .service(uptime)
        .service(metrics);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::service::APP_NAME;
    use actix_web::{App, test};
    use chrono::DateTime;
    use std::time::Duration;

    #[actix_web::test]
    async fn test_index_endpoint() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let info: AppInfo = test::read_body_json(resp).await;
        assert_eq!(info.app, APP_NAME);
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(info.status, "running");
        assert!(!info.hostname.is_empty());
        assert!(DateTime::parse_from_rfc3339(&info.timestamp).is_ok());
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert_eq!(content_type, "application/json");

        let body: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(body, HealthResponse::healthy());
    }

    #[actix_web::test]
    async fn test_uptime_grows_between_calls() {
        let state = web::Data::new(AppState::new().unwrap());
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/uptime").to_request();
        let first: UptimeResponse = test::call_and_read_body_json(&app, req).await;

        actix_web::rt::time::sleep(Duration::from_millis(50)).await;

        let req = test::TestRequest::get().uri("/api/uptime").to_request();
        let second: UptimeResponse = test::call_and_read_body_json(&app, req).await;

        assert!(second.uptime_seconds - first.uptime_seconds >= 0.049);
        assert_eq!(first.start_time, second.start_time);
        assert_eq!(first.start_time, state.start_time());
    }

    #[actix_web::test]
    async fn test_metrics_endpoint_serves_text_exposition() {
        let state = web::Data::new(AppState::new().unwrap());
        let app = test::init_service(App::new().app_data(state).configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/metrics").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/plain"));

        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.contains("health_checks_total"));
    }
}
