use crate::models::{CheckStats, HealthCheckRecord, NewHealthCheck};
use crate::state::AppState;
use actix_web::{HttpResponse, Responder, get, post, web};
use serde_json::Value;
use tracing::info;

/// # List Recorded Checks
///
/// Returns every recorded check in the order it was submitted. An empty
/// ledger yields `[]`.
#[utoipa::path(
    get,
    path = "/api/checks",
    responses((status = 200, description = "All recorded checks", body = [HealthCheckRecord])),
    tag = "Health Checks"
)]
#[get("/api/checks")]
pub async fn list_checks(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.checks())
}

/// # Record a Check
///
/// Stores a caller-reported check result and stamps it with the server
/// time. `url` and `status` are both optional and stored as sent, whatever
/// their JSON type; a body that is not an object stores both as `null`. A
/// check counts as a success only when `status` is numerically `200`.
///
/// ## Request
/// ```json
/// { "url": "https://example.com", "status": 200 }
/// ```
///
/// ## Responses
/// - **201 Created**: the stored record
/// - **400 Bad Request**: body is not valid JSON (framework default)
#[utoipa::path(
    post,
    path = "/api/checks",
    request_body = NewHealthCheck,
    responses(
        (status = 201, description = "Check recorded", body = HealthCheckRecord),
        (status = 400, description = "Malformed JSON body")
    ),
    tag = "Health Checks"
)]
#[post("/api/checks")]
pub async fn create_check(
    state: web::Data<AppState>,
    req: web::Json<Value>,
) -> impl Responder {
    let record = state.record_check(NewHealthCheck::from(req.into_inner()));
    info!(
        url = ?record.url,
        status = ?record.status,
        outcome = record.outcome().as_label(),
        "health check recorded"
    );
    HttpResponse::Created().json(record)
}

/// # Check Statistics
///
/// Totals over the whole ledger at the moment of the call.
///
/// ## Example Response
/// ```json
/// { "total_checks": 3, "healthy": 2, "unhealthy": 1 }
/// ```
#[utoipa::path(
    get,
    path = "/api/stats",
    responses((status = 200, description = "Aggregate statistics", body = CheckStats)),
    tag = "Health Checks"
)]
#[get("/api/stats")]
pub async fn stats(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.stats())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_checks)
        .service(create_check)
        .service(stats);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use serde_json::json;

    #[actix_web::test]
    async fn test_created_record_is_returned() {
        let state = web::Data::new(AppState::new().unwrap());
        let app = test::init_service(App::new().app_data(state).configure(configure_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/checks")
            .set_json(json!({ "url": "http://a", "status": 200 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let record: HealthCheckRecord = test::read_body_json(resp).await;
        assert_eq!(record.url, Some(json!("http://a")));
        assert_eq!(record.status, Some(json!(200)));
        assert!(!record.timestamp.is_empty());
    }

    #[actix_web::test]
    async fn test_empty_ledger() {
        let state = web::Data::new(AppState::new().unwrap());
        let app = test::init_service(App::new().app_data(state).configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/api/checks").to_request();
        let checks: Vec<HealthCheckRecord> = test::call_and_read_body_json(&app, req).await;
        assert!(checks.is_empty());

        let req = test::TestRequest::get().uri("/api/stats").to_request();
        let summary: CheckStats = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            summary,
            CheckStats {
                total_checks: 0,
                healthy: 0,
                unhealthy: 0
            }
        );
    }
}
