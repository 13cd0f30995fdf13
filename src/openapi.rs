use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Documents every HTTP operation of the monitoring service. Served by
/// Swagger UI at `/swagger-ui/` with the raw document at
/// `/api-docs/openapi.json`.
///
/// # Endpoints
/// - Service: `GET /`, `GET /health`, `GET /api/uptime`, `GET /metrics`
/// - Health Checks: `GET /api/checks`, `POST /api/checks`, `GET /api/stats`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::service::index,
        crate::routes::service::health,
        crate::routes::service::uptime,
        crate::routes::service::metrics,
        crate::routes::checks::list_checks,
        crate::routes::checks::create_check,
        crate::routes::checks::stats,
    ),
    components(
        schemas(
            crate::models::AppInfo,
            crate::models::HealthResponse,
            crate::models::UptimeResponse,
            crate::models::HealthCheckRecord,
            crate::models::NewHealthCheck,
            crate::models::CheckStats
        )
    ),
    tags(
        (name = "Service", description = "Service descriptor, liveness, uptime and metrics"),
        (name = "Health Checks", description = "Recording and summarising reported health checks")
    ),
    info(
        description = "In-memory ledger of externally reported health checks with derived statistics",
        title = "DevOps Monitoring API",
        version = "1.0.0",
    )
)]
pub struct ApiDoc;
