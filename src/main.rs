use actix_web::{App, HttpServer, web::Data};
use devops_monitor::config::ServerConfig;
use devops_monitor::middleware::RequestMetrics;
use devops_monitor::openapi::ApiDoc;
use devops_monitor::state::AppState;
use devops_monitor::telemetry;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// DevOps Monitoring Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - The health check ledger and statistics endpoints
/// - Prometheus metrics at `/metrics`, fed by the request metrics middleware
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
///
/// # Configuration
/// - Server binds to `0.0.0.0:5000` by default (`APP_HOST`, `APP_PORT`)
/// - `APP_DEBUG=true` enables debug logging
/// - Environment variables loaded from `.env` file (if present)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let config = ServerConfig::from_env()?;
    telemetry::init(&config);

    // One ledger shared by every worker
    let state = Data::new(AppState::new()?);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        debug = config.debug,
        "starting monitoring service"
    );

    let server = HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(RequestMetrics::new(state.metrics().clone()))
            .app_data(state.clone())
            .configure(devops_monitor::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    });

    let server = match config.workers {
        Some(workers) => server.workers(workers),
        None => server,
    };

    server.bind(config.bind_addr())?.run().await
}
