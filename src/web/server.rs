use axum::{routing::get, routing::post, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::controller::GenerationClient;

use super::api::constellation as api_handlers;
use super::api_doc::ApiDoc;
use super::config::Config;
use super::state::AppState;
use super::ui::handlers as ui_handlers;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // UI routes
        .route("/", get(ui_handlers::index))
        .route("/build", post(ui_handlers::build))
        .route("/diagram.svg", get(ui_handlers::diagram))
        // JSON API
        .route("/api/state", get(api_handlers::get_state))
        .route("/api/build", post(api_handlers::build))
        .route("/api/service/health", get(api_handlers::service_health))
        // Static files
        .nest_service("/static", ServeDir::new(&state.config.web.static_dir))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();
    let client = GenerationClient::new(&config.service.url, config.service.timeout)
        .map_err(std::io::Error::other)?;

    log::info!(
        "Using generation service at {} (timeout: {})",
        client.base_url(),
        config
            .service
            .timeout
            .map(|t| humantime::format_duration(t).to_string())
            .unwrap_or_else(|| "none".to_string())
    );

    let app = router(AppState::new(config, client));

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}
