pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PagePress API",
        version = "0.1.0",
        description = "Generates, deploys and patches LLM-built static pages"
    ),
    paths(routes::health_check, routes::handle_task),
    components(schemas(
        routes::HealthResponse,
        routes::TaskAck,
        pagepress_core::TaskRequest,
        pagepress_core::Deployment,
    )),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "tasks", description = "Task intake endpoint"),
    )
)]
pub struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api/openapi.json", ApiDoc::openapi()))
        .route("/health", get(routes::health_check))
        .route("/api/tasks/handle", post(routes::handle_task))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
