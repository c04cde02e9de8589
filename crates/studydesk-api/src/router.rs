//! Router configuration and server setup.

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ApiConfig;
use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        // Home
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        // Tasks
        .route("/get_tasks", get(handlers::list_tasks))
        .route("/add_task", post(handlers::add_task))
        .route("/update_task", post(handlers::update_task))
        .route("/delete_task", post(handlers::delete_task))
        // Courses
        .route("/get_courses", get(handlers::list_courses))
        .route("/add_course", post(handlers::add_course))
        .route("/delete_course", post(handlers::delete_course))
        // Feedback
        .route("/get_feedback", get(handlers::list_feedback))
        .route("/submit_feedback", post(handlers::submit_feedback))
        .route("/add_feedback", post(handlers::add_feedback))
        .route("/delete_feedback", post(handlers::delete_feedback))
        // AI
        .route("/generate_suggestions", get(handlers::generate_suggestions))
        .route("/ai/courses", get(handlers::ai_courses))
        .route("/ai/feedback", get(handlers::ai_feedback))
        // Apply middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(origins)
}

/// Starts the API server.
pub async fn serve(config: ApiConfig, state: AppState) -> Result<(), std::io::Error> {
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API server listening on {}", addr);
    axum::serve(listener, create_router(state)).await
}
