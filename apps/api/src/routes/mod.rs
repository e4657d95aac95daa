pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::coaching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/analyze", post(handlers::handle_analyze))
        .route(
            "/api/methodologies",
            get(handlers::handle_list_methodologies),
        )
        .route(
            "/api/methodologies/:id",
            get(handlers::handle_get_methodology),
        )
        .route("/api/examples/:id", get(handlers::handle_get_example))
        .with_state(state)
}
