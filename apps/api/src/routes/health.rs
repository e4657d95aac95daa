use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness blob listing the available endpoints, for quick manual checks.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "status": "API is running",
        "endpoints": [
            "/api/analyze",
            "/api/methodologies",
            "/api/methodologies/:id",
            "/api/examples/:id"
        ]
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "salescoach-api"
    }))
}
