use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Liveness check for the résumé site; touches neither the data file nor `static/`.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-site"
    }))
}
