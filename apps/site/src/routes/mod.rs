pub mod health;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::page::handlers;
use crate::state::AppState;

/// `/` renders the résumé; any path not routed here is looked up in the
/// static directory, which is where the PDF download link points.
pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(handlers::handle_page))
        .route("/health", get(health::health_handler))
        .route("/api/v1/resume", get(handlers::handle_page_data))
        .fallback_service(static_files)
        .with_state(state)
}
