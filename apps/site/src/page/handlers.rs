use askama::Template;
use axum::{extract::State, response::Html, Json};

use crate::errors::AppError;
use crate::page::template::ResumePage;
use crate::page::{load_page_data, PageData};
use crate::state::AppState;

/// GET /
pub async fn handle_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let data = load_page_data(&state).await?;
    let html = ResumePage::new(&data, &state.naming).render()?;
    Ok(Html(html))
}

/// GET /api/v1/resume
pub async fn handle_page_data(State(state): State<AppState>) -> Result<Json<PageData>, AppError> {
    Ok(Json(load_page_data(&state).await?))
}
