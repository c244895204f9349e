pub mod handlers;
pub mod template;

use serde::Serialize;

use crate::assets::latest_pdf;
use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::resume::load_resume;
use crate::state::AppState;

/// Everything the résumé page needs, as handed to the template and the JSON API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub resume: ResumeData,
    pub pdf_filename: String,
}

/// Loads the résumé, then picks the download. Nothing is cached between calls.
pub async fn load_page_data(state: &AppState) -> Result<PageData, AppError> {
    let resume = load_resume(state.resumes.as_ref(), &state.config.resume_data_path).await?;
    let pdf_filename =
        latest_pdf(state.assets.as_ref(), &state.config.static_dir, &state.naming).await?;

    Ok(PageData {
        resume,
        pdf_filename,
    })
}
