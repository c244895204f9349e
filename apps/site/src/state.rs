use std::sync::Arc;

use anyhow::{Context, Result};

use crate::assets::{AssetSource, FsAssetSource, PdfNaming};
use crate::config::Config;
use crate::resume::{FsResumeSource, ResumeSource};

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable; each request does its own read and directory listing.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub naming: PdfNaming,
    pub resumes: Arc<dyn ResumeSource>,
    pub assets: Arc<dyn AssetSource>,
}

impl AppState {
    /// State backed by the real filesystem.
    pub fn from_config(config: Config) -> Result<Self> {
        Self::with_sources(config, Arc::new(FsResumeSource), Arc::new(FsAssetSource))
    }

    pub fn with_sources(
        config: Config,
        resumes: Arc<dyn ResumeSource>,
        assets: Arc<dyn AssetSource>,
    ) -> Result<Self> {
        let naming = PdfNaming::new(&config.pdf_prefix, &config.fallback_pdf)
            .with_context(|| format!("Invalid PDF prefix '{}'", config.pdf_prefix))?;
        Ok(AppState {
            config,
            naming,
            resumes,
            assets,
        })
    }
}
