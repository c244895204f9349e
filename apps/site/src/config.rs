use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::assets::picker::{DEFAULT_FALLBACK_PDF, DEFAULT_PDF_PREFIX};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so an empty environment serves the
/// bundled `resume/` and `static/` directories on port 8080.
#[derive(Debug, Clone)]
pub struct Config {
    pub resume_data_path: PathBuf,
    pub static_dir: PathBuf,
    pub pdf_prefix: String,
    pub fallback_pdf: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            resume_data_path: or("RESUME_DATA_PATH", "resume/resume-data.json").into(),
            static_dir: or("STATIC_DIR", "static").into(),
            pdf_prefix: or("CV_PDF_PREFIX", DEFAULT_PDF_PREFIX),
            fallback_pdf: or("CV_FALLBACK_PDF", DEFAULT_FALLBACK_PDF),
            port: or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: or("RUST_LOG", "info"),
        })
    }
}
