use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::assets::source::AssetSource;

pub const DEFAULT_PDF_PREFIX: &str = "Haroun_EL_ALAMI_CV";
pub const DEFAULT_FALLBACK_PDF: &str = "Haroun_Resume.pdf";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Failed to list static assets in {}: {source}", .path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Naming convention for versioned PDF exports: `<prefix>-YYYYMMDD.pdf`.
#[derive(Debug, Clone)]
pub struct PdfNaming {
    prefix: String,
    fallback: String,
    pattern: Regex,
}

impl PdfNaming {
    pub fn new(prefix: &str, fallback: &str) -> Result<Self, regex::Error> {
        // `\d` would also accept non-ASCII digits.
        let pattern = Regex::new(&format!(r"^{}-([0-9]{{8}})\.pdf$", regex::escape(prefix)))?;
        Ok(Self {
            prefix: prefix.to_string(),
            fallback: fallback.to_string(),
            pattern,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn matches(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }

    fn stamp<'a>(&self, name: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(name)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }
}

/// A versioned PDF filename and the date stamp embedded in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfVersion {
    pub filename: String,
    pub stamp: String,
    /// Calendar date of the stamp, if it reads as one. Informational only;
    /// selection always uses the filename order.
    pub date: Option<NaiveDate>,
}

impl PdfVersion {
    pub fn parse(name: &str, naming: &PdfNaming) -> Option<Self> {
        let stamp = naming.stamp(name)?;
        let date = NaiveDate::parse_from_str(stamp, "%Y%m%d")
            .or_else(|_| NaiveDate::parse_from_str(stamp, "%d%m%Y"))
            .ok();
        Some(Self {
            filename: name.to_string(),
            stamp: stamp.to_string(),
            date,
        })
    }
}

/// Picks the lexicographically greatest matching name, or the fallback.
///
/// With fixed-width zero-padded `YYYYMMDD` stamps this is the most recent
/// export.
pub fn pick_latest<I, S>(names: I, naming: &PdfNaming) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter(|n| naming.matches(n.as_ref()))
        .map(|n| n.as_ref().to_string())
        .max()
        .unwrap_or_else(|| naming.fallback.clone())
}

/// Lists `dir` and returns the filename to offer for download.
///
/// Only a listing failure is an error; an empty or non-matching directory
/// yields the fallback name.
pub async fn latest_pdf(
    source: &dyn AssetSource,
    dir: &Path,
    naming: &PdfNaming,
) -> Result<String, AssetError> {
    let names = source.list(dir).await.map_err(|source| AssetError::List {
        path: dir.to_path_buf(),
        source,
    })?;

    let chosen = pick_latest(&names, naming);
    if chosen == naming.fallback {
        debug!(dir = %dir.display(), fallback = %chosen, "No versioned PDF found");
    } else {
        debug!(dir = %dir.display(), pdf = %chosen, "Selected versioned PDF");
    }
    Ok(chosen)
}
