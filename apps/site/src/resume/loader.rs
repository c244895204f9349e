use std::io;
use std::path::{Path, PathBuf};

use serde_json::error::Category;
use thiserror::Error;
use tracing::debug;

use crate::models::resume::ResumeData;
use crate::resume::source::ResumeSource;
use crate::resume::validation::{validate_resume, ValidationReport};

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Failed to read résumé data at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Résumé data at {} is not valid JSON: {message}", .path.display())]
    Syntax {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Résumé data at {} does not match the résumé shape: {message}", .path.display())]
    Shape {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Résumé data at {} failed validation: {}", .path.display(), .report.summary())]
    Invalid {
        path: PathBuf,
        report: ValidationReport,
    },
}

/// Reads, parses and validates the résumé document at `path`.
///
/// The record is returned exactly as decoded; optional fields that are
/// absent stay `None`.
pub async fn load_resume(
    source: &dyn ResumeSource,
    path: &Path,
) -> Result<ResumeData, ResumeError> {
    let raw = source
        .read_to_string(path)
        .await
        .map_err(|source| ResumeError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let resume = parse_resume(&raw, path)?;
    debug!(
        path = %path.display(),
        experience = resume.experience.len(),
        projects = resume.projects.len(),
        "Loaded résumé data"
    );
    Ok(resume)
}

/// Parse-then-validate step, separated from I/O. `path` is only used to
/// label errors.
pub fn parse_resume(raw: &str, path: &Path) -> Result<ResumeData, ResumeError> {
    let resume: ResumeData = serde_json::from_str(raw).map_err(|e| {
        let (line, column, message) = (e.line(), e.column(), e.to_string());
        let path = path.to_path_buf();
        match e.classify() {
            Category::Data => ResumeError::Shape {
                path,
                line,
                column,
                message,
            },
            Category::Syntax | Category::Eof | Category::Io => ResumeError::Syntax {
                path,
                line,
                column,
                message,
            },
        }
    })?;

    let report = validate_resume(&resume);
    if !report.passed {
        return Err(ResumeError::Invalid {
            path: path.to_path_buf(),
            report,
        });
    }

    Ok(resume)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::resume::source::{FsResumeSource, MemoryResumeSource};
    use crate::resume::validation::tests::sample_resume;

    const PATH: &str = "resume/resume-data.json";

    fn sample_json() -> Value {
        serde_json::to_value(sample_resume()).unwrap()
    }

    async fn load_value(value: &Value) -> Result<ResumeData, ResumeError> {
        let source = MemoryResumeSource::default().with_file(PATH, value.to_string());
        load_resume(&source, Path::new(PATH)).await
    }

    #[tokio::test]
    async fn test_load_returns_structurally_equal_record() {
        let loaded = load_value(&sample_json()).await.unwrap();
        assert_eq!(loaded, sample_resume());
    }

    #[test]
    fn test_uses_camel_case_keys() {
        let value = sample_json();
        assert!(value.get("summaryHighlights").is_some());
        assert!(value.get("summary_highlights").is_none());
    }

    #[tokio::test]
    async fn test_project_without_url_loads() {
        let mut value = sample_json();
        let project = value["projects"][0].as_object_mut().unwrap();
        project.remove("url");
        project.remove("technologies");

        let loaded = load_value(&value).await.unwrap();
        assert_eq!(loaded.projects[0].url, None);
        assert_eq!(loaded.projects[0].technologies, None);
        assert_eq!(loaded.projects[0].name, "dockerify-android");
    }

    #[tokio::test]
    async fn test_null_optionals_load_as_none() {
        let mut value = sample_json();
        value["experience"][0]["role"] = Value::Null;
        value["experience"][0]["location"] = Value::Null;
        value["projects"][0]["teamSize"] = Value::Null;

        let loaded = load_value(&value).await.unwrap();
        assert_eq!(loaded.experience[0].role, None);
        assert_eq!(loaded.experience[0].location, None);
        assert_eq!(loaded.projects[0].team_size, None);
    }

    #[tokio::test]
    async fn test_team_size_and_duration_are_read() {
        let mut value = sample_json();
        value["projects"][0]["teamSize"] = Value::from("4");
        value["projects"][0]["duration"] = Value::from("6 months");

        let loaded = load_value(&value).await.unwrap();
        assert_eq!(loaded.projects[0].team_size.as_deref(), Some("4"));
        assert_eq!(loaded.projects[0].duration.as_deref(), Some("6 months"));
    }

    #[tokio::test]
    async fn test_missing_required_field_is_shape_error() {
        let mut value = sample_json();
        value.as_object_mut().unwrap().remove("name");

        match load_value(&value).await {
            Err(ResumeError::Shape { message, .. }) => assert!(message.contains("name")),
            other => panic!("expected Shape error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_wrong_type_is_shape_error() {
        let mut value = sample_json();
        value["skills"][0]["items"] = serde_json::json!(["Java", "Kotlin"]);

        assert!(matches!(
            load_value(&value).await,
            Err(ResumeError::Shape { .. })
        ));
    }

    #[tokio::test]
    async fn test_truncated_json_is_syntax_error() {
        let text = sample_json().to_string();
        let cut = text.find("\"experience\"").unwrap();
        let source = MemoryResumeSource::default().with_file(PATH, &text[..cut]);

        assert!(matches!(
            load_resume(&source, Path::new(PATH)).await,
            Err(ResumeError::Syntax { .. })
        ));
    }

    #[tokio::test]
    async fn test_garbage_is_syntax_error() {
        let source = MemoryResumeSource::default().with_file(PATH, "name: Haroun");
        match load_resume(&source, Path::new(PATH)).await {
            Err(ResumeError::Syntax { line, column, .. }) => {
                assert_eq!(line, 1);
                assert!(column >= 1);
            }
            other => panic!("expected Syntax error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let source = MemoryResumeSource::default();
        let err = load_resume(&source, Path::new(PATH)).await.unwrap_err();
        match &err {
            ResumeError::Read { path, source } => {
                assert_eq!(path, Path::new(PATH));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Read error, got {other:?}"),
        }
        assert!(err.to_string().contains(PATH));
    }

    #[tokio::test]
    async fn test_blank_name_is_invalid() {
        let mut value = sample_json();
        value["name"] = Value::from("");

        match load_value(&value).await {
            Err(ResumeError::Invalid { report, .. }) => {
                assert!(!report.passed);
                assert_eq!(report.issues[0].field, "name");
            }
            other => panic!("expected Invalid error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_bundled_resume_data_loads_from_disk() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(PATH);
        let resume = load_resume(&FsResumeSource, &path).await.unwrap();
        assert_eq!(resume.name, "Haroun EL ALAMI");
        assert!(!resume.experience.is_empty());
    }
}
