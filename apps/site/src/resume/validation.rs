use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeData;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Path to the offending field, e.g. `experience[2].company`.
    pub field: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub passed: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// `field: reason` pairs joined with `; `, for log lines and error messages.
    pub fn summary(&self) -> String {
        self.issues
            .iter()
            .map(|i| format!("{}: {}", i.field, i.reason))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Checks the fields a page cannot render without.
///
/// The typed parse already guarantees every required key is present; this
/// catches values that are present but blank. All violations are collected.
pub fn validate_resume(resume: &ResumeData) -> ValidationReport {
    let mut issues = Vec::new();

    require(&mut issues, "name".to_string(), &resume.name);
    require(&mut issues, "title".to_string(), &resume.title);

    for (i, skill) in resume.skills.iter().enumerate() {
        require(&mut issues, format!("skills[{i}].category"), &skill.category);
    }
    for (i, exp) in resume.experience.iter().enumerate() {
        require(&mut issues, format!("experience[{i}].company"), &exp.company);
        require(&mut issues, format!("experience[{i}].period"), &exp.period);
    }
    for (i, project) in resume.projects.iter().enumerate() {
        require(&mut issues, format!("projects[{i}].name"), &project.name);
    }
    for (i, edu) in resume.education.iter().enumerate() {
        require(&mut issues, format!("education[{i}].degree"), &edu.degree);
        require(&mut issues, format!("education[{i}].school"), &edu.school);
    }
    for (i, lang) in resume.languages.iter().enumerate() {
        require(&mut issues, format!("languages[{i}].language"), &lang.language);
    }

    ValidationReport {
        passed: issues.is_empty(),
        issues,
    }
}

fn require(issues: &mut Vec<ValidationIssue>, field: String, value: &str) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue {
            field,
            reason: "must not be blank".to_string(),
        });
    }
}
