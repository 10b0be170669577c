//! TOML catalog, quiz, and scholarship parser.
//!
//! Loads catalogs from TOML files and validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Catalog, College, Scholarship};
use crate::quiz::{Question, Quiz};

/// Intermediate TOML structure for catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    #[serde(default)]
    catalog: TomlCatalogHeader,
    #[serde(default)]
    colleges: Vec<College>,
}

#[derive(Debug, Default, Deserialize)]
struct TomlCatalogHeader {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    #[serde(default)]
    questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
struct TomlScholarshipFile {
    #[serde(default)]
    scholarships: Vec<Scholarship>,
}

/// Parse a single TOML file into a `Catalog`.
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a `Catalog`.
///
/// The `[catalog]` header is optional. Without a name, the file stem is used.
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<Catalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let name = if parsed.catalog.name.trim().is_empty() {
        source_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        parsed.catalog.name
    };

    Ok(Catalog {
        name,
        description: parsed.catalog.description,
        colleges: parsed.colleges,
    })
}

/// Parse a TOML string into a `Quiz`.
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<Quiz> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse quiz TOML: {}", source_path.display()))?;
    Ok(Quiz {
        questions: parsed.questions,
    })
}

/// Parse a TOML string into a scholarship list.
pub fn parse_scholarships_str(content: &str, source_path: &Path) -> Result<Vec<Scholarship>> {
    let parsed: TomlScholarshipFile = toml::from_str(content).with_context(|| {
        format!(
            "failed to parse scholarship TOML: {}",
            source_path.display()
        )
    })?;
    Ok(parsed.scholarships)
}

/// A warning from catalog or quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The college ID or question number (if applicable).
    pub item: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn for_item(item: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            item: Some(item.into()),
            message: message.into(),
        }
    }
}

/// Validate a catalog for common issues.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if catalog.colleges.is_empty() {
        warnings.push(ValidationWarning {
            item: None,
            message: "catalog has no colleges".into(),
        });
    }

    let mut seen_ids = HashSet::new();
    for college in &catalog.colleges {
        if college.id.trim().is_empty() {
            warnings.push(ValidationWarning::for_item(&college.name, "id is empty"));
        } else if !seen_ids.insert(&college.id) {
            warnings.push(ValidationWarning::for_item(
                &college.id,
                format!("duplicate college ID: {}", college.id),
            ));
        }
    }

    for college in &catalog.colleges {
        if college.name.trim().is_empty() {
            warnings.push(ValidationWarning::for_item(&college.id, "name is empty"));
        }
        if college.nirf_rank == 0 {
            warnings.push(ValidationWarning::for_item(
                &college.id,
                "nirf_rank must be a positive integer",
            ));
        }
        if !(0.0..=5.0).contains(&college.rating) {
            warnings.push(ValidationWarning::for_item(
                &college.id,
                format!("rating {} is outside 0-5", college.rating),
            ));
        }
        if college.fees.total < college.fees.annual {
            warnings.push(ValidationWarning::for_item(
                &college.id,
                "total fee is lower than the annual fee",
            ));
        }
        if college.courses.is_empty() {
            warnings.push(ValidationWarning::for_item(&college.id, "no courses listed"));
        }
    }

    warnings
}

/// Validate a quiz for common issues.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if quiz.is_empty() {
        warnings.push(ValidationWarning {
            item: None,
            message: "quiz has no questions".into(),
        });
    }

    for (i, question) in quiz.questions.iter().enumerate() {
        let label = format!("question {}", i + 1);
        if question.options.is_empty() {
            warnings.push(ValidationWarning::for_item(&label, "question has no options"));
        }
        if question.options.iter().any(|o| o.weight == 0) {
            warnings.push(ValidationWarning::for_item(
                &label,
                "option with zero weight never affects the result",
            ));
        }
    }

    warnings
}
