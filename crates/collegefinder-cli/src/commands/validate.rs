//! The `collegefinder validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use collegefinder_core::parser::{
    parse_catalog, parse_quiz_str, validate_catalog, validate_quiz, ValidationWarning,
};

pub fn execute(catalog_path: Option<PathBuf>, quiz_path: Option<PathBuf>) -> Result<()> {
    let check_builtin = catalog_path.is_none() && quiz_path.is_none();
    let mut total_warnings = 0;

    let catalog = match catalog_path {
        Some(path) => Some(parse_catalog(&path)?),
        None if check_builtin => Some(collegefinder_core::builtin::builtin_catalog()?),
        None => None,
    };
    if let Some(catalog) = catalog {
        println!("Catalog: {} ({} colleges)", catalog.name, catalog.len());
        total_warnings += report(&validate_catalog(&catalog));
    }

    let quiz = match quiz_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read quiz file: {}", path.display()))?;
            Some(parse_quiz_str(&content, &path)?)
        }
        None if check_builtin => Some(collegefinder_core::builtin::builtin_quiz()?),
        None => None,
    };
    if let Some(quiz) = quiz {
        println!("Quiz: {} questions", quiz.len());
        total_warnings += report(&validate_quiz(&quiz));
    }

    if total_warnings == 0 {
        println!("All files valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}

fn report(warnings: &[ValidationWarning]) -> usize {
    for w in warnings {
        let prefix = w
            .item
            .as_ref()
            .map(|item| format!("  [{item}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }
    warnings.len()
}
