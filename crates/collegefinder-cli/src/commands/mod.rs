pub mod bookmark;
pub mod compare;
pub mod dashboard;
pub mod init;
pub mod quiz;
pub mod scholarships;
pub mod search;
pub mod show;
pub mod validate;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use collegefinder_core::model::Catalog;
use collegefinder_core::traits::KeyValueStorage;
use collegefinder_services::{CollegefinderConfig, FileStorage};

/// Config from `--config`, or the default search locations.
pub(crate) fn load_config(path: Option<PathBuf>) -> Result<CollegefinderConfig> {
    collegefinder_services::load_config_from(path.as_deref())
}

/// The configured catalog file, or the built-in catalog.
pub(crate) fn load_catalog(config: &CollegefinderConfig) -> Result<Catalog> {
    let catalog = match &config.catalog {
        Some(path) => collegefinder_core::parser::parse_catalog(path)?,
        None => collegefinder_core::builtin::builtin_catalog()?,
    };
    tracing::debug!(catalog = %catalog.name, colleges = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// File-backed storage under the configured storage directory.
pub(crate) fn open_storage(config: &CollegefinderConfig) -> Arc<dyn KeyValueStorage> {
    Arc::new(FileStorage::new(config.storage_dir.clone()))
}

/// `450000` → `₹450,000`.
pub(crate) fn rupees(amount: u64) -> String {
    format!("₹{}", collegefinder_core::compare::group_thousands(amount))
}
