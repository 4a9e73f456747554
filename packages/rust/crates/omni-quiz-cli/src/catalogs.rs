//! Catalog menu: which `.people` files can be matched against.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use omni_quiz::Catalog;
use omni_quiz::loader::load_profiles;

use crate::settings::QuizSettings;

const CATALOG_EXTENSION: &str = "people";

/// A menu entry pointing at a catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSource {
    pub name: String,
    pub path: PathBuf,
}

impl CatalogSource {
    /// Read and parse the catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or has a malformed line.
    pub fn load(&self) -> Result<Catalog> {
        let profiles = load_profiles(&self.path)
            .with_context(|| format!("failed to load catalog {}", self.name))?;
        Ok(Catalog::new(self.name.clone(), profiles))
    }
}

/// Catalog menu from settings, or discovered `*.people` files sorted by name.
///
/// # Errors
///
/// Returns an error if discovery is needed and `data_dir` cannot be listed.
pub fn resolve_catalogs(settings: &QuizSettings, data_dir: &Path) -> Result<Vec<CatalogSource>> {
    if let Some(entries) = &settings.catalogs {
        return Ok(entries
            .iter()
            .map(|entry| CatalogSource {
                name: entry.name.clone(),
                path: if entry.file.is_absolute() {
                    entry.file.clone()
                } else {
                    data_dir.join(&entry.file)
                },
            })
            .collect());
    }
    discover_catalogs(data_dir)
}

/// Every `*.people` file in `data_dir`, named by file stem, sorted by name.
///
/// # Errors
///
/// Returns an error if `data_dir` cannot be listed.
pub fn discover_catalogs(data_dir: &Path) -> Result<Vec<CatalogSource>> {
    let entries = std::fs::read_dir(data_dir)
        .with_context(|| format!("failed to list data directory {}", data_dir.display()))?;

    let mut sources = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(CATALOG_EXTENSION) {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        sources.push(CatalogSource {
            name: name.to_string(),
            path: path.clone(),
        });
    }
    sources.sort_by(|a, b| a.name.cmp(&b.name));
    if sources.is_empty() {
        tracing::warn!(dir = %data_dir.display(), "no .people catalogs found");
    } else {
        tracing::debug!(count = sources.len(), dir = %data_dir.display(), "discovered catalogs");
    }
    Ok(sources)
}

/// Find a catalog by name, ignoring ASCII case.
#[must_use]
pub fn find_catalog<'a>(sources: &'a [CatalogSource], name: &str) -> Option<&'a CatalogSource> {
    sources
        .iter()
        .find(|source| source.name.eq_ignore_ascii_case(name.trim()))
}
