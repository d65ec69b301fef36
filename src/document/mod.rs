//! Source document discovery and reading
//!
//! Agent profiles are markdown files sitting directly in the source directory.

use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub mod header;

/// An agent profile as read from disk
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub path: PathBuf,
    pub content: String,
}

impl RawDocument {
    pub fn read(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read document: {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }
}

/// List the `*.md` files directly inside `source_dir`, sorted by file name.
///
/// Files whose name appears in `skip_files` are left out. Subdirectories are
/// not descended into.
pub fn discover_documents(source_dir: &Path, skip_files: &[String]) -> Result<Vec<PathBuf>> {
    if !source_dir.is_dir() {
        eyre::bail!("Source directory not found: {}", source_dir.display());
    }

    let mut found = Vec::new();

    for entry in WalkDir::new(source_dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to read source directory: {}", source_dir.display()))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().map(|e| e != "md").unwrap_or(true) {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if skip_files.contains(&file_name) {
            log::debug!("Skipping excluded file: {}", path.display());
            continue;
        }

        found.push(path.to_path_buf());
    }

    Ok(found)
}
