//! On-disk layout for imported agents
//!
//! ```text
//! <output>/<collection>/<id>/metadata.json   full record
//! <output>/<collection>/<id>/agent.md        verbatim source copy
//! ```

use eyre::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use super::ImportedAgent;

pub const METADATA_FILE: &str = "metadata.json";

/// Write `value` as pretty JSON, creating parent directories
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Directory holding one agent's artifacts
pub fn agent_dir(output_root: &Path, collection: &str, id: &str) -> PathBuf {
    output_root.join(collection).join(id)
}

/// Write metadata and the source copy for one agent, replacing any previous files
pub fn write_agent(output_root: &Path, collection: &str, agent_file: &str, agent: &ImportedAgent) -> Result<PathBuf> {
    let dir = agent_dir(output_root, collection, &agent.record.id);
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create agent directory: {}", dir.display()))?;

    write_json(&dir.join(METADATA_FILE), &agent.record)?;

    let source_copy = dir.join(agent_file);
    fs::write(&source_copy, &agent.content)
        .with_context(|| format!("Failed to write agent file: {}", source_copy.display()))?;

    Ok(dir)
}

/// All `<root>/<author>/<agent>/metadata.json` files, sorted
pub fn metadata_files(output_root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if !output_root.exists() {
        return Ok(files);
    }

    for author in fs::read_dir(output_root)
        .with_context(|| format!("Failed to read output directory: {}", output_root.display()))?
    {
        let author = author?.path();
        if !author.is_dir() {
            continue;
        }

        for agent in fs::read_dir(&author).with_context(|| format!("Failed to read {}", author.display()))? {
            let agent = agent?.path();
            if agent.is_dir() {
                files.push(agent.join(METADATA_FILE));
            }
        }
    }

    files.sort();
    Ok(files)
}
