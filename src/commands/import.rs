//! Import agent profiles into per-agent records and a registry

use colored::*;
use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::record::AgentRecord;
use crate::catalog::registry::Registry;
use crate::catalog::{ImportedAgent, SkipReason, convert_document, store, timestamp};
use crate::cli::Verbosity;
use crate::config::{Config, ImportConfig};
use crate::document::{RawDocument, discover_documents};

/// Resolved locations for one import run
#[derive(Debug, Clone)]
pub struct ImportPaths {
    pub source: PathBuf,
    pub output: PathBuf,
    pub registry: PathBuf,
}

impl ImportPaths {
    pub fn resolve(
        source: Option<PathBuf>,
        output: Option<PathBuf>,
        registry: Option<PathBuf>,
        config: &Config,
    ) -> Self {
        Self {
            source: Config::expand_path(&source.unwrap_or_else(|| config.paths.source.clone())),
            output: Config::expand_path(&output.unwrap_or_else(|| config.paths.output.clone())),
            registry: Config::expand_path(&registry.unwrap_or_else(|| config.paths.registry.clone())),
        }
    }
}

/// Outcome of an import run
#[derive(Debug)]
pub struct ImportSummary {
    pub registry: Registry,
    pub failed: Vec<(PathBuf, SkipReason)>,
}

pub fn run(
    source: Option<PathBuf>,
    output: Option<PathBuf>,
    registry: Option<PathBuf>,
    config: &Config,
    verbosity: Verbosity,
) -> Result<()> {
    let paths = ImportPaths::resolve(source, output, registry, config);
    let summary = execute(&paths, &config.import, verbosity)?;

    if !verbosity.is_quiet() {
        println!();
        println!("{}", "Import complete".bold());
        println!("  Converted: {} agent(s)", summary.registry.total_agents.to_string().green());
        if !summary.failed.is_empty() {
            println!("  Failed:    {} file(s)", summary.failed.len().to_string().red());
        }
        println!("  Output:    {}", paths.output.display());
        println!("  Registry:  {}", paths.registry.display());
    }

    Ok(())
}

/// Read one document and convert it, mapping read errors to a skip
fn convert_path(path: &Path, settings: &ImportConfig, ts: &str) -> Result<ImportedAgent, SkipReason> {
    let doc = RawDocument::read(path).map_err(|e| {
        log::warn!("{:#}", e);
        SkipReason::Unreadable
    })?;
    convert_document(&doc, settings, ts)
}

/// Run the import pipeline and write every artifact.
///
/// A missing source directory fails before anything is written. Per-document
/// problems are skipped; write failures abort the run.
pub fn execute(paths: &ImportPaths, settings: &ImportConfig, verbosity: Verbosity) -> Result<ImportSummary> {
    if !paths.source.is_dir() {
        eyre::bail!("Source directory not found: {}", paths.source.display());
    }

    let documents = discover_documents(&paths.source, &settings.skip_files)?;
    log::info!("Found {} document(s) in {}", documents.len(), paths.source.display());

    fs::create_dir_all(&paths.output)
        .with_context(|| format!("Failed to create output directory: {}", paths.output.display()))?;

    let ts = timestamp();
    let mut records: Vec<AgentRecord> = Vec::new();
    let mut failed = Vec::new();

    for path in documents {
        if verbosity.is_verbose() {
            println!("{} Processing: {}", "→".blue(), path.display());
        }

        match convert_path(&path, settings, &ts) {
            Ok(agent) => {
                let dir = store::write_agent(&paths.output, &settings.collection, &settings.agent_file, &agent)?;
                log::debug!("Wrote {} to {}", agent.record.id, dir.display());

                if !verbosity.is_quiet() {
                    println!("{} {} ({})", "✓".green(), agent.record.id.cyan(), agent.record.category);
                }
                records.push(agent.record);
            }
            Err(reason) => {
                log::warn!("Skipping {}: {}", path.display(), reason);
                eprintln!("{} {} ({})", "✗".red(), path.display(), reason);
                failed.push((path, reason));
            }
        }
    }

    let registry = Registry::from_records(&records, &ts);
    registry.write(&paths.registry)?;

    Ok(ImportSummary { registry, failed })
}
