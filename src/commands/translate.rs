//! Localize names and descriptions of imported agents

use colored::*;
use eyre::Result;
use std::path::PathBuf;

use crate::catalog::store::metadata_files;
use crate::catalog::translate::translate_metadata_file;
use crate::cli::Verbosity;
use crate::config::Config;

pub fn run(output: Option<PathBuf>, config: &Config, verbosity: Verbosity) -> Result<()> {
    let output = Config::expand_path(&output.unwrap_or_else(|| config.paths.output.clone()));
    if !output.is_dir() {
        eyre::bail!("Output directory not found: {}", output.display());
    }

    let files = metadata_files(&output)?;
    let mut translated = 0;
    let mut errors = 0;

    for path in files {
        match translate_metadata_file(&path, &config.import.source_locale, &config.import.locales) {
            Ok(record) => {
                translated += 1;
                if verbosity.is_verbose() {
                    let names: Vec<_> = record.name.iter().map(|(l, n)| format!("{}={}", l, n)).collect();
                    println!("{} {} [{}]", "✓".green(), record.id.cyan(), names.join(", "));
                }
            }
            Err(e) => {
                errors += 1;
                log::warn!("Failed to translate {}: {:#}", path.display(), e);
                eprintln!("{} {}: {}", "✗".red(), path.display(), e);
            }
        }
    }

    if !verbosity.is_quiet() {
        println!("Translation complete:");
        println!("  Translated: {}", translated.to_string().green());
        println!("  Errors:     {}", errors);
        println!("  Descriptions are copied from the source locale");
    }

    Ok(())
}
