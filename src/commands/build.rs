//! Full rebuild: import, then category files

use eyre::Result;

use super::categories;
use super::import::{self, ImportPaths};
use crate::cli::Verbosity;
use crate::config::Config;

pub fn run(seed: Option<u64>, config: &Config, verbosity: Verbosity) -> Result<()> {
    let paths = ImportPaths::resolve(None, None, None, config);
    let summary = import::execute(&paths, &config.import, verbosity)?;

    let categories_dir = Config::expand_path(&config.paths.categories);
    let shards = categories::execute(&paths.registry, &categories_dir, seed, &config.popularity, verbosity)?;

    if !verbosity.is_quiet() {
        println!();
        println!("Imported {} agent(s), skipped {}", summary.registry.total_agents, summary.failed.len());
        println!("Wrote {} category file(s) to {}", shards.len(), categories_dir.display());
    }

    Ok(())
}
