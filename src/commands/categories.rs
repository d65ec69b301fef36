//! Generate per-category index files from the registry

use colored::*;
use eyre::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

use crate::catalog::registry::Registry;
use crate::catalog::shard::{CategoryShard, build_shards, check_ranges, write_shards};
use crate::catalog::taxonomy::CURATED_CATEGORIES;
use crate::catalog::timestamp;
use crate::cli::Verbosity;
use crate::config::{Config, PopularityConfig};

pub fn run(
    registry: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    seed: Option<u64>,
    config: &Config,
    verbosity: Verbosity,
) -> Result<()> {
    let registry_path = Config::expand_path(&registry.unwrap_or_else(|| config.paths.registry.clone()));
    let out_dir = Config::expand_path(&out_dir.unwrap_or_else(|| config.paths.categories.clone()));

    let shards = execute(&registry_path, &out_dir, seed, &config.popularity, verbosity)?;

    if !verbosity.is_quiet() {
        let total: usize = shards.iter().map(|s| s.total_agents).sum();
        println!();
        println!("Generated category index files for {} agents", total.to_string().green());
        println!("Category breakdown:");
        for shard in &shards {
            println!("  {}: {} agents", shard.category.cyan(), shard.total_agents);
        }
    }

    Ok(())
}

/// Load the registry, build the shards and write them to `out_dir`.
///
/// `seed` overrides the configured seed; with neither, placeholders come
/// from OS entropy and differ between runs.
pub fn execute(
    registry_path: &Path,
    out_dir: &Path,
    seed: Option<u64>,
    popularity: &PopularityConfig,
    verbosity: Verbosity,
) -> Result<Vec<CategoryShard>> {
    check_ranges(popularity)?;

    let mut registry = Registry::load(registry_path)
        .with_context(|| format!("Failed to load registry {} (run `agentreg import` first)", registry_path.display()))?;
    log::info!("Loaded registry with {} agents", registry.total_agents);

    let mut rng = match seed.or(popularity.seed) {
        Some(seed) => {
            log::info!("Using placeholder seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let shards = build_shards(&mut registry, CURATED_CATEGORIES, popularity, &mut rng, &timestamp());
    let written = write_shards(&shards, out_dir)?;

    if !verbosity.is_quiet() {
        for (shard, path) in shards.iter().zip(&written) {
            println!("{} Generated {} with {} agents", "✓".green(), path.display(), shard.total_agents);
        }
    }

    Ok(shards)
}
