//! Category shards: one document per curated category
//!
//! Membership comes only from the curated table in `taxonomy`. An id listed
//! there but missing from the registry is dropped without complaint, and a
//! category with no resolved members produces no file.

use eyre::{Context, Result};
use indexmap::IndexMap;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::record::Localized;
use super::registry::{Registry, RegistryEntry};
use super::store::write_json;
use super::taxonomy::{CuratedCategory, Labels};
use crate::config::PopularityConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShard {
    pub category: String,
    pub name: Localized,
    pub description: Localized,
    pub last_updated: String,
    pub total_agents: usize,
    pub agents: Vec<RegistryEntry>,
}

impl CategoryShard {
    pub fn file_name(&self) -> String {
        format!("{}.json", self.category)
    }
}

fn labels_to_map(labels: &Labels) -> Localized {
    labels
        .pairs()
        .iter()
        .map(|(locale, text)| (locale.to_string(), text.to_string()))
        .collect::<IndexMap<_, _>>()
}

/// Reject ranges the generator cannot sample from
pub fn check_ranges(popularity: &PopularityConfig) -> Result<()> {
    eyre::ensure!(
        popularity.rating_min <= popularity.rating_max,
        "rating_min ({}) is greater than rating_max ({})",
        popularity.rating_min,
        popularity.rating_max
    );
    eyre::ensure!(
        popularity.downloads_min <= popularity.downloads_max,
        "downloads_min ({}) is greater than downloads_max ({})",
        popularity.downloads_min,
        popularity.downloads_max
    );
    Ok(())
}

/// Replace zero rating/downloads with random placeholders.
///
/// Rating is rounded to one decimal. Non-zero values are left alone.
pub fn fill_placeholders<R: Rng>(entry: &mut RegistryEntry, popularity: &PopularityConfig, rng: &mut R) {
    if entry.rating == 0.0 {
        let rating: f64 = rng.random_range(popularity.rating_min..=popularity.rating_max);
        entry.rating = (rating * 10.0).round() / 10.0;
    }
    if entry.downloads == 0 {
        entry.downloads = rng.random_range(popularity.downloads_min..=popularity.downloads_max);
    }
}

/// Resolve curated membership against the registry.
///
/// Placeholders are written into `registry` itself, so an agent listed under
/// two categories shows the same numbers in both. Members are sorted by
/// downloads, highest first; ties keep table order.
pub fn build_shards<R: Rng>(
    registry: &mut Registry,
    categories: &[CuratedCategory],
    popularity: &PopularityConfig,
    rng: &mut R,
    timestamp: &str,
) -> Vec<CategoryShard> {
    let mut shards = Vec::new();

    for category in categories {
        let mut members = Vec::new();

        for id in category.agents {
            match registry.agents.get_mut(*id) {
                Some(entry) => {
                    fill_placeholders(entry, popularity, rng);
                    members.push(entry.clone());
                }
                None => log::debug!("Category {}: {} not in registry", category.id, id),
            }
        }

        if members.is_empty() {
            log::info!("Category {} has no agents in the registry, skipping", category.id);
            continue;
        }

        members.sort_by(|a, b| b.downloads.cmp(&a.downloads));

        shards.push(CategoryShard {
            category: category.id.to_string(),
            name: labels_to_map(&category.name),
            description: labels_to_map(&category.description),
            last_updated: timestamp.to_string(),
            total_agents: members.len(),
            agents: members,
        });
    }

    shards
}

/// Write each shard to `<dir>/<category>.json`
pub fn write_shards(shards: &[CategoryShard], dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create categories directory: {}", dir.display()))?;

    let mut written = Vec::new();
    for shard in shards {
        let path = dir.join(shard.file_name());
        write_json(&path, shard)?;
        log::info!("Wrote {} with {} agents", path.display(), shard.total_agents);
        written.push(path);
    }

    Ok(written)
}
