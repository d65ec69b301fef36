//! Registry document: every imported agent in one file
//!
//! The registry is written in full on every import; nothing is merged with
//! a previous run.

use eyre::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::classify::Category;
use super::record::{AgentRecord, Compatibility, Localized};
use super::store::{read_json, write_json};
use super::taxonomy::REGISTRY_CATEGORIES;

/// Registry format version
pub const REGISTRY_VERSION: &str = "1.0.0";

/// Number of ids previewed in `stats.topAgents`
pub const TOP_AGENTS_LIMIT: usize = 10;

/// Summary of one agent as listed in the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntry {
    pub id: String,
    pub name: Localized,
    pub description: Localized,
    pub author: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub latest: String,
    pub versions: Vec<String>,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub rating_count: u64,
    pub license: String,
    pub compatibility: Compatibility,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&AgentRecord> for RegistryEntry {
    fn from(record: &AgentRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            author: record.author.clone(),
            category: record.category,
            tags: record.tags.clone(),
            latest: record.latest.clone(),
            versions: record.versions.keys().cloned().collect(),
            downloads: record.downloads,
            rating: record.rating,
            rating_count: record.rating_count,
            license: record.license.clone(),
            compatibility: record.compatibility.clone(),
            created_at: record.created_at.clone(),
            updated_at: record.updated_at.clone(),
        }
    }
}

/// Display metadata for a registry category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub en: String,
    pub zh: String,
    pub description: Localized,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryStats {
    pub total_downloads: u64,
    pub active_users: u64,
    pub top_agents: Vec<String>,
    pub recent_updates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registry {
    pub version: String,
    pub last_updated: String,
    pub total_agents: usize,
    pub agents: IndexMap<String, RegistryEntry>,
    pub categories: IndexMap<String, CategoryInfo>,
    pub stats: RegistryStats,
}

/// The fixed category table embedded in every registry
pub fn registry_categories() -> IndexMap<String, CategoryInfo> {
    REGISTRY_CATEGORIES
        .iter()
        .map(|c| {
            let info = CategoryInfo {
                en: c.en.to_string(),
                zh: c.zh.to_string(),
                description: IndexMap::from([
                    ("en".to_string(), c.description_en.to_string()),
                    ("zh".to_string(), c.description_zh.to_string()),
                ]),
                icon: c.icon.to_string(),
            };
            (c.id.to_string(), info)
        })
        .collect()
}

impl Registry {
    /// Aggregate records in order. A repeated id replaces the earlier entry
    /// and keeps its first position.
    pub fn from_records<'a, I>(records: I, timestamp: &str) -> Self
    where
        I: IntoIterator<Item = &'a AgentRecord>,
    {
        let mut agents = IndexMap::new();
        for record in records {
            if agents.insert(record.id.clone(), RegistryEntry::from(record)).is_some() {
                log::warn!("Duplicate id {}, replacing earlier entry", record.id);
            }
        }
        Self::new(agents, timestamp)
    }

    pub fn new(agents: IndexMap<String, RegistryEntry>, timestamp: &str) -> Self {
        let stats = RegistryStats {
            total_downloads: agents.values().map(|a| a.downloads).sum(),
            active_users: 0,
            top_agents: agents.keys().take(TOP_AGENTS_LIMIT).cloned().collect(),
            recent_updates: Vec::new(),
        };

        Self {
            version: REGISTRY_VERSION.to_string(),
            last_updated: timestamp.to_string(),
            total_agents: agents.len(),
            agents,
            categories: registry_categories(),
            stats,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        read_json(path)
    }

    /// Write the registry, replacing any existing file
    pub fn write(&self, path: &Path) -> Result<()> {
        write_json(path, self)?;
        log::info!("Wrote registry with {} agents to {}", self.total_agents, path.display());
        Ok(())
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&RegistryEntry> {
        self.agents.get(id)
    }
}
