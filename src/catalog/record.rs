//! Canonical agent record built from a parsed profile

use indexmap::IndexMap;
use lazy_regex::regex;
use serde::{Deserialize, Serialize};

use super::SkipReason;
use super::classify::{Category, derive_tags, infer_category};
use crate::config::ImportConfig;
use crate::document::header::{LIST_KEY, ParsedDocument};

/// Text keyed by locale code ("en", "zh", ...)
pub type Localized = IndexMap<String, String>;

/// Marker appended to a truncated long description
pub const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCompatibility {
    pub min_version: String,
    pub tested: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compatibility {
    pub claude_code: ClientCompatibility,
}

impl Compatibility {
    /// Compatibility claimed for a freshly imported version
    pub fn for_version(version: &str) -> Self {
        Self {
            claude_code: ClientCompatibility {
                min_version: version.to_string(),
                tested: vec![version.to_string()],
            },
        }
    }
}

/// Release metadata for one version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    pub release_date: String,
    pub changes: String,
    pub files: IndexMap<String, String>,
}

/// Full metadata for one imported agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecord {
    pub id: String,
    pub name: Localized,
    pub description: Localized,
    pub long_description: Localized,
    pub author: String,
    pub license: String,
    pub homepage: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub compatibility: Compatibility,
    pub versions: IndexMap<String, Release>,
    pub latest: String,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub rating_count: u64,
    pub created_at: String,
    pub updated_at: String,
}

/// Turn a display name into an identifier: lowercase, spaces and underscores
/// become hyphens, anything outside `[a-z0-9-]` is dropped.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase().replace([' ', '_'], "-");
    regex!(r"[^a-z0-9\-]").replace_all(&lowered, "").into_owned()
}

/// First `limit` characters plus an ellipsis when the text is longer.
/// Counts characters, not bytes, and ignores word boundaries.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let head: String = text.chars().take(limit).collect();
        format!("{}{}", head, ELLIPSIS)
    } else {
        text.to_string()
    }
}

/// Same text under every configured locale, source locale first
pub fn localized(text: &str, settings: &ImportConfig) -> Localized {
    let mut map = IndexMap::new();
    map.insert(settings.source_locale.clone(), text.to_string());
    for locale in &settings.locales {
        map.entry(locale.clone()).or_insert_with(|| text.to_string());
    }
    map
}

/// Build the record for a parsed profile.
///
/// Fails with [`SkipReason::EmptyId`] when the name is missing or slugifies
/// to nothing.
pub fn build_record(doc: &ParsedDocument, settings: &ImportConfig, timestamp: &str) -> Result<AgentRecord, SkipReason> {
    let name = doc.header.text("name").unwrap_or_default();
    let id = slugify(&name);
    if id.is_empty() {
        return Err(SkipReason::EmptyId);
    }

    let description = doc.header.text("description").unwrap_or_default();
    let tools = doc.header.list(LIST_KEY);

    let category = infer_category(&name, &description, &tools, &doc.body);
    let tags = derive_tags(&tools, &description);
    let long_description = truncate_chars(&doc.body, settings.long_description_limit);

    let release = Release {
        release_date: timestamp.to_string(),
        changes: settings.changes.clone(),
        files: IndexMap::from([("agent".to_string(), settings.agent_file.clone())]),
    };

    Ok(AgentRecord {
        id,
        name: localized(&name, settings),
        description: localized(&description, settings),
        long_description: localized(&long_description, settings),
        author: settings.author.clone(),
        license: settings.license.clone(),
        homepage: settings.homepage.clone(),
        category,
        tags,
        compatibility: Compatibility::for_version(&settings.version),
        versions: IndexMap::from([(settings.version.clone(), release)]),
        latest: settings.version.clone(),
        downloads: 0,
        rating: 0.0,
        rating_count: 0,
        created_at: timestamp.to_string(),
        updated_at: timestamp.to_string(),
    })
}
