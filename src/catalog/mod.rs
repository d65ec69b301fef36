//! Agent catalog: records, registry and category shards
//!
//! Pipeline per document:
//! 1. Split header and body (`document::header`)
//! 2. Classify and tag (`classify`)
//! 3. Build the canonical record (`record`)
//!
//! The collected records feed the registry (`registry`); the category
//! shards (`shard`) are a later pass over the written registry.

use chrono::Utc;

use crate::config::ImportConfig;
use crate::document::RawDocument;
use crate::document::header::parse_header;

pub mod classify;
pub mod record;
pub mod registry;
pub mod shard;
pub mod store;
pub mod taxonomy;
pub mod translate;

use record::{AgentRecord, build_record};

/// Why a document was left out of the import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The file could not be read
    Unreadable,
    /// No delimiter-bounded header at the top of the file
    NoHeader,
    /// The name field is missing or slugifies to nothing
    EmptyId,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            SkipReason::Unreadable => "unreadable",
            SkipReason::NoHeader => "no header",
            SkipReason::EmptyId => "empty id",
        };
        write!(f, "{}", reason)
    }
}

/// A converted document: metadata plus the original text
#[derive(Debug, Clone)]
pub struct ImportedAgent {
    pub record: AgentRecord,
    pub content: String,
}

/// Current time as ISO-8601 UTC with microseconds and a `Z` suffix
pub fn timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

/// Parse, classify and build one document
pub fn convert_document(doc: &RawDocument, settings: &ImportConfig, timestamp: &str) -> Result<ImportedAgent, SkipReason> {
    log::debug!("Converting {}", doc.path.display());
    let parsed = parse_header(&doc.content).ok_or(SkipReason::NoHeader)?;
    let record = build_record(&parsed, settings, timestamp)?;

    Ok(ImportedAgent {
        record,
        content: doc.content.clone(),
    })
}
