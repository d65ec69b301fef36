//! Keyword classification for agent profiles
//!
//! Assigns one of four content categories and derives tags:
//! - `debugging`: debugging, troubleshooting, error hunting
//! - `data`: data analysis, SQL, charts
//! - `documentation`: docs and comments
//! - `development`: everything else

use serde::{Deserialize, Serialize};

/// Content-inferred category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Debugging,
    Data,
    Documentation,
    Development,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Debugging => "debugging",
            Category::Data => "data",
            Category::Documentation => "documentation",
            Category::Development => "development",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const DEBUGGING_KEYWORDS: &[&str] = &["debug", "error", "bug", "troubleshoot", "fix"];
const DATA_KEYWORDS: &[&str] = &["data", "analysis", "sql", "chart", "statistics"];
const DOCUMENTATION_KEYWORDS: &[&str] = &["document", "readme", "doc", "comment"];
const DEVELOPMENT_KEYWORDS: &[&str] = &["test", "unit", "integration", "quality", "review"];

/// Checked in order; the first family with any hit wins
const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (Category::Debugging, DEBUGGING_KEYWORDS),
    (Category::Data, DATA_KEYWORDS),
    (Category::Documentation, DOCUMENTATION_KEYWORDS),
    (Category::Development, DEVELOPMENT_KEYWORDS),
];

const DEFAULT_CATEGORY: Category = Category::Development;

/// Description substrings that add a tag
const TAG_RULES: &[(&[&str], &str)] = &[
    (&["typescript", "ts"], "typescript"),
    (&["javascript", "js"], "javascript"),
    (&["python"], "python"),
    (&["security"], "security"),
    (&["review"], "code-review"),
];

/// Pick the category for a profile. Never fails: no hit means `development`.
pub fn infer_category(name: &str, description: &str, tools: &[String], body: &str) -> Category {
    let text = format!("{} {} {} {}", name, description, tools.join(" "), body).to_lowercase();

    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

/// Tools plus description-derived tags, sorted and deduplicated
pub fn derive_tags(tools: &[String], description: &str) -> Vec<String> {
    let mut tags: Vec<String> = tools.to_vec();

    let desc_lower = description.to_lowercase();
    for (needles, tag) in TAG_RULES {
        if needles.iter().any(|n| desc_lower.contains(n)) {
            tags.push(tag.to_string());
        }
    }

    tags.sort();
    tags.dedup();
    tags
}
