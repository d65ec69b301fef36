//! Header block parsing for agent profiles
//!
//! An agent profile starts with a delimiter-bounded header followed by free text:
//!
//! ```markdown
//! ---
//! name: code-reviewer
//! description: Reviews code for quality and security
//! tools: Read, Grep, Bash
//! ---
//!
//! You are a senior code reviewer...
//! ```
//!
//! The header is a flat `key: value` list. It is not YAML: values are taken
//! verbatim after the first colon, and only `tools` is ever split into a list.

use indexmap::IndexMap;

/// Marker that opens and closes the header block
pub const DELIMITER: &str = "---";

/// The one header key whose comma-separated value becomes a list
pub const LIST_KEY: &str = "tools";

/// A single header value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// View the value as a list; a scalar becomes a one-element list
    pub fn to_list(&self) -> Vec<String> {
        match self {
            FieldValue::Text(s) if s.is_empty() => Vec::new(),
            FieldValue::Text(s) => vec![s.clone()],
            FieldValue::List(items) => items.clone(),
        }
    }
}

/// Parsed header fields, in the order they appeared
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    fields: IndexMap<String, FieldValue>,
}

impl Header {
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Scalar value for `key`; list values are joined with ", "
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| match v {
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items.join(", "),
        })
    }

    /// List value for `key`, empty when absent
    pub fn list(&self, key: &str) -> Vec<String> {
        self.get(key).map(FieldValue::to_list).unwrap_or_default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        self.fields.insert(key.into(), value);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }
}

/// A document split into its header and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    pub header: Header,
    pub body: String,
}

/// Split a document into header and body.
///
/// Returns `None` when the text does not start with the delimiter, the
/// header block is never closed, or the block holds no `key: value` line. The closing delimiter is the next occurrence
/// of the marker anywhere after the opening one.
pub fn parse_header(content: &str) -> Option<ParsedDocument> {
    let rest = content.strip_prefix(DELIMITER)?;
    let end = rest.find(DELIMITER)?;

    let block = rest[..end].trim();
    let body = rest[end + DELIMITER.len()..].trim().to_string();

    let mut header = Header::default();
    for line in block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = strip_quotes(value.trim());

        let value = if key == LIST_KEY && value.contains(',') {
            FieldValue::List(
                value
                    .split(',')
                    .map(|item| item.trim().to_string())
                    .filter(|item| !item.is_empty())
                    .collect(),
            )
        } else {
            FieldValue::Text(value.to_string())
        };
        header.insert(key, value);
    }

    if header.is_empty() {
        return None;
    }

    Some(ParsedDocument { header, body })
}

/// Remove one matching pair of surrounding quotes
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_basic() {
        let content = "---\nname: Bug Hunter\ndescription: Finds bugs\ntools: grep, sql\n---\n\nInvestigates failures.\n";
        let doc = parse_header(content).unwrap();

        assert_eq!(doc.header.text("name").as_deref(), Some("Bug Hunter"));
        assert_eq!(doc.header.text("description").as_deref(), Some("Finds bugs"));
        assert_eq!(
            doc.header.get("tools"),
            Some(&FieldValue::List(vec!["grep".to_string(), "sql".to_string()]))
        );
        assert_eq!(doc.body, "Investigates failures.");
    }

    #[test]
    fn test_parse_header_no_delimiter() {
        assert!(parse_header("# Just markdown\n\nNo header here").is_none());
    }

    #[test]
    fn test_parse_header_leading_whitespace_is_not_a_header() {
        assert!(parse_header("\n---\nname: x\n---\nbody").is_none());
    }

    #[test]
    fn test_parse_header_unterminated() {
        assert!(parse_header("---\nname: broken\nno closing marker").is_none());
    }

    #[test]
    fn test_parse_header_body_is_trimmed_remainder() {
        let body = "  Line one.\n\nLine two.  \n\n";
        let content = format!("---\nname: x\n---{}", body);
        let doc = parse_header(&content).unwrap();
        assert_eq!(doc.body, body.trim());
    }

    #[test]
    fn test_parse_header_strips_one_quote_layer() {
        let content = "---\nname: \"Quoted Name\"\ndescription: '\"nested\"'\nmodel: 'open\n---\n";
        let doc = parse_header(content).unwrap();
        assert_eq!(doc.header.text("name").as_deref(), Some("Quoted Name"));
        assert_eq!(doc.header.text("description").as_deref(), Some("\"nested\""));
        assert_eq!(doc.header.text("model").as_deref(), Some("'open"));
    }

    #[test]
    fn test_parse_header_splits_on_first_colon_only() {
        let content = "---\nname: x\nhomepage: https://example.com:8080/path\n---\n";
        let doc = parse_header(content).unwrap();
        assert_eq!(
            doc.header.text("homepage").as_deref(),
            Some("https://example.com:8080/path")
        );
    }

    #[test]
    fn test_parse_header_ignores_lines_without_separator() {
        let content = "---\nname: x\njust some words\n\ndescription: y\n---\n";
        let doc = parse_header(content).unwrap();
        assert_eq!(doc.header.len(), 2);
    }

    #[test]
    fn test_parse_header_single_tool_stays_scalar() {
        let content = "---\nname: x\ntools: Read\n---\n";
        let doc = parse_header(content).unwrap();
        assert_eq!(doc.header.get("tools"), Some(&FieldValue::Text("Read".to_string())));
        assert_eq!(doc.header.list("tools"), vec!["Read".to_string()]);
    }

    #[test]
    fn test_parse_header_comma_only_splits_tools() {
        let content = "---\nname: x\ndescription: fast, safe, small\n---\n";
        let doc = parse_header(content).unwrap();
        assert_eq!(
            doc.header.get("description"),
            Some(&FieldValue::Text("fast, safe, small".to_string()))
        );
    }

    #[test]
    fn test_parse_header_empty_block_is_no_header() {
        assert!(parse_header("---\n---\nbody").is_none());
        assert!(parse_header("---\n\njust words\n---\nbody").is_none());
    }

    #[test]
    fn test_parse_header_drops_empty_tool_pieces() {
        let content = "---\nname: x\ntools: a, , b,\n---\n";
        let doc = parse_header(content).unwrap();
        assert_eq!(
            doc.header.get("tools"),
            Some(&FieldValue::List(vec!["a".to_string(), "b".to_string()]))
        );
    }

    #[test]
    fn test_parse_header_unknown_keys_pass_through() {
        let content = "---\nname: x\nmodel: sonnet\ncolor: blue\n---\n";
        let doc = parse_header(content).unwrap();
        let keys: Vec<_> = doc.header.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["name", "model", "color"]);
        assert_eq!(doc.header.text("model").as_deref(), Some("sonnet"));
    }

    #[test]
    fn test_parse_header_missing_key_list_is_empty() {
        let doc = parse_header("---\nname: x\n---\n").unwrap();
        assert!(doc.header.list("tools").is_empty());
        assert!(doc.header.text("description").is_none());
    }
}
