//! Front-matter parsing
//!
//! A document starts with an optional metadata block followed by its body.
//! The block is parsed into an untyped, ordered key/value map; turning that
//! map into a typed record is left to the document types, which use the
//! accessors here to apply per-field defaults.
//!
//! A derived `Deserialize` struct would reject the whole file over one
//! wrongly typed field, so fields are read one at a time instead.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde_yaml::Value;

use super::ContentError;

/// Untyped front-matter data from a content document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    fields: IndexMap<String, Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), ContentError> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        // YAML front-matter (---)
        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        // TOML front-matter (+++)
        if content.starts_with("+++") {
            return Self::parse_toml(content);
        }

        // JSON front-matter (;;; or {"key":)
        if content.starts_with(";;;") {
            return Self::parse_json(content);
        }

        // A bare leading object only counts when it is valid JSON; MDX
        // bodies may open with a `{...}` expression.
        if content.starts_with('{') {
            if let Ok(parsed) = Self::parse_json(content) {
                return Ok(parsed);
            }
            tracing::debug!("Leading braces are not JSON front-matter, reading as body");
        }

        // No front-matter found
        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str), ContentError> {
        let Some((block, remaining)) = split_block(content, "---") else {
            // No closing ---, treat as no front-matter
            return Ok((FrontMatter::default(), content));
        };

        if block.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        // A leading --- may just be a markdown rule; only treat the block as
        // YAML when at least one line looks like `key: value`.
        if !block.lines().any(looks_like_yaml_key) {
            return Ok((FrontMatter::default(), content));
        }

        let value: Value =
            serde_yaml::from_str(block).map_err(|e| ContentError::frontmatter("YAML", e))?;

        let fields = match value {
            Value::Mapping(mapping) => mapping
                .into_iter()
                .filter_map(|(key, value)| scalar_to_string(&key).map(|key| (key, value)))
                .collect(),
            Value::Null => IndexMap::new(),
            other => {
                return Err(ContentError::frontmatter(
                    "YAML",
                    format!("expected a mapping, found {}", type_name(&other)),
                ))
            }
        };

        Ok((Self { fields }, remaining))
    }

    fn parse_toml(content: &str) -> Result<(Self, &str), ContentError> {
        let Some((block, remaining)) = split_block(content, "+++") else {
            return Ok((FrontMatter::default(), content));
        };

        let table: toml::Table =
            toml::from_str(block).map_err(|e| ContentError::frontmatter("TOML", e))?;
        let fields = table
            .into_iter()
            .map(|(key, value)| (key, toml_to_yaml(value)))
            .collect();

        Ok((Self { fields }, remaining))
    }

    fn parse_json(content: &str) -> Result<(Self, &str), ContentError> {
        // JSON front-matter ends with ;;;
        if let Some(rest) = content.strip_prefix(";;;") {
            if let Some(end_pos) = rest.find(";;;") {
                let json_content = &rest[..end_pos];
                let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);
                return Ok((Self::from_json(json_content)?, remaining));
            }
            return Err(ContentError::frontmatter("JSON", "missing closing ;;;"));
        }

        // Find the brace that closes the leading object
        let mut depth = 0usize;
        let mut in_string = false;
        let mut escaped = false;
        let mut end_pos = None;
        for (i, c) in content.char_indices() {
            if in_string {
                match c {
                    _ if escaped => escaped = false,
                    '\\' => escaped = true,
                    '"' => in_string = false,
                    _ => {}
                }
                continue;
            }
            match c {
                '"' => in_string = true,
                '{' => depth += 1,
                '}' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        end_pos = Some(i + 1);
                        break;
                    }
                }
                _ => {}
            }
        }

        let end_pos = end_pos.ok_or_else(|| ContentError::frontmatter("JSON", "unclosed object"))?;
        let remaining = content[end_pos..].trim_start_matches(['\n', '\r']);
        Ok((Self::from_json(&content[..end_pos])?, remaining))
    }

    fn from_json(json: &str) -> Result<Self, ContentError> {
        let fields: IndexMap<String, Value> =
            serde_json::from_str(json).map_err(|e| ContentError::frontmatter("JSON", e))?;
        Ok(Self { fields })
    }

    /// Raw value of a field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// A scalar field as a string. Numbers and booleans are stringified;
    /// null, missing and non-scalar values yield `None`.
    pub fn string(&self, key: &str) -> Option<String> {
        match self.fields.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => {
                let s = scalar_to_string(value);
                if s.is_none() {
                    tracing::warn!(
                        "Front-matter field `{}` should be a string, found {}",
                        key,
                        type_name(value)
                    );
                }
                s
            }
        }
    }

    /// A list field. Accepts a single scalar or a sequence of scalars.
    pub fn string_list(&self, key: &str) -> Vec<String> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(items)) => items
                .iter()
                .filter_map(|item| {
                    let s = scalar_to_string(item);
                    if s.is_none() {
                        tracing::warn!(
                            "Skipping non-scalar entry in front-matter list `{}`",
                            key
                        );
                    }
                    s
                })
                .collect(),
            Some(value) => match scalar_to_string(value) {
                Some(s) => vec![s],
                None => {
                    tracing::warn!(
                        "Front-matter field `{}` should be a list, found {}",
                        key,
                        type_name(value)
                    );
                    Vec::new()
                }
            },
        }
    }

    /// A boolean field; `false` when missing or not a boolean
    pub fn flag(&self, key: &str) -> bool {
        match self.fields.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => matches!(s.trim(), "true" | "yes"),
            Some(value) => {
                tracing::warn!(
                    "Front-matter field `{}` should be a boolean, found {}",
                    key,
                    type_name(value)
                );
                false
            }
        }
    }
}

/// Split `<delim>\n block \n<delim>\n body`, returning (block, body)
fn split_block<'a>(content: &'a str, delimiter: &str) -> Option<(&'a str, &'a str)> {
    let rest = content[delimiter.len()..].trim_start_matches(['\n', '\r']);
    if rest.starts_with(delimiter) {
        // Empty block: the closing delimiter follows immediately
        let remaining = rest[delimiter.len()..].trim_start_matches(['\n', '\r']);
        return Some(("", remaining));
    }
    let closing = format!("\n{}", delimiter);
    let end_pos = rest.find(&closing)?;
    let block = &rest[..end_pos];
    let remaining = rest[end_pos + closing.len()..].trim_start_matches(['\n', '\r']);
    Some((block, remaining))
}

lazy_static! {
    /// `key:` or `key: value` at the start of a line
    static ref YAML_KEY: Regex = Regex::new(r"^([A-Za-z0-9_-]+):(\s|$)").unwrap();
}

/// Whether a line has the shape `key:` or `key: value`
fn looks_like_yaml_key(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.starts_with('#') {
        return false;
    }
    match YAML_KEY.captures(trimmed) {
        // Colons in URLs are not keys
        Some(caps) => !matches!(&caps[1], "http" | "https" | "ftp"),
        None => false,
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn toml_to_yaml(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => Value::Number(f.into()),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Sequence(items.into_iter().map(toml_to_yaml).collect()),
        toml::Value::Table(table) => Value::Mapping(
            table
                .into_iter()
                .map(|(k, v)| (Value::String(k), toml_to_yaml(v)))
                .collect(),
        ),
    }
}

/// Parse a publish date in the formats content authors actually write
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
date: 2024-01-15
tags:
  - rust
  - web
---

This is the content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.string("title"), Some("Hello World".to_string()));
        assert_eq!(fm.string("date"), Some("2024-01-15".to_string()));
        assert_eq!(fm.string_list("tags"), vec!["rust", "web"]);
        assert_eq!(remaining, "This is the content.\n");
    }

    #[test]
    fn test_parse_json_frontmatter() {
        let content = r#"{"title": "Test {Post}", "tags": ["a", "b"]}

This is content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.string("title"), Some("Test {Post}".to_string()));
        assert_eq!(fm.string_list("tags"), vec!["a", "b"]);
        assert!(remaining.starts_with("This is content."));
    }

    #[test]
    fn test_parse_semicolon_json_frontmatter() {
        let content = ";;;\n{\"title\": \"Fenced\"}\n;;;\nBody";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.string("title"), Some("Fenced".to_string()));
        assert_eq!(remaining, "Body");
    }

    #[test]
    fn test_parse_toml_frontmatter() {
        let content = r#"+++
title = "Pipeline"
date = 2024-03-01
technologies = ["Kafka", "Spark"]
featured = true
+++
Body text
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.string("title"), Some("Pipeline".to_string()));
        assert_eq!(fm.string("date"), Some("2024-03-01".to_string()));
        assert_eq!(fm.string_list("technologies"), vec!["Kafka", "Spark"]);
        assert!(fm.flag("featured"));
        assert_eq!(remaining, "Body text\n");
    }

    #[test]
    fn test_scalar_coercion() {
        let content = "---\ntitle: 2024\ndraft: true\ntags: Notes\n---\n";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.string("title"), Some("2024".to_string()));
        assert_eq!(fm.string("draft"), Some("true".to_string()));
        assert_eq!(fm.string_list("tags"), vec!["Notes"]);
        assert_eq!(remaining, "");
    }

    #[test]
    fn test_wrong_types_fall_back() {
        let content = "---\ntitle:\n  nested: value\ntags:\n  key: value\nfeatured: 3\n---\nBody";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.string("title"), None);
        assert!(fm.string_list("tags").is_empty());
        assert!(!fm.flag("featured"));
    }

    #[test]
    fn test_null_fields() {
        let content = "---\ntitle:\ntags:\n---\nBody";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.string("title"), None);
        assert!(fm.string_list("tags").is_empty());
        assert_eq!(remaining, "Body");
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let content = "---\ntitle: [unclosed\n---\nBody";
        let err = FrontMatter::parse(content).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Frontmatter { format: "YAML", .. }
        ));
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just a heading\n\nSome text.";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert!(fm.is_empty());
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_leading_jsx_expression_is_body() {
        let content = "{/* draft note */}\n\n# Hello\n";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert!(fm.is_empty());
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_byte_order_mark_is_skipped() {
        let content = "\u{feff}---\ntitle: Hello\ntags: [a]\n---\nBody";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.string("title").as_deref(), Some("Hello"));
        assert_eq!(fm.string_list("tags"), vec!["a"]);
        assert_eq!(remaining, "Body");
    }

    #[test]
    fn test_empty_frontmatter() {
        let (fm, remaining) = FrontMatter::parse("---\n---\nBody").unwrap();
        assert!(fm.is_empty());
        assert_eq!(remaining, "Body");
    }

    #[test]
    fn test_markdown_separator_not_yaml() {
        let content = r#"
---

Some random text with markdown lists:
- Item 1
- Item 2

---
More content here.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert!(fm.is_empty());
        assert!(remaining.contains("Some random text"));
    }

    #[test]
    fn test_content_with_url_not_yaml() {
        let content = r#"
---

Check out https://example.com/path and http://test.com

---
More content.
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert!(fm.is_empty());
        assert!(remaining.contains("https://example.com"));
    }

    #[test]
    fn test_crlf_frontmatter() {
        let content = "---\r\ntitle: Windows\r\n---\r\nBody";
        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.string("title"), Some("Windows".to_string()));
        assert_eq!(remaining, "Body");
    }

    #[test]
    fn test_parse_date_formats() {
        let day = parse_date("2024-01-15").unwrap();
        assert_eq!(day.format("%Y-%m-%d %H:%M").to_string(), "2024-01-15 00:00");

        let with_time = parse_date("2024/01/15 10:30:00").unwrap();
        assert!(with_time > day);

        let rfc = parse_date("2024-01-15T12:00:00+02:00").unwrap();
        assert_eq!(rfc.format("%H").to_string(), "10");

        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("someday"), None);
    }
}
