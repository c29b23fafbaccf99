//! Front-matter parsing
//!
//! Fields are extracted one at a time from the YAML mapping so that a
//! malformed value only loses that field, never the whole post.

use serde_yaml::{Mapping, Value};

const FENCE: &str = "---";

/// Front-matter data from a post, as found in the file
///
/// A field is `None` when it is absent or has an unusable shape. Defaults are
/// applied later, see [`crate::content::Post::from_source`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub featured: Option<bool>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> (Self, &str) {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let trimmed = content.trim_start();

        if !trimmed.starts_with(FENCE) {
            return (FrontMatter::default(), content);
        }

        let rest = trimmed[FENCE.len()..].trim_start_matches(['\n', '\r']);
        let Some(end_pos) = find_closing_fence(rest) else {
            // No closing ---, treat as no front-matter
            return (FrontMatter::default(), content);
        };

        let yaml_content = &rest[..end_pos];
        let remaining = rest[end_pos..]
            .trim_start_matches(['\n', '\r'])
            .strip_prefix(FENCE)
            .unwrap_or_default()
            .trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return (FrontMatter::default(), remaining);
        }

        // A leading thematic break followed by prose is body text, not metadata
        if !has_yaml_structure(yaml_content) {
            return (FrontMatter::default(), content);
        }

        match serde_yaml::from_str::<Value>(yaml_content) {
            Ok(Value::Mapping(map)) => (Self::from_mapping(&map), remaining),
            Ok(other) => {
                tracing::warn!(
                    "Front-matter is not a mapping ({:?}), using defaults",
                    value_kind(&other)
                );
                (FrontMatter::default(), remaining)
            }
            Err(e) => {
                tracing::warn!("Failed to parse YAML front-matter, using defaults: {}", e);
                (FrontMatter::default(), remaining)
            }
        }
    }

    fn from_mapping(map: &Mapping) -> Self {
        Self {
            title: string_field(map, "title"),
            excerpt: string_field(map, "excerpt"),
            date: string_field(map, "date"),
            author: string_field(map, "author"),
            tags: tags_field(map, "tags"),
            featured: bool_field(map, "featured"),
        }
    }
}

/// Byte offset of the line holding the closing fence, relative to `rest`
fn find_closing_fence(rest: &str) -> Option<usize> {
    if rest.starts_with(FENCE) {
        return Some(0);
    }
    rest.find("\n---").map(|pos| pos + 1)
}

/// Valid YAML front-matter has at least one `key: value` line
fn has_yaml_structure(yaml_content: &str) -> bool {
    yaml_content.lines().any(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return false;
        }
        let Some(colon_pos) = trimmed.find(':') else {
            return false;
        };
        let key = &trimmed[..colon_pos];
        let is_valid_key = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            && !matches!(key, "http" | "https" | "ftp");
        let after_colon = &trimmed[colon_pos + 1..];
        is_valid_key && (after_colon.is_empty() || after_colon.starts_with(' '))
    })
}

fn lookup<'a>(map: &'a Mapping, key: &str) -> Option<&'a Value> {
    map.get(Value::String(key.to_string()))
}

/// Scalars are accepted as text; null, sequences and mappings are not
fn string_field(map: &Mapping, key: &str) -> Option<String> {
    match lookup(map, key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => {
            malformed(key, other);
            None
        }
    }
}

fn bool_field(map: &Mapping, key: &str) -> Option<bool> {
    match lookup(map, key)? {
        Value::Bool(b) => Some(*b),
        Value::Null => None,
        other => {
            malformed(key, other);
            None
        }
    }
}

/// Accepts a single string or a list of strings; non-string list items are skipped
fn tags_field(map: &Mapping, key: &str) -> Option<Vec<String>> {
    match lookup(map, key)? {
        Value::String(s) => Some(vec![s.clone()]),
        Value::Sequence(items) => Some(
            items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    other => {
                        malformed(key, other);
                        None
                    }
                })
                .collect(),
        ),
        Value::Null => None,
        other => {
            malformed(key, other);
            None
        }
    }
}

fn malformed(key: &str, value: &Value) {
    tracing::warn!(
        "Ignoring malformed front-matter field `{}` ({})",
        key,
        value_kind(value)
    );
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: SwiftUI Best Practices
excerpt: Learn essential SwiftUI patterns.
date: 2024-01-22
author: Jane Appleseed
tags:
  - ios
  - swiftui
featured: true
---

This is the content.
"#;

        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("SwiftUI Best Practices"));
        assert_eq!(fm.excerpt.as_deref(), Some("Learn essential SwiftUI patterns."));
        assert_eq!(fm.date.as_deref(), Some("2024-01-22"));
        assert_eq!(fm.author.as_deref(), Some("Jane Appleseed"));
        assert_eq!(fm.tags, Some(vec!["ios".to_string(), "swiftui".to_string()]));
        assert_eq!(fm.featured, Some(true));
        assert_eq!(remaining, "This is the content.\n");
    }

    #[test]
    fn test_byte_order_mark_is_skipped() {
        let (fm, remaining) = FrontMatter::parse("\u{feff}---\ntitle: Hello\n---\nBody");
        assert_eq!(fm.title.as_deref(), Some("Hello"));
        assert_eq!(remaining, "Body");

        let (fm, remaining) = FrontMatter::parse("\u{feff}Plain body");
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(remaining, "Plain body");
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "Just a body.\n";
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_empty_frontmatter() {
        let (fm, remaining) = FrontMatter::parse("---\n---\nBody");
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(remaining, "Body");
    }

    #[test]
    fn test_single_string_tags() {
        let content = "---\ntitle: One Tag\ntags: kotlin\n---\nBody";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.tags, Some(vec!["kotlin".to_string()]));
    }

    #[test]
    fn test_malformed_field_only_drops_that_field() {
        let content = r#"---
title: Still Here
featured: "yes please"
tags:
  nested: map
author: [not, a, string]
---
Body
"#;

        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("Still Here"));
        assert_eq!(fm.featured, None);
        assert_eq!(fm.tags, None);
        assert_eq!(fm.author, None);
        assert_eq!(remaining, "Body\n");
    }

    #[test]
    fn test_numeric_title_is_text() {
        let (fm, _) = FrontMatter::parse("---\ntitle: 2024\n---\n");
        assert_eq!(fm.title.as_deref(), Some("2024"));
    }

    #[test]
    fn test_invalid_yaml_uses_defaults_and_strips_block() {
        let content = "---\ntitle: [unclosed\n---\nBody text";
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(remaining, "Body text");
    }

    #[test]
    fn test_markdown_separator_not_yaml() {
        let content = r#"
---

Check out https://example.com/path and a list:
- Item 1

---
More content here.
"#;

        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm, FrontMatter::default());
        assert!(remaining.contains("https://example.com"));
        assert!(remaining.contains("More content here."));
    }

    #[test]
    fn test_unclosed_fence_is_body() {
        let content = "---\ntitle: Nope\nno closing fence";
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(remaining, content);
    }
}
