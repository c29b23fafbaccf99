//! Post models

use chrono::NaiveDate;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::FrontMatter;
use crate::config::FrontMatterDefaults;

/// A blog post, as loaded from the content store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Slug (file stem of the content file)
    pub slug: String,

    /// Post title
    pub title: String,

    /// Short summary shown on listing cards
    pub excerpt: String,

    /// Publication date, as written in the front-matter
    pub date: String,

    pub author: String,

    /// Post tags, in the order they were written
    pub tags: Vec<String>,

    pub featured: bool,

    /// Raw markdown body
    pub content: String,

    /// Reading-time estimate, e.g. "3 min read"
    pub reading_time: String,
}

impl Post {
    /// Build a post from parsed front-matter, filling gaps from `defaults`
    pub fn from_source(
        slug: &str,
        fm: FrontMatter,
        body: &str,
        defaults: &FrontMatterDefaults,
        words_per_minute: usize,
    ) -> Self {
        Self {
            slug: slug.to_string(),
            title: fm.title.unwrap_or_else(|| defaults.title.clone()),
            excerpt: fm.excerpt.unwrap_or_else(|| defaults.excerpt.clone()),
            date: fm.date.unwrap_or_default(),
            author: fm.author.unwrap_or_else(|| defaults.author.clone()),
            tags: normalize_tags(fm.tags.as_deref().unwrap_or(&defaults.tags)),
            featured: fm.featured.unwrap_or(defaults.featured),
            content: body.to_string(),
            reading_time: reading_time(body, words_per_minute),
        }
    }

    /// Date parsed for ordering; `None` when missing or unparseable
    pub fn sort_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Get the newer neighbour in a date-sorted list
    pub fn newer<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        if pos > 0 {
            Some(&posts[pos - 1])
        } else {
            None
        }
    }

    /// Get the older neighbour in a date-sorted list
    pub fn older<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        posts.get(pos + 1)
    }
}

/// A post with its body rendered to HTML, used by the detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPost {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub author: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub reading_time: String,
    /// Rendered HTML body
    pub html: String,
}

impl RenderedPost {
    pub fn new(post: Post, html: String) -> Self {
        Self {
            slug: post.slug,
            title: post.title,
            excerpt: post.excerpt,
            date: post.date,
            author: post.author,
            tags: post.tags,
            featured: post.featured,
            reading_time: post.reading_time,
            html,
        }
    }
}

/// Sort posts newest first; ties and undated posts keep their relative order
pub fn sort_by_date_desc(posts: &mut [Post]) {
    // `None < Some(_)`, so undated posts sink to the end
    posts.sort_by_cached_key(|p| std::cmp::Reverse(p.sort_date()));
}

/// Estimate reading time as `ceil(words / wpm)` minutes, never less than one
pub fn reading_time(body: &str, words_per_minute: usize) -> String {
    let words = body.split_whitespace().count();
    let minutes = words.div_ceil(words_per_minute.max(1)).max(1);
    format!("{} min read", minutes)
}

/// Lowercase and hyphenate tags, dropping empties and duplicates
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let set: IndexSet<String> = tags
        .iter()
        .map(|t| {
            t.split_whitespace()
                .collect::<Vec<_>>()
                .join("-")
                .to_lowercase()
        })
        .filter(|t| !t.is_empty())
        .collect();
    set.into_iter().collect()
}

/// Parse a date string in the formats front-matter commonly uses
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let formats = ["%Y-%m-%d", "%Y/%m/%d"];
    for fmt in formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, date: &str) -> Post {
        let fm = FrontMatter {
            date: Some(date.to_string()),
            ..Default::default()
        };
        Post::from_source(slug, fm, "", &FrontMatterDefaults::default(), 200)
    }

    #[test]
    fn test_reading_time() {
        let four_hundred = vec!["word"; 400].join(" ");
        assert_eq!(reading_time(&four_hundred, 200), "2 min read");
        assert_eq!(reading_time("hello", 200), "1 min read");
        assert_eq!(reading_time("", 200), "1 min read");
        assert_eq!(reading_time("  \n\t ", 200), "1 min read");

        let four_oh_one = vec!["word"; 401].join("\n");
        assert_eq!(reading_time(&four_oh_one, 200), "3 min read");
    }

    #[test]
    fn test_defaults_applied() {
        let p = Post::from_source(
            "bare",
            FrontMatter::default(),
            "Body",
            &FrontMatterDefaults::default(),
            200,
        );
        assert_eq!(p.title, "");
        assert_eq!(p.excerpt, "");
        assert_eq!(p.author, "Synchromation Team");
        assert!(p.tags.is_empty());
        assert!(!p.featured);
        assert_eq!(p.content, "Body");
        assert_eq!(p.reading_time, "1 min read");
    }

    #[test]
    fn test_normalize_tags_keeps_order() {
        let tags = vec![
            "Swift".to_string(),
            "iOS Development".to_string(),
            "swift".to_string(),
            " ".to_string(),
        ];
        assert_eq!(normalize_tags(&tags), vec!["swift", "ios-development"]);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-01-15"), NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(
            parse_date("2024-01-15T10:30:00Z"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(
            parse_date("2024/01/15 10:30:00"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(parse_date("someday"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_sort_by_date_desc_is_stable() {
        let mut posts = vec![
            post("a", "2024-01-15"),
            post("undated", ""),
            post("b", "2024-01-29"),
            post("tie-1", "2024-01-22"),
            post("tie-2", "2024-01-22"),
        ];
        sort_by_date_desc(&mut posts);
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "tie-1", "tie-2", "a", "undated"]);
    }

    #[test]
    fn test_newer_and_older() {
        let posts = vec![post("c", "2024-01-29"), post("b", "2024-01-22"), post("a", "2024-01-15")];
        assert_eq!(posts[1].newer(&posts).map(|p| p.slug.as_str()), Some("c"));
        assert_eq!(posts[1].older(&posts).map(|p| p.slug.as_str()), Some("a"));
        assert!(posts[0].newer(&posts).is_none());
        assert!(posts[2].older(&posts).is_none());
    }

    #[test]
    fn test_rendered_post_keeps_fields() {
        let p = post("a", "2024-01-15");
        let rendered = RenderedPost::new(p.clone(), "<p>hi</p>".to_string());
        assert_eq!(rendered.slug, p.slug);
        assert_eq!(rendered.date, "2024-01-15");
        assert_eq!(rendered.html, "<p>hi</p>");
    }
}
