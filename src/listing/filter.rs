//! Tag filter state and the filtered listing view

use indexmap::IndexSet;
use serde::Serialize;
use std::fmt;

use crate::content::Post;

/// Sentinel for "no tag selected"
pub const ALL: &str = "all";

/// Selected tag on the listing page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    /// Interpret a chip value; `"all"` resets the filter
    pub fn from_selection(value: &str) -> Self {
        if value == ALL {
            TagFilter::All
        } else {
            TagFilter::Tag(value.to_string())
        }
    }

    /// Move to a new selection (a tag chip or the "All Posts" chip)
    pub fn select(&mut self, value: &str) {
        *self = Self::from_selection(value);
    }

    pub fn matches(&self, post: &Post) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(tag) => post.has_tag(tag),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TagFilter::All => ALL,
            TagFilter::Tag(tag) => tag,
        }
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listing page model: every post plus the current filter
#[derive(Debug, Clone, Serialize)]
pub struct ListingView {
    #[serde(skip)]
    all: Vec<Post>,
    #[serde(rename = "selectedTag", serialize_with = "serialize_filter")]
    filter: TagFilter,
    posts: Vec<Post>,
    tags: Vec<String>,
}

fn serialize_filter<S: serde::Serializer>(filter: &TagFilter, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(filter.as_str())
}

impl ListingView {
    /// `posts` is the unfiltered, date-sorted list
    pub fn new(posts: Vec<Post>, filter: TagFilter) -> Self {
        let tags = distinct_tags(&posts);
        let filtered = posts.iter().filter(|p| filter.matches(p)).cloned().collect();
        Self {
            all: posts,
            filter,
            posts: filtered,
            tags,
        }
    }

    /// Change the selected tag and recompute the visible posts
    pub fn select(&mut self, value: &str) {
        self.filter.select(value);
        self.posts = self
            .all
            .iter()
            .filter(|p| self.filter.matches(p))
            .cloned()
            .collect();
    }

    pub fn filter(&self) -> &TagFilter {
        &self.filter
    }

    /// Posts visible under the current filter
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Selectable tag chips; always computed over the unfiltered list
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Distinct tags in order of first appearance
pub fn distinct_tags(posts: &[Post]) -> Vec<String> {
    let tags: IndexSet<&str> = posts
        .iter()
        .flat_map(|p| p.tags.iter().map(String::as_str))
        .collect();
    tags.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FrontMatterDefaults;
    use crate::content::FrontMatter;

    fn post(slug: &str, tags: &[&str]) -> Post {
        let fm = FrontMatter {
            tags: Some(tags.iter().map(|t| t.to_string()).collect()),
            ..Default::default()
        };
        Post::from_source(slug, fm, "", &FrontMatterDefaults::default(), 200)
    }

    fn sample() -> Vec<Post> {
        vec![post("a", &["ios", "swift"]), post("b", &["android", "kotlin"])]
    }

    #[test]
    fn test_initial_state_is_all() {
        let view = ListingView::new(sample(), TagFilter::default());
        assert_eq!(view.filter(), &TagFilter::All);
        assert_eq!(view.posts().len(), 2);
    }

    #[test]
    fn test_filter_keeps_tag_chips() {
        let view = ListingView::new(sample(), TagFilter::from_selection("android"));
        let slugs: Vec<_> = view.posts().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b"]);
        assert_eq!(view.tags(), &["ios", "swift", "android", "kotlin"]);
    }

    #[test]
    fn test_select_and_reset() {
        let mut view = ListingView::new(sample(), TagFilter::All);
        view.select("swift");
        assert_eq!(view.posts().len(), 1);
        assert_eq!(view.posts()[0].slug, "a");

        view.select("nonexistent-tag");
        assert!(view.is_empty());
        assert_eq!(view.tags().len(), 4);

        view.select(ALL);
        assert_eq!(view.filter(), &TagFilter::All);
        assert_eq!(view.posts().len(), 2);
    }

    #[test]
    fn test_distinct_tags_first_appearance() {
        let posts = vec![post("a", &["swift", "ios"]), post("b", &["android", "ios"])];
        assert_eq!(distinct_tags(&posts), vec!["swift", "ios", "android"]);
    }

    #[test]
    fn test_serialize_view() {
        let view = ListingView::new(sample(), TagFilter::from_selection("ios"));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["selectedTag"], "ios");
        assert_eq!(json["posts"].as_array().unwrap().len(), 1);
        assert_eq!(json["tags"].as_array().unwrap().len(), 4);
        assert!(json.get("all").is_none());
    }
}
