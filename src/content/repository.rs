//! Post repository - queries over the content store

use std::collections::BTreeSet;

use super::post::sort_by_date_desc;
use super::{ContentStore, FrontMatter, Post};
use crate::config::{BlogConfig, FrontMatterDefaults};

/// Loads posts from a [`ContentStore`]
///
/// Nothing is cached: every query re-reads the store, so edits to the
/// content files show up on the next call.
#[derive(Debug, Clone)]
pub struct PostRepository {
    store: ContentStore,
    defaults: FrontMatterDefaults,
    words_per_minute: usize,
}

impl PostRepository {
    pub fn new(store: ContentStore, defaults: FrontMatterDefaults, words_per_minute: usize) -> Self {
        Self {
            store,
            defaults,
            words_per_minute,
        }
    }

    /// Build a repository from configuration, with paths relative to `base_dir`
    pub fn from_config(config: &BlogConfig, base_dir: &std::path::Path) -> Self {
        let store = ContentStore::open(base_dir.join(&config.content_dir), &config.extensions);
        Self::new(store, config.defaults.clone(), config.words_per_minute)
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Slugs of every available post
    pub fn list_slugs(&self) -> Vec<String> {
        self.store.list_slugs()
    }

    /// Load one post; `None` if the slug has no readable content
    pub fn get_by_slug(&self, slug: &str) -> Option<Post> {
        let raw = self.store.read(slug)?;
        let (fm, body) = FrontMatter::parse(&raw);
        Some(Post::from_source(
            slug,
            fm,
            body,
            &self.defaults,
            self.words_per_minute,
        ))
    }

    /// All posts, newest first
    pub fn get_all(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .list_slugs()
            .iter()
            .filter_map(|slug| self.get_by_slug(slug))
            .collect();
        sort_by_date_desc(&mut posts);
        posts
    }

    pub fn get_featured(&self) -> Vec<Post> {
        self.get_all().into_iter().filter(|p| p.featured).collect()
    }

    /// Posts carrying exactly `tag` (case-sensitive)
    pub fn get_by_tag(&self, tag: &str) -> Vec<Post> {
        self.get_all()
            .into_iter()
            .filter(|p| p.has_tag(tag))
            .collect()
    }

    /// Every tag in use, deduplicated and sorted
    pub fn get_all_tags(&self) -> Vec<String> {
        let tags: BTreeSet<String> = self
            .get_all()
            .into_iter()
            .flat_map(|p| p.tags)
            .collect();
        tags.into_iter().collect()
    }
}
