//! synchro-blog: the blog content pipeline behind the Synchromation site
//!
//! Posts are markdown files with YAML front-matter. This crate discovers
//! them, derives listing fields such as reading time, filters and sorts
//! them for the listing page, and renders single posts to HTML with
//! syntax-highlighted code blocks.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod listing;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{MarkdownRenderer, Post, PostRepository};
use listing::{DetailError, DetailView, ListingView, TagFilter};

/// Name of the configuration file looked up in the base directory
pub const CONFIG_FILE: &str = "_blog.yml";

/// The blog: configuration, content store handle and renderer
pub struct Blog {
    /// Blog configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: PathBuf,
    repository: PostRepository,
    renderer: MarkdownRenderer,
}

impl Blog {
    /// Open the blog in a directory, reading `_blog.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        Self::with_config(base_dir, config)
    }

    /// Open the blog with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::BlogConfig) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let repository = PostRepository::from_config(&config, &base_dir);
        let renderer = MarkdownRenderer::with_options(&config.highlight)?;

        tracing::debug!("Content directory: {:?}", repository.store().dir());

        Ok(Self {
            config,
            base_dir,
            repository,
            renderer,
        })
    }

    pub fn repository(&self) -> &PostRepository {
        &self.repository
    }

    /// All posts, newest first
    pub fn posts(&self) -> Vec<Post> {
        self.repository.get_all()
    }

    /// Listing page model for the given filter
    pub fn listing(&self, filter: TagFilter) -> ListingView {
        ListingView::new(self.repository.get_all(), filter)
    }

    /// Detail page model for one post
    pub fn detail(&self, slug: &str) -> Result<DetailView, DetailError> {
        listing::resolve_detail(&self.repository, &self.renderer, slug)
    }
}
