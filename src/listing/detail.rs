//! Single-post detail view

use serde::Serialize;
use thiserror::Error;

use crate::content::{MarkdownRenderer, Post, PostRepository, RenderError, RenderedPost};

#[derive(Debug, Error)]
pub enum DetailError {
    #[error("post `{0}` not found")]
    NotFound(String),

    #[error("failed to render post `{slug}`: {source}")]
    Render {
        slug: String,
        #[source]
        source: RenderError,
    },
}

/// Link to a neighbouring post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLink {
    pub slug: String,
    pub title: String,
}

impl From<&Post> for NavLink {
    fn from(post: &Post) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
        }
    }
}

/// Detail page model
#[derive(Debug, Clone, Serialize)]
pub struct DetailView {
    pub post: RenderedPost,
    /// Next post towards the top of the listing
    pub newer: Option<NavLink>,
    pub older: Option<NavLink>,
}

/// Resolve `slug` to a rendered post with its navigation links
pub fn resolve_detail(
    repo: &PostRepository,
    renderer: &MarkdownRenderer,
    slug: &str,
) -> Result<DetailView, DetailError> {
    let post = repo
        .get_by_slug(slug)
        .ok_or_else(|| DetailError::NotFound(slug.to_string()))?;

    let html = renderer
        .render(&post.content)
        .map_err(|source| DetailError::Render {
            slug: slug.to_string(),
            source,
        })?;

    let all = repo.get_all();
    let newer = post.newer(&all).map(NavLink::from);
    let older = post.older(&all).map(NavLink::from);

    Ok(DetailView {
        post: RenderedPost::new(post, html),
        newer,
        older,
    })
}
