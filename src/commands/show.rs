//! Render a single post

use anyhow::Result;

use crate::listing::DetailError;
use crate::templates::TemplateRenderer;
use crate::Blog;

/// Print a post's rendered HTML; `page` wraps it in the full detail template
pub fn run(blog: &Blog, slug: &str, page: bool) -> Result<()> {
    let view = match blog.detail(slug) {
        Ok(view) => view,
        Err(DetailError::NotFound(_)) => anyhow::bail!("Post not found: {}", slug),
        Err(e) => return Err(e.into()),
    };

    if page {
        let templates = TemplateRenderer::new()?;
        println!("{}", templates.render_detail(&view)?);
    } else {
        println!("{}", view.post.html);
    }

    Ok(())
}
