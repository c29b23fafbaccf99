//! List posts

use anyhow::Result;
use std::io::Write;

use crate::helpers::{card_tags, display_date, tag_label};
use crate::listing::{ListingView, TagFilter};
use crate::Blog;

/// Print the listing, optionally narrowed to one tag or to featured posts
pub fn run(blog: &Blog, tag: Option<&str>, featured: bool) -> Result<()> {
    let filter = tag.map(TagFilter::from_selection).unwrap_or_default();
    let posts = if featured {
        blog.repository().get_featured()
    } else {
        blog.posts()
    };
    let view = ListingView::new(posts, filter);

    let stdout = std::io::stdout();
    write_listing(&mut stdout.lock(), &view)
}

/// Write a listing view as plain text
pub fn write_listing<W: Write>(out: &mut W, view: &ListingView) -> Result<()> {
    writeln!(out, "Posts ({}) [{}]:", view.posts().len(), view.filter())?;
    for post in view.posts() {
        let tags: Vec<String> = card_tags(&post.tags).iter().map(|t| tag_label(t)).collect();
        writeln!(
            out,
            "  {} - {} [{}] {} ({})",
            display_date(&post.date),
            post.title,
            post.slug,
            post.reading_time,
            tags.join(", ")
        )?;
    }

    if view.is_empty() {
        writeln!(out, "  No posts found for the selected tag.")?;
    }

    writeln!(out, "Tags: {}", view.tags().join(", "))?;
    Ok(())
}
