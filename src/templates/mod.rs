//! Blog page templates using the Tera template engine
//!
//! Templates are embedded in the binary; HTML autoescaping stays on, so only
//! rendered post bodies and `<time>` tags are marked `safe`.

use anyhow::Result;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::helpers;
use crate::listing::{DetailView, ListingView};

/// Template renderer for the listing, detail and not-found pages
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all blog templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("blog/layout.html")),
            ("index.html", include_str!("blog/index.html")),
            ("post.html", include_str!("blog/post.html")),
            ("not_found.html", include_str!("blog/not_found.html")),
        ])?;

        tera.register_filter("tag_label", tag_label_filter);
        tera.register_filter("tag_url", tag_url_filter);
        tera.register_filter("post_url", post_url_filter);
        tera.register_filter("time_tag", time_tag_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render the listing page
    pub fn render_listing(&self, view: &ListingView) -> Result<String> {
        self.render("index.html", &Context::from_serialize(view)?)
    }

    /// Render a post's detail page
    pub fn render_detail(&self, view: &DetailView) -> Result<String> {
        self.render("post.html", &Context::from_serialize(view)?)
    }

    /// Render the not-found page
    pub fn render_not_found(&self, message: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("message", message);
        self.render("not_found.html", &context)
    }
}

/// Tera filter: tag chip label
fn tag_label_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("tag_label", "value", String, value);
    Ok(tera::Value::String(helpers::tag_label(&s)))
}

/// Tera filter: listing URL with a tag selected
fn tag_url_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("tag_url", "value", String, value);
    Ok(tera::Value::String(helpers::tag_url(&s)))
}

/// Tera filter: detail page URL for a slug
fn post_url_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("post_url", "value", String, value);
    Ok(tera::Value::String(helpers::post_url(&s)))
}

/// Tera filter: front-matter date to a `<time>` element
fn time_tag_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("time_tag", "value", String, value);
    Ok(tera::Value::String(helpers::time_tag(&s)))
}
