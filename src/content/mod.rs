//! Content module - post files, front-matter, and markdown rendering

mod frontmatter;
mod markdown;
pub mod post;
mod repository;
mod store;

pub use frontmatter::FrontMatter;
pub use markdown::{MarkdownRenderer, RenderError};
pub use post::{Post, RenderedPost};
pub use repository::PostRepository;
pub use store::{is_valid_slug, ContentStore};
