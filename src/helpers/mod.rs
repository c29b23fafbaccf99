//! Helper functions for templates and CLI output
//!
//! Display formatting shared by the page templates and the `list` command:
//! long dates, tag chip labels, and blog URLs.

mod date;
mod tags;
mod url;

pub use date::*;
pub use tags::*;
pub use url::*;
