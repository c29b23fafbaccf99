//! Configuration module

mod blog;

pub use blog::BlogConfig;
pub use blog::FrontMatterDefaults;
pub use blog::HighlightConfig;
pub use blog::ServerConfig;
