//! Blog configuration (_blog.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Author used when a post does not name one
pub const DEFAULT_AUTHOR: &str = "Synchromation Team";

/// Main blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Directory holding the post files, relative to the base directory
    pub content_dir: String,
    /// File extensions recognised as posts (without the dot)
    pub extensions: Vec<String>,
    /// Reading speed used for the reading-time estimate
    pub words_per_minute: usize,

    #[serde(default)]
    pub highlight: HighlightConfig,
    #[serde(default)]
    pub server: ServerConfig,

    /// Values substituted for absent or malformed front-matter fields
    #[serde(default)]
    pub defaults: FrontMatterDefaults,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            content_dir: "src/content/blog".to_string(),
            extensions: vec!["mdx".to_string(), "md".to_string()],
            words_per_minute: 200,
            highlight: HighlightConfig::default(),
            server: ServerConfig::default(),
            defaults: FrontMatterDefaults::default(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Syntax highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Name of a syntect default theme
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

/// Preview server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}

/// Front-matter defaults, merged field by field at load time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatterDefaults {
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub tags: Vec<String>,
    pub featured: bool,
}

impl Default for FrontMatterDefaults {
    fn default() -> Self {
        Self {
            title: String::new(),
            excerpt: String::new(),
            author: DEFAULT_AUTHOR.to_string(),
            tags: Vec::new(),
            featured: false,
        }
    }
}
