//! Filesystem content store - one file per post, named `<slug>.<ext>`

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Read-only handle on the directory that holds post files
#[derive(Debug, Clone)]
pub struct ContentStore {
    dir: PathBuf,
    extensions: Vec<String>,
}

impl ContentStore {
    /// Open a store rooted at `dir`; a missing directory is not an error
    pub fn open<P: AsRef<Path>>(dir: P, extensions: &[String]) -> Self {
        let dir = dir.as_ref().to_path_buf();
        if !dir.is_dir() {
            tracing::warn!("Content directory {:?} does not exist, no posts available", dir);
        }
        Self {
            dir,
            extensions: extensions.to_vec(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Slugs of every post file, in file-name order
    pub fn list_slugs(&self) -> Vec<String> {
        if !self.dir.is_dir() {
            return Vec::new();
        }

        let mut slugs: Vec<String> = WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {:?}: {}", self.dir, e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| self.slug_for(entry.path()))
            .collect();

        // `post.md` and `post.mdx` name the same post
        slugs.sort();
        slugs.dedup();

        tracing::debug!("Found {} posts in {:?}", slugs.len(), self.dir);
        slugs
    }

    /// Raw file contents for `slug`, or `None` if there is no readable file
    pub fn read(&self, slug: &str) -> Option<String> {
        if !is_valid_slug(slug) {
            tracing::debug!("Rejecting invalid slug {:?}", slug);
            return None;
        }

        let path = self.path_for(slug)?;
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::warn!("Failed to read post {:?}: {}", path, e);
                None
            }
        }
    }

    /// First existing file for `slug`, trying extensions in configured order
    fn path_for(&self, slug: &str) -> Option<PathBuf> {
        self.extensions
            .iter()
            .map(|ext| self.dir.join(format!("{}.{}", slug, ext)))
            .find(|path| path.is_file())
    }

    fn slug_for(&self, path: &Path) -> Option<String> {
        let ext = path.extension()?.to_str()?;
        if !self.extensions.iter().any(|e| e == ext) {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        if !is_valid_slug(stem) {
            tracing::warn!("Skipping {:?}: file name is not a URL-safe slug", path);
            return None;
        }
        Some(stem.to_string())
    }
}

/// URL-safe, and never able to escape the content directory
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('.')
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
