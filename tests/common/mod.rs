#![allow(dead_code)]

use std::fs;
use std::path::Path;

use synchro_blog::config::BlogConfig;
use synchro_blog::Blog;
use tempfile::TempDir;

pub const WELCOME: &str = r#"---
title: "Welcome to Synchromation's New Blog"
excerpt: Introducing our new blog.
date: 2024-01-15
tags:
  - announcement
  - ios-development
  - ios
  - swift
featured: true
---

Welcome to the blog.
"#;

pub const SWIFTUI: &str = r#"---
title: "SwiftUI Best Practices: Building Maintainable iOS Apps"
excerpt: Learn essential SwiftUI best practices.
date: 2024-01-22
author: Jane Appleseed
tags: [ios, swiftui, best-practices, architecture]
featured: true
---

## Composition

| Pattern | Use |
|---|---|
| MVVM | Views |

```rust
fn main() {}
```
"#;

pub const ARCHITECTURE: &str = r#"---
title: "iOS App Architecture: Building Scalable Applications"
excerpt: Explore modern iOS architecture patterns.
date: 2024-01-29
tags: [ios, architecture, swift, patterns]
---

Architecture matters.
"#;

/// A blog rooted in a temp dir with the three seed posts under the default content dir
pub fn seeded_blog() -> (TempDir, Blog) {
    let tmp = tempfile::tempdir().unwrap();
    let dir = content_dir(tmp.path());
    fs::create_dir_all(&dir).unwrap();
    // Written oldest-name-first so enumeration order differs from date order
    fs::write(dir.join("ios-app-architecture-guide.mdx"), ARCHITECTURE).unwrap();
    fs::write(dir.join("ios-swiftui-best-practices.mdx"), SWIFTUI).unwrap();
    fs::write(dir.join("welcome-to-synchromation.mdx"), WELCOME).unwrap();
    let blog = Blog::new(tmp.path()).unwrap();
    (tmp, blog)
}

pub fn content_dir(base: &Path) -> std::path::PathBuf {
    base.join(BlogConfig::default().content_dir)
}
