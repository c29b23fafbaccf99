//! List tags

use anyhow::Result;

use crate::Blog;

/// Print every tag in use, sorted, with its post count
pub fn run(blog: &Blog) -> Result<()> {
    let repo = blog.repository();
    let posts = repo.get_all();
    let tags = repo.get_all_tags();

    println!("Tags ({}):", tags.len());
    for tag in tags {
        let count = posts.iter().filter(|p| p.has_tag(&tag)).count();
        println!("  {} ({})", tag, count);
    }

    Ok(())
}
