//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Path prefix for the blog pages
pub const BLOG_ROOT: &str = "/blog";

/// Characters left as-is in a query value
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// URL of a post's detail page
///
/// # Examples
/// ```ignore
/// post_url("welcome") // -> "/blog/welcome"
/// ```
pub fn post_url(slug: &str) -> String {
    format!("{}/{}", BLOG_ROOT, slug)
}

/// URL of the listing page with a tag selected
pub fn tag_url(tag: &str) -> String {
    format!(
        "{}?tag={}",
        BLOG_ROOT,
        utf8_percent_encode(tag, QUERY_VALUE)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_url() {
        assert_eq!(post_url("ios-app-architecture-guide"), "/blog/ios-app-architecture-guide");
    }

    #[test]
    fn test_tag_url() {
        assert_eq!(tag_url("best-practices"), "/blog?tag=best-practices");
        assert_eq!(tag_url("c#"), "/blog?tag=c%23");
    }
}
