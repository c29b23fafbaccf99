//! Tag chip helpers

/// Tag chips shown on a listing card
pub const CARD_TAG_LIMIT: usize = 3;

/// Human label for a tag chip: "best-practices" -> "best practices"
pub fn tag_label(tag: &str) -> String {
    tag.replace('-', " ")
}

/// The tags shown on a listing card, in the post's own order
pub fn card_tags(tags: &[String]) -> &[String] {
    &tags[..tags.len().min(CARD_TAG_LIMIT)]
}
