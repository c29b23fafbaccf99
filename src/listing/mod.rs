//! Listing and detail views composed from repository output

mod detail;
mod filter;

pub use detail::{resolve_detail, DetailError, DetailView, NavLink};
pub use filter::{distinct_tags, ListingView, TagFilter, ALL};
