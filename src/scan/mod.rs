// src/scan/mod.rs
//! # Source scanners
//!
//! Text scanners over the two TypeScript data sources. Neither source is
//! parsed as TypeScript; records are found by their `slug: "<value>"` marker and
//! fields are attributed to a record by what follows the marker.
//!
//! ## Windows
//! - **Listings**: a field belongs to the slug when it appears before the next
//!   `}` (`[^}]*`). Nested objects close the window early, so a `phone:` that
//!   sits after a nested `{ … }` is missed. That false negative is accepted.
//! - **Profiles**: the window is lazy and unbounded (`[\s\S]*?`), ending at the
//!   first placeholder head that follows. A slug with a real head name can
//!   therefore be attributed a later record's placeholder head.
//!
//! Matching is leftmost-first and non-overlapping: once a window is consumed,
//! slugs inside it are not reconsidered. Changing any of this changes the
//! counts in the report.
//!
//! ## Testing notes
//! Scanners are pure functions of the text; tests feed short synthetic snippets.
pub mod listings;
pub mod profiles;

pub use listings::ListingScan;
pub use profiles::ProfileScan;

use std::sync::LazyLock;

use regex::Regex;

static SLUG_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"slug: "([^"]+)""#).expect("slug marker pattern"));

/// Every `slug: "<value>"` value, in source order (duplicates kept).
pub fn slug_markers(text: &str) -> impl Iterator<Item = &str> {
    captured(&SLUG_MARKER, text)
}

/// First capture group of every non-overlapping match.
pub(crate) fn captured<'t>(re: &'t Regex, text: &'t str) -> impl Iterator<Item = &'t str> {
    re.captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
}
