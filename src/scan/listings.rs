// src/scan/listings.rs
use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::{captured, slug_markers};

static WITH_CONTACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"slug: "([^"]+)"[^}]*phone:"#).expect("contact pattern")
});

static WITH_EXAM_RESULTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"slug: "([^"]+)"[^}]*examResults: \[\s*\{"#).expect("exam results pattern")
});

/// Field coverage of the listing cards, by slug.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingScan {
    /// Distinct listing slugs, sorted, noise removed.
    pub all_slugs: Vec<String>,
    pub with_contact: BTreeSet<String>,
    pub with_exam_results: BTreeSet<String>,
}

impl ListingScan {
    /// Listing slugs with no contact marker in their window.
    pub fn missing_contact(&self) -> Vec<&str> {
        self.all_slugs
            .iter()
            .filter(|s| !self.with_contact.contains(s.as_str()))
            .map(String::as_str)
            .collect()
    }
}

/// Scan the listings source.
///
/// `with_contact` / `with_exam_results` are taken as matched; only the slug
/// list drops values starting with `noise_prefix`.
pub fn scan(text: &str, noise_prefix: &str) -> ListingScan {
    let all: BTreeSet<&str> = slug_markers(text)
        .filter(|s| !s.starts_with(noise_prefix))
        .collect();

    let with_contact = captured(&WITH_CONTACT, text).map(String::from).collect();
    let with_exam_results = captured(&WITH_EXAM_RESULTS, text).map(String::from).collect();

    let out = ListingScan {
        all_slugs: all.into_iter().map(String::from).collect(),
        with_contact,
        with_exam_results,
    };
    logd!(
        "listings: {} slugs, {} with contact, {} with exam results",
        out.all_slugs.len(),
        out.with_contact.len(),
        out.with_exam_results.len()
    );
    out
}
