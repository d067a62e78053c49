// src/gaps.rs
use std::fmt;

use crate::reference::{ReferenceRecord, ReferenceSet, CONTACT_FIELDS, EXAM_FIELDS};
use crate::scan::ListingScan;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum GapKind {
    Contact,
    ExamResults,
}

impl GapKind {
    pub fn as_str(self) -> &'static str {
        match self {
            GapKind::Contact => "contact",
            GapKind::ExamResults => "exam_results",
        }
    }
}

impl fmt::Display for GapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A listing field group the export could fill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gap {
    pub slug: String,
    pub kinds: Vec<GapKind>,
}

impl Gap {
    /// "contact, exam_results"
    pub fn kinds_joined(&self) -> String {
        self.kinds
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Listing slugs (in listing order) for which the export has data the listing lacks.
/// Slugs absent from the export never produce a gap.
pub fn compute(reference: &ReferenceSet, listings: &ListingScan) -> Vec<Gap> {
    let empty = ReferenceRecord::default();
    let mut out = Vec::new();

    for slug in &listings.all_slugs {
        let r = reference.get(slug).unwrap_or(&empty);
        let mut kinds = Vec::with_capacity(2);

        if !listings.with_contact.contains(slug) && r.has_any(CONTACT_FIELDS) {
            kinds.push(GapKind::Contact);
        }
        if !listings.with_exam_results.contains(slug) && r.has_any(EXAM_FIELDS) {
            kinds.push(GapKind::ExamResults);
        }

        if !kinds.is_empty() {
            out.push(Gap { slug: slug.clone(), kinds });
        }
    }

    logd!("{} listings could be filled from the export", out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference;
    use crate::scan::listings;

    fn gaps(reference_json: &str, listing_text: &str) -> Vec<Gap> {
        let reference = reference::parse(reference_json).unwrap();
        let scan = listings::scan(listing_text, "city");
        compute(&reference, &scan)
    }

    #[test]
    fn phone_in_export_but_not_listing_is_contact_gap() {
        let g = gaps(r#"{"a": {"phone": "123"}}"#, r#"{ slug: "a", name: "A" }"#);
        assert_eq!(g, vec![Gap { slug: s!("a"), kinds: vec![GapKind::Contact] }]);
        assert_eq!(format!("{}: {}", g[0].slug, g[0].kinds_joined()), "a: contact");
    }

    #[test]
    fn empty_export_yields_no_gaps() {
        assert!(gaps("{}", r#"{ slug: "b" }"#).is_empty());
    }

    #[test]
    fn listing_with_contact_has_no_contact_gap() {
        let g = gaps(r#"{"a": {"email": "a@b.c"}}"#, r#"{ slug: "a", phone: "1" }"#);
        assert!(g.is_empty());
    }

    #[test]
    fn ib_scores_give_exam_gap_after_contact() {
        let g = gaps(
            r#"{"a": {"website": "https://a", "ibPassRate": "100%"}}"#,
            r#"{ slug: "a" }"#,
        );
        assert_eq!(g[0].kinds, [GapKind::Contact, GapKind::ExamResults]);
        assert_eq!(g[0].kinds_joined(), "contact, exam_results");
    }

    #[test]
    fn empty_strings_do_not_count() {
        let g = gaps(r#"{"a": {"phone": "", "ibAverage": ""}}"#, r#"{ slug: "a" }"#);
        assert!(g.is_empty());
    }

    #[test]
    fn export_only_slugs_are_ignored() {
        let g = gaps(r#"{"z": {"phone": "1"}}"#, r#"{ slug: "a" }"#);
        assert!(g.is_empty());
    }

    #[test]
    fn gaps_follow_sorted_listing_order() {
        let g = gaps(
            r#"{"b": {"phone": "1"}, "a": {"phone": "2"}}"#,
            r#"{ slug: "b" } { slug: "a" }"#,
        );
        let slugs: Vec<&str> = g.iter().map(|g| g.slug.as_str()).collect();
        assert_eq!(slugs, ["a", "b"]);
    }
}
