// src/scan/profiles.rs
use std::collections::BTreeSet;

use regex::Regex;

use super::{captured, slug_markers};
use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileScan {
    /// Slugs whose head-of-school name is a placeholder.
    pub generic_head: BTreeSet<String>,
    /// Known full-profile slugs that have a marker in the source.
    pub present: BTreeSet<String>,
    /// Known full-profile slugs with no marker, sorted.
    pub missing: Vec<String>,
}

/// Pattern for a slug followed (lazily) by a placeholder head name.
pub fn generic_head_pattern(placeholders: &[String]) -> Result<Regex> {
    let alts = placeholders
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    let pat = format!(r#"slug: "([^"]+)"[\s\S]*?head: \{{\s*name: "(?:{alts})""#);
    Ok(Regex::new(&pat)?)
}

/// Scan the full-profiles source.
pub fn scan(text: &str, placeholders: &[String], known: &[String]) -> Result<ProfileScan> {
    let generic_head = if placeholders.is_empty() {
        BTreeSet::new()
    } else {
        let re = generic_head_pattern(placeholders)?;
        captured(&re, text).map(String::from).collect()
    };

    let markers: BTreeSet<&str> = slug_markers(text).collect();
    let (present, mut missing): (Vec<&String>, Vec<&String>) =
        known.iter().partition(|s| markers.contains(s.as_str()));
    missing.sort();
    missing.dedup();

    if !missing.is_empty() {
        logf!("{} known full profiles have no slug marker", missing.len());
    }
    logd!("profiles: {} with generic head", generic_head.len());

    Ok(ProfileScan {
        generic_head,
        present: present.into_iter().cloned().collect(),
        missing: missing.into_iter().cloned().collect(),
    })
}
