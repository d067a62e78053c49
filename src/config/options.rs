// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditOptions {
    pub inputs: InputPaths,
    pub scan: ScanOptions,
    pub verbosity: u8,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            inputs: InputPaths::default(),
            scan: ScanOptions::default(),
            verbosity: crate::log::LEVEL_QUIET,
        }
    }
}

impl AuditOptions {
    /// Defaults, with relative input paths anchored at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let mut opts = Self::default();
        opts.inputs.root = root.into();
        opts
    }
}

/// Where the three inputs live. Relative entries resolve against `root`;
/// absolute ones are used as given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputPaths {
    pub root: PathBuf,
    pub reference: PathBuf,
    pub listings: PathBuf,
    pub profiles: PathBuf,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            reference: PathBuf::from(DEFAULT_REFERENCE_PATH),
            listings: PathBuf::from(DEFAULT_LISTINGS_PATH),
            profiles: PathBuf::from(DEFAULT_PROFILES_PATH),
        }
    }
}

impl InputPaths {
    pub fn reference_path(&self) -> PathBuf { self.resolve(&self.reference) }
    pub fn listings_path(&self) -> PathBuf { self.resolve(&self.listings) }
    pub fn profiles_path(&self) -> PathBuf { self.resolve(&self.profiles) }

    fn resolve(&self, p: &Path) -> PathBuf {
        // join() keeps absolute paths as-is
        self.root.join(p)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    pub noise_prefix: String,
    pub generic_head_names: Vec<String>,
    pub full_profile_slugs: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            noise_prefix: s!(NOISE_PREFIX),
            generic_head_names: GENERIC_HEAD_NAMES.iter().map(|n| s!(*n)).collect(),
            full_profile_slugs: FULL_PROFILE_SLUGS.iter().map(|n| s!(*n)).collect(),
        }
    }
}

/// File name shown in report headings ("jakarta-schools.ts").
pub fn display_name(p: &Path) -> String {
    p.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| p.to_string_lossy().into_owned())
}
