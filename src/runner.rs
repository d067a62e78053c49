// src/runner.rs
use std::fs;
use std::path::Path;

use crate::{
    config::{options::display_name, AuditOptions},
    error::{AuditError, Result},
    gaps,
    progress::Progress,
    reference::{self, Coverage, ReferenceSet},
    report::{self, AuditInput},
    scan::{listings, profiles},
};

const STAGES: usize = 5;

/// Source texts plus the display names used in headings.
pub struct Sources<'a> {
    pub listings_name: &'a str,
    pub listings_text: &'a str,
    pub profiles_name: &'a str,
    pub profiles_text: &'a str,
}

/// Top-level runner: load the three inputs, scan, compare, render.
/// Any load failure aborts the run before anything is rendered.
pub fn run(opts: &AuditOptions, mut progress: Option<&mut dyn Progress>) -> Result<String> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(STAGES);
    }

    match load_and_audit(opts, &mut progress) {
        Ok(out) => {
            if let Some(p) = progress.as_deref_mut() {
                p.finish();
            }
            Ok(out)
        }
        Err(e) => {
            if let Some(p) = progress.as_deref_mut() {
                p.failed(&e);
            }
            Err(e)
        }
    }
}

fn load_and_audit(opts: &AuditOptions, progress: &mut Option<&mut dyn Progress>) -> Result<String> {
    stage(progress, "loading reference export");
    let reference = reference::load(&opts.inputs.reference_path())?;

    let listings_path = opts.inputs.listings_path();
    let profiles_path = opts.inputs.profiles_path();
    let listings_text = read_source(&listings_path)?;
    let profiles_text = read_source(&profiles_path)?;
    let listings_name = display_name(&listings_path);
    let profiles_name = display_name(&profiles_path);

    audit(
        opts,
        &reference,
        &Sources {
            listings_name: &listings_name,
            listings_text: &listings_text,
            profiles_name: &profiles_name,
            profiles_text: &profiles_text,
        },
        progress,
    )
}

/// Scan + compare + render over already-loaded inputs. No I/O.
pub fn render_audit(opts: &AuditOptions, reference: &ReferenceSet, sources: &Sources<'_>) -> Result<String> {
    audit(opts, reference, sources, &mut None)
}

fn audit(
    opts: &AuditOptions,
    reference: &ReferenceSet,
    src: &Sources<'_>,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<String> {
    let scan_opts = &opts.scan;

    stage(progress, "scanning listings");
    let listing_scan = listings::scan(src.listings_text, &scan_opts.noise_prefix);

    stage(progress, "scanning full profiles");
    let profile_scan = profiles::scan(
        src.profiles_text,
        &scan_opts.generic_head_names,
        &scan_opts.full_profile_slugs,
    )?;

    stage(progress, "comparing against reference export");
    let coverage = Coverage::of(reference);
    let gaps = gaps::compute(reference, &listing_scan);

    stage(progress, "rendering report");
    Ok(report::render(&AuditInput {
        listings_name: src.listings_name,
        profiles_name: src.profiles_name,
        listings: &listing_scan,
        profiles: &profile_scan,
        generic_head_names: &scan_opts.generic_head_names,
        full_profile_count: scan_opts.full_profile_slugs.len(),
        coverage: &coverage,
        gaps: &gaps,
    }))
}

fn stage(progress: &mut Option<&mut dyn Progress>, name: &str) {
    if let Some(p) = progress.as_deref_mut() {
        p.stage(name);
    }
}

fn read_source(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| AuditError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    logd!("read {} bytes from {}", text.len(), path.display());
    Ok(text)
}
