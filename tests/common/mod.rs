// tests/common/mod.rs
#![allow(dead_code)]
use std::fs;
use std::path::{Path, PathBuf};

pub const REFERENCE: &str = r#"{
  "alpha-school": { "phone": "+62 21 1", "addressFull": "Jl. Alpha 1", "headName": "Ann Lee" },
  "beta-school": { "email": "info@beta.sch.id", "ibAverage": "34", "foundedYear": "1990" },
  "gamma-school": { "ibPassRate": "97%", "lastInspected": "2023", "facilities": "Pool" },
  "export-only": { "phone": "+62 21 9" }
}"#;

pub const LISTINGS: &str = r#"
export const cities = [
  { slug: "city-jakarta", name: "Jakarta" },
];

export const schools = [
  {
    slug: "alpha-school",
    citySlug: "jakarta",
    name: "Alpha School",
  },
  {
    slug: "beta-school",
    name: "Beta School",
    phone: "+62 21 2",
  },
  {
    slug: "gamma-school",
    name: "Gamma School",
    examResults: [
      { label: "IB", value: "36" },
    ],
  },
];
"#;

pub const PROFILES: &str = r#"
export const schools: SchoolProfile[] = [
{
  slug: "acg-school-jakarta",
  citySlug: "jakarta",
  head: {
    name: "Interim Principal",
    since: 2024,
  },
},
{
  slug: "british-school-jakarta",
  head: { name: "Simon Taylor", since: 2020 },
},
];
"#;

/// Fresh directory under the system temp dir.
pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("school_audit_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Lay out a repo with the three inputs at their default paths.
pub fn write_repo(root: &Path, reference: &str, listings: &str, profiles: &str) {
    fs::create_dir_all(root.join("scripts")).unwrap();
    fs::create_dir_all(root.join("src/data")).unwrap();
    fs::write(root.join("scripts/jakarta_csv_export.json"), reference).unwrap();
    fs::write(root.join("src/data/jakarta-schools.ts"), listings).unwrap();
    fs::write(root.join("src/data/schools.ts"), profiles).unwrap();
}

pub fn sample_repo(name: &str) -> PathBuf {
    let root = tmp_dir(name);
    write_repo(&root, REFERENCE, LISTINGS, PROFILES);
    root
}
