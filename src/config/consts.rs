// src/config/consts.rs

// Default input locations, relative to the repository root
pub const DEFAULT_REFERENCE_PATH: &str = "scripts/jakarta_csv_export.json";
pub const DEFAULT_LISTINGS_PATH: &str = "src/data/jakarta-schools.ts";
pub const DEFAULT_PROFILES_PATH: &str = "src/data/schools.ts";

// Listing scan
pub const NOISE_PREFIX: &str = "city";

// Profile scan
pub const GENERIC_HEAD_NAMES: &[&str] = &["School Leadership Team", "Interim Principal"];

/// Schools that have a full profile in the profiles source.
pub const FULL_PROFILE_SLUGS: &[&str] = &[
    "jakarta-intercultural-school",
    "british-school-jakarta",
    "acg-school-jakarta",
    "independent-school-of-jakarta",
    "mentari-intercultural-school-jakarta",
    "australian-independent-school-jakarta",
    "sekolah-pelita-harapan",
    "global-jaya-school",
    "binus-school-serpong",
    "sinarmas-world-academy",
    "tunas-muda-school",
    "btb-school",
    "sekolah-pelita-harapan-kemang-village",
    "nord-anglia-school-jakarta",
    "new-zealand-school-jakarta",
    "jakarta-nanyang-school",
];
