// src/reference.rs
//
// The CSV-derived export: a JSON object mapping slug -> record of mostly
// string fields. Loaded once, read-only afterwards.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AuditError, Result};

/// Slug -> record, ordered by slug.
pub type ReferenceSet = BTreeMap<String, ReferenceRecord>;

/// One exported row, column -> value exactly as exported.
/// Values keep their JSON type; a repeated column keeps the last value.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ReferenceRecord(pub BTreeMap<String, Value>);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    AddressFull,
    HeadName,
    LastInspected,
    InspectionRating,
    Facilities,
    IbAverage,
    IbPassRate,
    FoundedYear,
    Phone,
    Email,
    Website,
}

impl Field {
    /// Key as it appears in the export.
    pub fn key(self) -> &'static str {
        match self {
            Field::AddressFull => "addressFull",
            Field::HeadName => "headName",
            Field::LastInspected => "lastInspected",
            Field::InspectionRating => "inspectionRating",
            Field::Facilities => "facilities",
            Field::IbAverage => "ibAverage",
            Field::IbPassRate => "ibPassRate",
            Field::FoundedYear => "foundedYear",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Website => "website",
        }
    }
}

pub const CONTACT_FIELDS: &[Field] = &[Field::Phone, Field::Email, Field::Website];
pub const EXAM_FIELDS: &[Field] = &[Field::IbAverage, Field::IbPassRate];
pub const INSPECTION_FIELDS: &[Field] = &[Field::LastInspected, Field::InspectionRating];

impl ReferenceRecord {
    pub fn get(&self, field: Field) -> Option<&Value> {
        self.0.get(field.key())
    }

    /// String value of `field`, if it is a string.
    pub fn text(&self, field: Field) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Truthy value. Whitespace-only strings count as present.
    pub fn has(&self, field: Field) -> bool {
        self.get(field).is_some_and(truthy)
    }

    pub fn has_any(&self, fields: &[Field]) -> bool {
        fields.iter().any(|f| self.has(*f))
    }

    /// First truthy value of `fields`.
    pub fn first_value(&self, fields: &[Field]) -> Option<&Value> {
        fields
            .iter()
            .filter_map(|f| self.get(*f))
            .find(|v| truthy(v))
    }

    /// First truthy value of `fields` is non-blank once trimmed.
    /// Non-string values have nothing to trim and count as present.
    pub fn has_trimmed(&self, fields: &[Field]) -> bool {
        match self.first_value(fields) {
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
            None => false,
        }
    }
}

/// `null`, `false`, `0`, `""`, `[]` and `{}` are empty; everything else is a value.
pub fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Parse the export text.
pub fn parse(text: &str) -> std::result::Result<ReferenceSet, serde_json::Error> {
    serde_json::from_str(text)
}

/// Read and parse the export file. No partial load: any failure aborts.
pub fn load(path: &Path) -> Result<ReferenceSet> {
    let text = fs::read_to_string(path).map_err(|source| AuditError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let set = parse(&text).map_err(|source| AuditError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    logf!("loaded {} reference records from {}", set.len(), path.display());
    Ok(set)
}

/// Which slugs the export can supply each field group for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Coverage {
    pub total: usize,
    pub address: BTreeSet<String>,
    pub head: BTreeSet<String>,
    pub inspection: BTreeSet<String>,
    pub facilities: BTreeSet<String>,
    pub ib: BTreeSet<String>,
    pub founded: BTreeSet<String>,
}

impl Coverage {
    pub fn of(reference: &ReferenceSet) -> Self {
        Self {
            total: reference.len(),
            address: slugs_with(reference, &[Field::AddressFull]),
            head: slugs_with(reference, &[Field::HeadName]),
            inspection: slugs_with(reference, INSPECTION_FIELDS),
            facilities: slugs_with(reference, &[Field::Facilities]),
            ib: slugs_with(reference, EXAM_FIELDS),
            founded: slugs_with(reference, &[Field::FoundedYear]),
        }
    }
}

fn slugs_with(reference: &ReferenceSet, fields: &[Field]) -> BTreeSet<String> {
    reference
        .iter()
        .filter(|(_, r)| r.has_trimmed(fields))
        .map(|(slug, _)| slug.clone())
        .collect()
}
