//! Column role detection from a sample record.
//!
//! Each role is resolved by an ordered list of tiers. Tiers are tried top to
//! bottom; within a tier the first column (in record order) whose lowercased
//! name satisfies any of the tier's patterns wins. There is no scoring.

use tempgrid_model::{ColumnMapping, RawRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameMatch {
    Exact(&'static str),
    Contains(&'static str),
}

impl NameMatch {
    fn matches(self, lowered: &str) -> bool {
        match self {
            Self::Exact(pattern) => lowered == pattern,
            Self::Contains(pattern) => lowered.contains(pattern),
        }
    }
}

type Tier = &'static [NameMatch];

const DATE_TIERS: &[Tier] = &[&[NameMatch::Exact("date")], &[NameMatch::Contains("date")]];

const MAX_TIERS: &[Tier] = &[
    &[NameMatch::Contains("tmax")],
    &[
        NameMatch::Contains("temp_max"),
        NameMatch::Contains("temperature_max"),
    ],
    &[NameMatch::Contains("max")],
];

const MIN_TIERS: &[Tier] = &[
    &[NameMatch::Contains("tmin")],
    &[
        NameMatch::Contains("temp_min"),
        NameMatch::Contains("temperature_min"),
    ],
    &[NameMatch::Contains("min")],
];

const SINGLE_TEMP_TIERS: &[Tier] = &[
    &[
        NameMatch::Contains("temp"),
        NameMatch::Contains("temperature"),
    ],
    &[NameMatch::Contains("value")],
];

fn first_match(keys: &[&str], tiers: &[Tier]) -> Option<String> {
    let lowered: Vec<String> = keys.iter().map(|key| key.trim().to_lowercase()).collect();
    tiers.iter().find_map(|tier| {
        keys.iter()
            .zip(&lowered)
            .find(|(_, name)| tier.iter().any(|pattern| pattern.matches(name)))
            .map(|(key, _)| (*key).to_string())
    })
}

/// Identify the date and temperature columns of `sample`.
///
/// The date falls back to the first column when no name mentions a date.
/// Temperature roles that match nothing stay `None`.
pub fn detect_columns(sample: &RawRecord) -> ColumnMapping {
    let keys: Vec<&str> = sample.keys().collect();
    let date_key =
        first_match(&keys, DATE_TIERS).or_else(|| keys.first().map(|key| (*key).to_string()));
    ColumnMapping {
        date_key,
        max_key: first_match(&keys, MAX_TIERS),
        min_key: first_match(&keys, MIN_TIERS),
        single_temp_key: first_match(&keys, SINGLE_TEMP_TIERS),
    }
}
