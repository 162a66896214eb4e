//! Turning a raw attribute value into translation keys.
//!
//! `data-i18n="[title]greeting;farewell"` yields `greeting` and `farewell`.
//! The bracketed qualifier tells the runtime where to apply the translation;
//! extraction only needs the key, so the qualifier is dropped uninterpreted.

use std::sync::LazyLock;

use regex::Regex;

use super::attributes::AttributeLookup;
use crate::core::data::ExtractionRecord;

/// Separator between keys in a single attribute value.
pub const KEY_SEPARATOR: char = ';';

// Matches a leading qualifier such as `[title]`, `[prepend]` or `[html]`.
static QUALIFIER_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\[[^\]]*\]").unwrap());

/// Produce one record per key in document order.
///
/// - `Absent` yields nothing.
/// - `Value` is split on `;`. An explicit empty value (`data-i18n=""`) is one empty
///   candidate, which is dropped; it never falls back to the text content.
/// - `NoValue` uses `fallback_text` as the single candidate.
pub fn normalize(lookup: AttributeLookup<'_>, fallback_text: &str) -> Vec<ExtractionRecord> {
    match lookup {
        AttributeLookup::Absent => Vec::new(),
        AttributeLookup::Value(raw) => raw
            .split(KEY_SEPARATOR)
            .filter_map(normalize_candidate)
            .map(ExtractionRecord::new)
            .collect(),
        AttributeLookup::NoValue => normalize_candidate(fallback_text)
            .map(ExtractionRecord::new)
            .into_iter()
            .collect(),
    }
}

/// Strip the optional qualifier and surrounding whitespace. `None` if nothing is left.
fn normalize_candidate(candidate: &str) -> Option<&str> {
    let candidate = candidate.trim();
    let key = match QUALIFIER_PREFIX.find(candidate) {
        Some(qualifier) => candidate[qualifier.end()..].trim(),
        None => candidate,
    };
    (!key.is_empty()).then_some(key)
}
