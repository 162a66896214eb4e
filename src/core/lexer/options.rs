//! Merging the JSON options attribute into a tag's records.

use std::fmt;

use serde_json::{Map, Value};

use super::attributes::{AttributeLookup, TagAttributes};
use crate::core::data::ExtractionRecord;

/// Option field copied into [`ExtractionRecord::default_value`].
pub const DEFAULT_VALUE_FIELD: &str = "defaultValue";

/// The options attribute is present but unusable.
#[derive(Debug)]
pub enum OptionsError {
    InvalidJson(serde_json::Error),
    NotAnObject,
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::InvalidJson(err) => write!(f, "invalid options JSON: {}", err),
            OptionsError::NotAnObject => write!(f, "options must be a JSON object"),
        }
    }
}

impl std::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptionsError::InvalidJson(err) => Some(err),
            OptionsError::NotAnObject => None,
        }
    }
}

/// Apply the options declared on `attributes` under `option_attr` to every record.
///
/// Unknown fields are ignored, as is a `defaultValue` that is not a string.
/// On error the records are left untouched.
pub fn merge(
    records: &mut [ExtractionRecord],
    attributes: &TagAttributes<'_>,
    option_attr: &str,
) -> Result<(), OptionsError> {
    let AttributeLookup::Value(raw) = attributes.read(option_attr) else {
        return Ok(());
    };

    let options = parse_options(raw)?;
    if let Some(Value::String(default_value)) = options.get(DEFAULT_VALUE_FIELD) {
        for record in records.iter_mut() {
            record.default_value = Some(default_value.clone());
        }
    }
    Ok(())
}

fn parse_options(raw: &str) -> Result<Map<String, Value>, OptionsError> {
    match serde_json::from_str::<Value>(raw).map_err(OptionsError::InvalidJson)? {
        Value::Object(options) => Ok(options),
        _ => Err(OptionsError::NotAnObject),
    }
}
