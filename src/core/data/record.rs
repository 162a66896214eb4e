use serde::{Deserialize, Serialize};

/// A single translation key harvested from markup.
///
/// Serialized in the shape downstream catalog writers expect:
/// `{ "key": "greeting", "defaultValue": "Hello" }`, with `defaultValue`
/// omitted when the tag carried no options.
///
/// Records have no identity beyond their fields. Two tags declaring the same key
/// produce two equal records; deduplication is left to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionRecord {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl ExtractionRecord {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            default_value: None,
        }
    }

    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }
}
