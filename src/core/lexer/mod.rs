//! Key extraction from web component markup.
//!
//! A single left-to-right pass over the text:
//!
//! 1. `tag_scanner` finds each opening tag and the text following it.
//! 2. `attributes` tokenizes the tag and reads the configured attributes.
//! 3. `keys` splits the key attribute into records (or falls back to the text content).
//! 4. `options` merges the JSON options attribute into those records.
//!
//! The lexer holds nothing but its options, so one instance can be shared
//! across threads and reused for any number of documents.

pub mod attributes;
pub mod keys;
pub mod options;
pub mod tag_scanner;


use serde::{Deserialize, Serialize};

pub use attributes::{AttributeLookup, TagAttributes};
pub use options::OptionsError;
pub use tag_scanner::{Tag, TagScanner};

use crate::core::data::ExtractionRecord;
use crate::utils::{build_line_index, offset_to_line};

pub const DEFAULT_ATTR: &str = "data-i18n";
pub const DEFAULT_OPTION_ATTR: &str = "data-i18n-options";

/// Attribute names the lexer keys off. Fixed once the lexer is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexerOptions {
    /// Attribute carrying one or more `;`-separated keys.
    #[serde(default = "default_attr")]
    pub attr: String,
    /// Attribute carrying a JSON object of extraction options.
    #[serde(default = "default_option_attr")]
    pub option_attr: String,
}

fn default_attr() -> String {
    DEFAULT_ATTR.to_string()
}

fn default_option_attr() -> String {
    DEFAULT_OPTION_ATTR.to_string()
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            attr: default_attr(),
            option_attr: default_option_attr(),
        }
    }
}

/// A tag whose options attribute could not be merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsWarning {
    /// Line of the tag's `<` (1-indexed).
    pub line: usize,
    pub message: String,
}

/// Records of one document plus the warnings raised while extracting them.
#[derive(Debug, Default)]
pub struct LexerOutput {
    pub records: Vec<ExtractionRecord>,
    pub warnings: Vec<OptionsWarning>,
}

#[derive(Debug, Clone, Default)]
pub struct Lexer {
    options: LexerOptions,
}

impl Lexer {
    pub fn new(options: LexerOptions) -> Self {
        Self { options }
    }

    /// Extract every key record from `text`, in document order.
    ///
    /// Never fails: malformed markup is skipped and malformed options only
    /// cost the affected tag its `defaultValue`.
    pub fn extract(&self, text: &str) -> Vec<ExtractionRecord> {
        self.extract_with_warnings(text).records
    }

    /// Same records as [`Lexer::extract`], plus a warning per tag with malformed options.
    pub fn extract_with_warnings(&self, text: &str) -> LexerOutput {
        let mut output = LexerOutput::default();
        let mut line_index: Option<Vec<usize>> = None;

        for tag in TagScanner::new(text) {
            // Most tags carry no keys; skip tokenizing them.
            if !tag.attributes.contains(self.options.attr.as_str()) {
                continue;
            }

            let attributes = TagAttributes::parse(tag.attributes);
            let mut records = keys::normalize(
                attributes.read(&self.options.attr),
                tag.following_text,
            );
            if records.is_empty() {
                continue;
            }

            if let Err(err) = options::merge(&mut records, &attributes, &self.options.option_attr)
            {
                let index = line_index.get_or_insert_with(|| build_line_index(text));
                output.warnings.push(OptionsWarning {
                    line: offset_to_line(index, tag.offset),
                    message: format!("<{}> {}", tag.name, err),
                });
            }

            output.records.extend(records);
        }

        output
    }
}
