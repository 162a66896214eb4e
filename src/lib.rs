//! wclex - i18n key extraction for web component markup
//!
//! wclex is a CLI tool and library that harvests translation keys from
//! `data-i18n` style attributes in HTML and web component templates, without
//! rendering or fully parsing the markup.
//!
//! ```
//! use wclex::core::{ExtractionRecord, Lexer};
//!
//! let records = Lexer::default().extract(r#"<p data-i18n="[title]greeting;farewell"></p>"#);
//! assert_eq!(
//!     records,
//!     vec![ExtractionRecord::new("greeting"), ExtractionRecord::new("farewell")]
//! );
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine and file pipeline
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
