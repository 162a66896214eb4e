//! Core data types shared by the lexer and the file pipeline.
//!
//! - `record`: ExtractionRecord, the unit of output handed to catalog writers

pub mod record;

pub use record::ExtractionRecord;
