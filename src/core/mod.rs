//! Core extraction engine and the file layer around it.
//!
//! ## Module Structure
//!
//! - `data`: Output record types
//! - `lexer`: Markup scanning and key extraction (pure, no I/O)
//! - `file_scanner`: Source file discovery (walkdir + glob filters)
//! - `pipeline`: Parallel extraction over discovered files

pub mod data;
pub mod file_scanner;
pub mod lexer;
pub mod pipeline;

pub use data::ExtractionRecord;
pub use lexer::{Lexer, LexerOptions, LexerOutput, OptionsWarning};
pub use pipeline::{ExtractionSummary, FileExtraction, ReadError, extract_files};
