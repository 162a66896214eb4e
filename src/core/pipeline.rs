//! Batch extraction over many files.
//!
//! Each file is read and lexed independently, so the work is spread across
//! threads with rayon. The lexer is immutable and shared by reference.

use std::fs;

use rayon::prelude::*;

use super::data::ExtractionRecord;
use super::lexer::{Lexer, OptionsWarning};

/// Records and warnings for one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileExtraction {
    pub file_path: String,
    pub records: Vec<ExtractionRecord>,
    pub warnings: Vec<OptionsWarning>,
}

/// A file that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadError {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ExtractionSummary {
    /// One entry per readable file, in input order.
    pub files: Vec<FileExtraction>,
    pub read_errors: Vec<ReadError>,
}

impl ExtractionSummary {
    pub fn total_keys(&self) -> usize {
        self.files.iter().map(|f| f.records.len()).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.files.iter().map(|f| f.warnings.len()).sum()
    }

    pub fn files_checked(&self) -> usize {
        self.files.len() + self.read_errors.len()
    }
}

pub fn extract_source(lexer: &Lexer, file_path: &str, source: &str) -> FileExtraction {
    let output = lexer.extract_with_warnings(source);
    FileExtraction {
        file_path: file_path.to_string(),
        records: output.records,
        warnings: output.warnings,
    }
}

/// Read and extract every file in parallel. Unreadable files don't abort the batch.
pub fn extract_files<'a, I>(lexer: &Lexer, files: I) -> ExtractionSummary
where
    I: IntoIterator<Item = &'a String>,
{
    let files: Vec<&String> = files.into_iter().collect();

    // `collect` on an indexed parallel iterator keeps input order.
    let results: Vec<Result<FileExtraction, ReadError>> = files
        .par_iter()
        .map(|file_path| {
            // Only ASCII delimiters matter to the lexer, so stray non-UTF-8 bytes are replaced.
            fs::read(file_path.as_str())
                .map(|bytes| extract_source(lexer, file_path, &String::from_utf8_lossy(&bytes)))
                .map_err(|e| ReadError {
                    file_path: file_path.to_string(),
                    error: format!("Failed to read file: {}", e),
                })
        })
        .collect();

    let mut summary = ExtractionSummary::default();
    for result in results {
        match result {
            Ok(extraction) => summary.files.push(extraction),
            Err(error) => summary.read_errors.push(error),
        }
    }
    summary
}
