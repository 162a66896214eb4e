//! Common utility functions shared across the codebase.

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
pub fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, b) in content.bytes().enumerate() {
        if b == b'\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find the 1-based line number for a byte offset using binary search.
///
/// # Examples
///
/// ```
/// use wclex::utils::{build_line_index, offset_to_line};
///
/// let index = build_line_index("<p>\n<span>\n");
/// assert_eq!(offset_to_line(&index, 0), 1);
/// assert_eq!(offset_to_line(&index, 4), 2);
/// assert_eq!(offset_to_line(&index, 6), 2);
/// ```
pub fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Pluralize a noun for summary lines: `1 file`, `2 files`.
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
