//! Split a column block into clauses on top-level commas

use super::scanner::{DelimiterScanner, Scan};

/// Split the column block at commas outside parentheses and quotes.
///
/// Clauses are returned untrimmed and may be blank; the trailing clause is
/// included when non-empty.
pub fn split_columns(column_block: &str) -> Vec<&str> {
    let mut clauses = Vec::new();
    let mut scanner = DelimiterScanner::new();
    let mut start = 0;

    for (i, c) in column_block.char_indices() {
        if scanner.step(c) == Scan::Separator {
            clauses.push(&column_block[start..i]);
            start = i + 1;
        }
    }

    if start < column_block.len() {
        clauses.push(&column_block[start..]);
    }

    clauses
}
