//! Locate the table name and the column block of a CREATE TABLE statement

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::scanner::find_matching_paren;
use crate::error::ConvertError;

/// `CREATE TABLE [IF NOT EXISTS] name (`, with optional quoting around the name
static TABLE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)CREATE\s+TABLE\s+(?:IF\s+NOT\s+EXISTS\s+)?[`"']?([a-zA-Z0-9_]+)[`"']?\s*\("#)
        .unwrap()
});

/// Last `)` that is followed by a table option, a semicolon or the end of input.
/// Greedy on purpose: option clauses such as `COMMENT='x (y)'` must stay outside.
static COLUMN_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([\s\S]+)\)\s*(?:ENGINE|DEFAULT|AUTO_INCREMENT|COMMENT|;|$)").unwrap()
});

/// Table name and column block pulled out of a normalized statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTable<'a> {
    /// Table identifier without quotes
    pub table_name: &'a str,
    /// Text between the outer parentheses
    pub column_block: &'a str,
}

/// Extract the table name and column block from normalized SQL
pub fn extract_table(sql: &str) -> Result<ExtractedTable<'_>, ConvertError> {
    let caps = TABLE_NAME_RE
        .captures(sql)
        .ok_or(ConvertError::NoTableName)?;
    let table_name = caps.get(1).ok_or(ConvertError::NoTableName)?.as_str();

    // The header match ends just past the opening parenthesis
    let open = caps.get(0).map_or(0, |m| m.end() - 1);
    let column_block = extract_column_block(&sql[open..])?;

    Ok(ExtractedTable {
        table_name,
        column_block,
    })
}

/// Extract the text inside the outermost parenthesis group.
///
/// Tries the option-aware pattern first and falls back to counting depth
/// from the first `(` when the pattern finds nothing.
pub fn extract_column_block(sql: &str) -> Result<&str, ConvertError> {
    if let Some(block) = COLUMN_BLOCK_RE.captures(sql).and_then(|c| c.get(1)) {
        return Ok(block.as_str());
    }

    let start = sql.find('(').ok_or(ConvertError::NoColumnBlock)?;
    let end = find_matching_paren(sql, start).ok_or(ConvertError::NoClosingParen)?;
    debug!(start, end, "column block located by parenthesis matching");
    Ok(&sql[start + 1..end])
}
