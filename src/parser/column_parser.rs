//! Column clause classification and parsing
//!
//! Each clause from the column block is either blank, a table-level
//! constraint, or a column definition:
//!
//! ```sql
//! name TYPE[(size)] [UNSIGNED] [NOT NULL] [DEFAULT value] [COMMENT 'text'] ...
//! `quoted name` TYPE ...
//! ```
//!
//! Anything after the type that is not NOT NULL or UNSIGNED is ignored.

use std::sync::LazyLock;

use regex::Regex;

use super::scanner::find_keyword;
use crate::error::ClauseError;
use crate::model::{map_sql_type, FieldRecord, GoType, SqlType};

/// Type keyword at the start of the column tail, with optional size and UNSIGNED
static TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(TINYINT|SMALLINT|MEDIUMINT|INT|INTEGER|BIGINT|FLOAT|DOUBLE|DECIMAL|NUMERIC|CHAR|VARCHAR|TEXT|TINYTEXT|MEDIUMTEXT|LONGTEXT|DATETIME|TIMESTAMP|DATE|TIME|BOOLEAN|BOOL|BLOB|TINYBLOB|MEDIUMBLOB|LONGBLOB|JSON|ENUM|SET)(?:\s*\(([^)]+)\))?(?:\s+(UNSIGNED))?",
    )
    .unwrap()
});

static NOT_NULL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bNOT\s+NULL\b").unwrap());

/// Clause prefixes (upper-cased) that introduce table constraints, not columns
const CONSTRAINT_PREFIXES: &[&str] = &[
    "PRIMARY KEY",
    "FOREIGN KEY",
    "UNIQUE KEY",
    "KEY ",
    "INDEX ",
    "CONSTRAINT",
    "CHECK ",
];

/// A column definition after parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedColumn {
    /// Column identifier, quotes stripped
    pub name: String,
    pub sql_type: SqlType,
    pub nullable: bool,
    pub unsigned: bool,
}

impl ParsedColumn {
    pub fn go_type(&self) -> GoType {
        map_sql_type(&self.sql_type, self.nullable, self.unsigned)
    }

    pub fn into_field(self) -> FieldRecord {
        FieldRecord::new(&self.name, self.go_type())
    }
}

/// Result of looking at one clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseOutcome {
    Blank,
    Constraint,
    Column(ParsedColumn),
    Rejected(ClauseError),
}

/// Classify and parse one clause of the column block
pub fn parse_clause(clause: &str) -> ClauseOutcome {
    let clause = clause.trim();
    if clause.is_empty() {
        return ClauseOutcome::Blank;
    }
    if is_constraint(clause) {
        return ClauseOutcome::Constraint;
    }
    match parse_column_definition(clause) {
        Ok(column) => ClauseOutcome::Column(column),
        Err(e) => ClauseOutcome::Rejected(e),
    }
}

/// True when the clause starts with a table-constraint keyword
pub fn is_constraint(clause: &str) -> bool {
    let upper = clause.trim_start().to_ascii_uppercase();
    CONSTRAINT_PREFIXES
        .iter()
        .any(|prefix| upper.starts_with(prefix))
}

/// Parse a trimmed, non-constraint clause into a column
pub fn parse_column_definition(clause: &str) -> Result<ParsedColumn, ClauseError> {
    let (name, tail) = extract_column_name(clause)?;

    let caps = TYPE_RE
        .captures(tail)
        .ok_or_else(|| ClauseError::UnknownType {
            clause: clause.to_string(),
        })?;
    let keyword = caps.get(1).map_or("", |m| m.as_str());
    let size = caps.get(2).map(|m| m.as_str());
    let sql_type = SqlType::from_keyword(keyword, size);

    let nullable = !NOT_NULL_RE.is_match(&strip_comment_and_default(tail));
    let unsigned = tail.to_ascii_uppercase().contains("UNSIGNED");

    Ok(ParsedColumn {
        name,
        sql_type,
        nullable,
        unsigned,
    })
}

/// Split a clause into its column identifier and the remaining tail.
///
/// Back-tick and double-quoted identifiers are taken verbatim between the
/// quotes; otherwise the first whitespace-delimited word is the name and
/// a tail is required.
fn extract_column_name(clause: &str) -> Result<(String, &str), ClauseError> {
    let clause = clause.trim();

    if let Some(quote) = clause.chars().next().filter(|c| *c == '`' || *c == '"') {
        let inner = &clause[1..];
        let end = inner
            .find(quote)
            .ok_or_else(|| ClauseError::UnterminatedQuote {
                clause: clause.to_string(),
            })?;
        let name = &inner[..end];
        if name.is_empty() {
            return Err(ClauseError::MissingIdentifier {
                clause: clause.to_string(),
            });
        }
        return Ok((name.to_string(), inner[end + 1..].trim()));
    }

    let missing = || ClauseError::MissingIdentifier {
        clause: clause.to_string(),
    };
    let split = clause.find(char::is_whitespace).ok_or_else(missing)?;
    let tail = clause[split..].trim();
    if tail.is_empty() {
        return Err(missing());
    }
    Ok((clause[..split].to_string(), tail))
}

/// Drop COMMENT text and the DEFAULT value from a column tail so quoted
/// text such as `COMMENT 'NOT NULL in prod'` cannot change nullability.
/// Both keywords only count as whole words outside quotes.
fn strip_comment_and_default(tail: &str) -> String {
    let tail = match find_keyword(tail, "COMMENT") {
        Some(idx) => &tail[..idx],
        None => tail,
    };

    let Some(idx) = find_keyword(tail, "DEFAULT") else {
        return tail.trim().to_string();
    };

    let before = &tail[..idx];
    let value = tail[idx + "DEFAULT".len()..].trim_start();

    let after = match value.chars().next() {
        Some(quote @ ('\'' | '"')) => match value[1..].find(quote) {
            Some(end) => &value[end + 2..],
            // Unterminated quote: nothing after DEFAULT is trustworthy
            None => "",
        },
        Some(_) => value
            .find(char::is_whitespace)
            .map_or("", |end| &value[end..]),
        None => "",
    };

    format!("{}{}", before, after).trim().to_string()
}
