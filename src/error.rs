//! Error types for sql2struct

use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a conversion call
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("failed to extract table name from SQL")]
    NoTableName,

    #[error("failed to extract column definitions")]
    NoColumnBlock,

    #[error("failed to find closing parenthesis")]
    NoClosingParen,

    #[error("failed to parse columns: no valid columns found")]
    NoValidColumns,

    #[error("Failed to read SQL file: {path}")]
    InputReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reasons a single column clause was dropped.
///
/// These never abort a parse on their own; they are reported next to the
/// record as [`ClauseDiagnostic`]s.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClauseError {
    #[error("invalid column definition: {clause}")]
    MissingIdentifier { clause: String },

    #[error("unterminated quoted identifier in: {clause}")]
    UnterminatedQuote { clause: String },

    #[error("could not extract data type from: {clause}")]
    UnknownType { clause: String },
}

/// A clause skipped during column parsing, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseDiagnostic {
    /// The trimmed clause text as it appeared in the column block
    pub clause: String,
    pub error: ClauseError,
}
