//! CREATE TABLE parsing
//!
//! The statement flows through whitespace normalization, table/column-block
//! extraction, top-level comma splitting and per-clause parsing. A clause
//! that cannot be parsed is dropped with a diagnostic; the parse only fails
//! when the statement structure is missing or no column survives.

mod column_parser;
mod column_splitter;
mod scanner;
mod table_extractor;

pub use column_parser::{
    is_constraint, parse_clause, parse_column_definition, ClauseOutcome, ParsedColumn,
};
pub use column_splitter::split_columns;
pub use scanner::normalize_whitespace;
pub use table_extractor::{extract_column_block, extract_table, ExtractedTable};

use tracing::warn;

use crate::error::{ClauseDiagnostic, ConvertError};
use crate::model::TableRecord;

/// A parsed table together with the clauses that were skipped
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub record: TableRecord,
    pub diagnostics: Vec<ClauseDiagnostic>,
}

/// Parse a single CREATE TABLE statement into a struct record
pub fn parse_sql(sql: &str) -> Result<TableRecord, ConvertError> {
    parse_sql_with_diagnostics(sql).map(|output| output.record)
}

/// Parse a single CREATE TABLE statement, also returning the clauses that
/// were dropped and why
pub fn parse_sql_with_diagnostics(sql: &str) -> Result<ParseOutput, ConvertError> {
    let normalized = normalize_whitespace(sql);
    let extracted = extract_table(&normalized)?;

    let mut fields = Vec::new();
    let mut diagnostics = Vec::new();

    for clause in split_columns(extracted.column_block) {
        match parse_clause(clause) {
            ClauseOutcome::Column(column) => fields.push(column.into_field()),
            ClauseOutcome::Rejected(error) => {
                let clause = clause.trim().to_string();
                warn!(%clause, %error, "skipping line (not a valid column)");
                diagnostics.push(ClauseDiagnostic { clause, error });
            }
            ClauseOutcome::Blank | ClauseOutcome::Constraint => {}
        }
    }

    if fields.is_empty() {
        return Err(ConvertError::NoValidColumns);
    }

    Ok(ParseOutput {
        record: TableRecord::new(extracted.table_name, fields),
        diagnostics,
    })
}
