//! sql2struct: turn a CREATE TABLE statement into a Go struct
//!
//! The parser pulls the table name and column definitions out of loosely
//! formatted MySQL-style DDL and maps each column to a Go type. The
//! generator renders the result as aligned Go source with optional
//! json/db/gorm/xml struct tags.
//!
//! ```
//! use sql2struct::{convert_sql, GenerationConfig};
//!
//! let code = convert_sql(
//!     "CREATE TABLE users (id INT NOT NULL, email VARCHAR(255))",
//!     &GenerationConfig::default(),
//! )
//! .unwrap();
//! assert!(code.contains("type Users struct {"));
//! assert!(code.contains("Email *string"));
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod naming;
pub mod parser;
pub mod source;

use std::path::PathBuf;

use anyhow::Result;

pub use config::GenerationConfig;
pub use error::{ClauseDiagnostic, ClauseError, ConvertError};
pub use generator::generate_go_code;
pub use model::{FieldRecord, TableRecord};
pub use parser::parse_sql;

/// Options for converting SQL files
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// SQL files, or directories searched for `*.sql`
    pub inputs: Vec<PathBuf>,
    /// Tag families to emit
    pub config: GenerationConfig,
    /// Package name for the generated file
    pub package: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            config: GenerationConfig::default(),
            package: config::DEFAULT_PACKAGE.to_string(),
        }
    }
}

/// Parse one CREATE TABLE statement and render it as Go source
pub fn convert_sql(sql: &str, config: &GenerationConfig) -> Result<String, ConvertError> {
    let record = parse_sql(sql)?;
    Ok(generate_go_code(std::slice::from_ref(&record), config))
}

/// Convert every input file into a single Go source text
pub fn convert_files(options: &ConvertOptions) -> Result<String> {
    let files = source::collect_sql_files(&options.inputs);
    if files.is_empty() {
        anyhow::bail!("No SQL files found in the given inputs");
    }

    let records = source::parse_sql_files(&files)?;
    Ok(generator::generate_go_code_in_package(
        &records,
        &options.config,
        &options.package,
    ))
}
