//! SQL input files: discovery, decoding and parallel parsing

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use encoding_rs::WINDOWS_1252;
use rayon::prelude::*;
use tracing::debug;

use crate::error::ConvertError;
use crate::model::TableRecord;
use crate::parser::parse_sql;

/// Below this many files, sequential parsing beats rayon's overhead
const PARALLEL_THRESHOLD: usize = 8;

/// Expand input paths into SQL files.
///
/// Files are kept as given; directories are walked recursively for `*.sql`
/// files, in sorted order so output is stable across platforms.
pub fn collect_sql_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = walkdir::WalkDir::new(path)
                .into_iter()
                .filter_map(|e| e.ok())
                .map(|e| e.into_path())
                .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "sql"))
                .collect();
            found.sort();
            files.extend(found);
        } else {
            files.push(path.clone());
        }
    }
    files
}

/// Decode SQL text, trying UTF-8 first and Windows-1252 as a fallback.
/// A leading UTF-8 BOM is dropped.
pub fn decode_sql(bytes: Vec<u8>) -> std::io::Result<String> {
    let text = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, had_errors) = WINDOWS_1252.decode(&bytes);
            if had_errors {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "File contains invalid characters",
                ));
            }
            decoded.into_owned()
        }
    };

    Ok(match text.strip_prefix('\u{FEFF}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Read one SQL file
pub fn read_sql_file(path: &Path) -> Result<String, ConvertError> {
    std::fs::read(path)
        .and_then(decode_sql)
        .map_err(|source| ConvertError::InputReadError {
            path: path.to_path_buf(),
            source,
        })
}

/// Read and parse a single file holding one CREATE TABLE statement
pub fn parse_sql_file(path: &Path) -> Result<TableRecord> {
    let sql = read_sql_file(path)?;
    let record =
        parse_sql(&sql).with_context(|| format!("SQL parsing error in {}", path.display()))?;
    debug!(path = %path.display(), table = record.name(), "parsed SQL file");
    Ok(record)
}

/// Parse several files, keeping input order; the first failure is returned
pub fn parse_sql_files(files: &[PathBuf]) -> Result<Vec<TableRecord>> {
    if files.len() >= PARALLEL_THRESHOLD {
        files.par_iter().map(|file| parse_sql_file(file)).collect()
    } else {
        files.iter().map(|file| parse_sql_file(file)).collect()
    }
}
