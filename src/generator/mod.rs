//! Go source generation from parsed table records

mod struct_writer;
mod tag_writer;

use crate::config::{GenerationConfig, DEFAULT_PACKAGE};
use crate::model::TableRecord;

/// Render records as Go source in `package main`.
///
/// Empty input yields an empty string. `import "time"` is emitted once when
/// any field in the batch is a `time.Time`, and structs are separated by a
/// single blank line.
pub fn generate_go_code(records: &[TableRecord], config: &GenerationConfig) -> String {
    generate_go_code_in_package(records, config, DEFAULT_PACKAGE)
}

/// Same as [`generate_go_code`] with an explicit package name
pub fn generate_go_code_in_package(
    records: &[TableRecord],
    config: &GenerationConfig,
    package: &str,
) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&format!("package {}\n\n", package));
    if needs_time_import(records) {
        out.push_str("import \"time\"\n\n");
    }

    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        struct_writer::write_struct(&mut out, record, config);
    }

    out
}

/// True when any field of any record uses `time.Time`
pub fn needs_time_import(records: &[TableRecord]) -> bool {
    records
        .iter()
        .flat_map(|r| r.fields())
        .any(|f| f.go_type().is_time())
}
