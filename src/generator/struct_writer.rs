//! Aligned Go struct declarations

use super::tag_writer::struct_tags;
use crate::config::GenerationConfig;
use crate::model::{FieldRecord, TableRecord};

/// Widest field name and widest type name, in characters
pub(crate) fn column_widths(fields: &[FieldRecord]) -> (usize, usize) {
    fields.iter().fold((0, 0), |(name_w, type_w), f| {
        (
            name_w.max(f.name().chars().count()),
            type_w.max(f.type_name().chars().count()),
        )
    })
}

/// Write one `type X struct { ... }` block.
///
/// Names, types and tags each start in their own aligned column, one
/// space past the widest entry of the previous column.
pub(crate) fn write_struct(out: &mut String, record: &TableRecord, config: &GenerationConfig) {
    out.push_str(&format!("type {} struct {{\n", record.name()));

    let (name_width, type_width) = column_widths(record.fields());

    for field in record.fields() {
        let name = field.name();
        let type_name = field.type_name();
        out.push('\t');
        out.push_str(name);
        pad(out, name_width - name.chars().count() + 1);
        out.push_str(&type_name);

        let tags = struct_tags(field.column_name(), config);
        if !tags.is_empty() {
            pad(out, type_width - type_name.chars().count() + 1);
            out.push('`');
            out.push_str(&tags);
            out.push('`');
        }
        out.push('\n');
    }

    out.push_str("}\n");
}

fn pad(out: &mut String, width: usize) {
    out.extend(std::iter::repeat(' ').take(width));
}
