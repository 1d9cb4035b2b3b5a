//! In-memory records produced by the parser and consumed by the generator

mod types;

pub use types::{map_sql_type, BaseType, GoType, SqlType};

use crate::naming::to_pascal_case;

/// One Go struct, built from a single CREATE TABLE statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRecord {
    name: String,
    fields: Vec<FieldRecord>,
}

impl TableRecord {
    /// Build a record from the raw table name; the struct name is its
    /// PascalCase form.
    pub fn new(table_name: &str, fields: Vec<FieldRecord>) -> Self {
        Self {
            name: to_pascal_case(table_name),
            fields,
        }
    }

    /// Go struct name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in column order
    pub fn fields(&self) -> &[FieldRecord] {
        &self.fields
    }
}

/// One struct field, built from a single column clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    name: String,
    go_type: GoType,
    column_name: String,
}

impl FieldRecord {
    /// Build a field from the unquoted column identifier and its mapped type.
    ///
    /// The column name is stored exactly as given and is the source for tag
    /// values; the field name and type expression are derived from it.
    pub fn new(column_name: &str, go_type: GoType) -> Self {
        Self {
            name: to_pascal_case(column_name),
            go_type,
            column_name: column_name.to_string(),
        }
    }

    /// Go field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Go type expression, e.g. `*string` or `time.Time`
    pub fn type_name(&self) -> String {
        self.go_type.to_string()
    }

    pub fn go_type(&self) -> GoType {
        self.go_type
    }

    /// Column identifier as written in the SQL, quotes stripped
    pub fn column_name(&self) -> &str {
        &self.column_name
    }
}
