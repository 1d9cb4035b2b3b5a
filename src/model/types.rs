//! SQL column types and their Go counterparts

use std::fmt;

/// A column type keyword recognized by the column parser.
///
/// `TinyIntBool` is `TINYINT(1)`, the MySQL convention for boolean
/// columns; it is kept apart from plain `TINYINT` so the two map
/// differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlType {
    TinyInt,
    TinyIntBool,
    SmallInt,
    MediumInt,
    Int,
    Integer,
    BigInt,
    Float,
    Double,
    Decimal,
    Numeric,
    Char,
    VarChar,
    Text,
    TinyText,
    MediumText,
    LongText,
    DateTime,
    Timestamp,
    Date,
    Time,
    Boolean,
    Bool,
    Blob,
    TinyBlob,
    MediumBlob,
    LongBlob,
    Json,
    Enum,
    Set,
    /// Any keyword outside the fixed vocabulary, upper-cased
    Other(String),
}

impl SqlType {
    /// Resolve a type keyword (case-insensitive) and its optional size
    /// argument. Only `TINYINT` looks at the size.
    pub fn from_keyword(keyword: &str, size: Option<&str>) -> Self {
        let upper = keyword.to_ascii_uppercase();
        match upper.as_str() {
            "TINYINT" if size.map(str::trim) == Some("1") => SqlType::TinyIntBool,
            "TINYINT" => SqlType::TinyInt,
            "SMALLINT" => SqlType::SmallInt,
            "MEDIUMINT" => SqlType::MediumInt,
            "INT" => SqlType::Int,
            "INTEGER" => SqlType::Integer,
            "BIGINT" => SqlType::BigInt,
            "FLOAT" => SqlType::Float,
            "DOUBLE" => SqlType::Double,
            "DECIMAL" => SqlType::Decimal,
            "NUMERIC" => SqlType::Numeric,
            "CHAR" => SqlType::Char,
            "VARCHAR" => SqlType::VarChar,
            "TEXT" => SqlType::Text,
            "TINYTEXT" => SqlType::TinyText,
            "MEDIUMTEXT" => SqlType::MediumText,
            "LONGTEXT" => SqlType::LongText,
            "DATETIME" => SqlType::DateTime,
            "TIMESTAMP" => SqlType::Timestamp,
            "DATE" => SqlType::Date,
            "TIME" => SqlType::Time,
            "BOOLEAN" => SqlType::Boolean,
            "BOOL" => SqlType::Bool,
            "BLOB" => SqlType::Blob,
            "TINYBLOB" => SqlType::TinyBlob,
            "MEDIUMBLOB" => SqlType::MediumBlob,
            "LONGBLOB" => SqlType::LongBlob,
            "JSON" => SqlType::Json,
            "ENUM" => SqlType::Enum,
            "SET" => SqlType::Set,
            _ => SqlType::Other(upper),
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SqlType::TinyInt => "TINYINT",
            SqlType::TinyIntBool => "TINYINT(1)",
            SqlType::SmallInt => "SMALLINT",
            SqlType::MediumInt => "MEDIUMINT",
            SqlType::Int => "INT",
            SqlType::Integer => "INTEGER",
            SqlType::BigInt => "BIGINT",
            SqlType::Float => "FLOAT",
            SqlType::Double => "DOUBLE",
            SqlType::Decimal => "DECIMAL",
            SqlType::Numeric => "NUMERIC",
            SqlType::Char => "CHAR",
            SqlType::VarChar => "VARCHAR",
            SqlType::Text => "TEXT",
            SqlType::TinyText => "TINYTEXT",
            SqlType::MediumText => "MEDIUMTEXT",
            SqlType::LongText => "LONGTEXT",
            SqlType::DateTime => "DATETIME",
            SqlType::Timestamp => "TIMESTAMP",
            SqlType::Date => "DATE",
            SqlType::Time => "TIME",
            SqlType::Boolean => "BOOLEAN",
            SqlType::Bool => "BOOL",
            SqlType::Blob => "BLOB",
            SqlType::TinyBlob => "TINYBLOB",
            SqlType::MediumBlob => "MEDIUMBLOB",
            SqlType::LongBlob => "LONGBLOB",
            SqlType::Json => "JSON",
            SqlType::Enum => "ENUM",
            SqlType::Set => "SET",
            SqlType::Other(name) => name,
        };
        f.write_str(name)
    }
}

/// Go type before nullable wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseType {
    Bool,
    Int8,
    Uint8,
    Int16,
    Uint16,
    /// 32-bit signed columns map to Go's `int`
    Int,
    Uint32,
    Int64,
    Uint64,
    Float64,
    String,
    Time,
    Bytes,
}

impl BaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseType::Bool => "bool",
            BaseType::Int8 => "int8",
            BaseType::Uint8 => "uint8",
            BaseType::Int16 => "int16",
            BaseType::Uint16 => "uint16",
            BaseType::Int => "int",
            BaseType::Uint32 => "uint32",
            BaseType::Int64 => "int64",
            BaseType::Uint64 => "uint64",
            BaseType::Float64 => "float64",
            BaseType::String => "string",
            BaseType::Time => "time.Time",
            BaseType::Bytes => "[]byte",
        }
    }
}

/// A Go field type: a base type, optionally wrapped as a pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoType {
    pub base: BaseType,
    pub optional: bool,
}

impl GoType {
    /// True for `time.Time` and `*time.Time`
    pub fn is_time(&self) -> bool {
        self.base == BaseType::Time
    }
}

impl fmt::Display for GoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.optional {
            f.write_str("*")?;
        }
        f.write_str(self.base.as_str())
    }
}

/// Map a SQL column type to its Go type.
///
/// Nullable columns become pointers, except byte slices: `[]byte` can
/// already be nil and is never wrapped.
pub fn map_sql_type(sql_type: &SqlType, nullable: bool, unsigned: bool) -> GoType {
    let pick = |signed: BaseType, unsigned_base: BaseType| {
        if unsigned {
            unsigned_base
        } else {
            signed
        }
    };

    let base = match sql_type {
        SqlType::TinyIntBool | SqlType::Boolean | SqlType::Bool => BaseType::Bool,
        SqlType::TinyInt => pick(BaseType::Int8, BaseType::Uint8),
        SqlType::SmallInt => pick(BaseType::Int16, BaseType::Uint16),
        SqlType::MediumInt | SqlType::Int | SqlType::Integer => {
            pick(BaseType::Int, BaseType::Uint32)
        }
        SqlType::BigInt => pick(BaseType::Int64, BaseType::Uint64),
        SqlType::Float | SqlType::Double | SqlType::Decimal | SqlType::Numeric => {
            BaseType::Float64
        }
        SqlType::Char
        | SqlType::VarChar
        | SqlType::Text
        | SqlType::TinyText
        | SqlType::MediumText
        | SqlType::LongText
        | SqlType::Json
        | SqlType::Enum
        | SqlType::Set => BaseType::String,
        SqlType::DateTime | SqlType::Timestamp | SqlType::Date | SqlType::Time => BaseType::Time,
        SqlType::Blob | SqlType::TinyBlob | SqlType::MediumBlob | SqlType::LongBlob => {
            BaseType::Bytes
        }
        SqlType::Other(_) => BaseType::String,
    };

    GoType {
        base,
        optional: nullable && base != BaseType::Bytes,
    }
}
