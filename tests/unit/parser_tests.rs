//! CREATE TABLE parsing tests

use sql2struct::parser::parse_sql_with_diagnostics;
use sql2struct::{parse_sql, ConvertError};

use crate::common::{field_types, parse_ok};

// ============================================================================
// Basic Parsing Tests
// ============================================================================

#[test]
fn test_parse_basic_mysql() {
    let sql = r#"CREATE TABLE users (
        id INT NOT NULL,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255),
        created_at DATETIME NOT NULL
    )"#;

    let record = parse_ok(sql);
    assert_eq!(record.name(), "Users");
    assert_eq!(record.fields().len(), 4);

    let types = field_types(&record);
    assert_eq!(types["Id"], "int");
    assert_eq!(types["Name"], "string");
    assert_eq!(types["Email"], "*string");
    assert_eq!(types["CreatedAt"], "time.Time");

    for field in record.fields() {
        assert!(!field.column_name().is_empty(), "{} missing column name", field.name());
    }
}

#[test]
fn test_parse_keeps_column_order() {
    let record = parse_ok("CREATE TABLE t (zeta INT, alpha INT, mid INT)");
    let names: Vec<&str> = record.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn test_parse_column_names_preserved() {
    let record = parse_ok("CREATE TABLE users (user_id INT NOT NULL, FullName VARCHAR(255) NOT NULL)");
    let columns: Vec<(&str, &str)> = record
        .fields()
        .iter()
        .map(|f| (f.name(), f.column_name()))
        .collect();
    assert_eq!(columns, vec![("UserId", "user_id"), ("Fullname", "FullName")]);
}

#[test]
fn test_parse_mixed_case_names() {
    let sql = r#"CREATE TABLE UserProfiles (
        UserID INT NOT NULL,
        FirstName VARCHAR(100) NOT NULL,
        last_name VARCHAR(100) NOT NULL
    )"#;
    let record = parse_ok(sql);
    assert_eq!(record.name(), "Userprofiles");
    assert_eq!(record.fields()[0].column_name(), "UserID");
}

// ============================================================================
// Nullability Tests
// ============================================================================

#[test]
fn test_nullable_not_confused_by_comments() {
    let sql = r#"CREATE TABLE test_table (
        id INT NOT NULL,
        nullable_field VARCHAR(100),
        tricky_field VARCHAR(100) DEFAULT NULL COMMENT 'This is NOT NULL in production',
        another_tricky TEXT COMMENT 'NOT NULL check'
    )"#;

    let types = field_types(&parse_ok(sql));
    assert_eq!(types["Id"], "int");
    assert_eq!(types["NullableField"], "*string");
    assert_eq!(types["TrickyField"], "*string");
    assert_eq!(types["AnotherTricky"], "*string");
}

#[test]
fn test_nullable_with_defaults() {
    let sql = r#"CREATE TABLE t (
        a VARCHAR(10) NOT NULL DEFAULT 'x',
        b VARCHAR(10) DEFAULT 'NOT NULL',
        c INT DEFAULT 0 NOT NULL,
        d INT DEFAULT 0
    )"#;
    let types = field_types(&parse_ok(sql));
    assert_eq!(types["A"], "string");
    assert_eq!(types["B"], "*string");
    assert_eq!(types["C"], "int");
    assert_eq!(types["D"], "*int");
}

// ============================================================================
// Structure Extraction Tests
// ============================================================================

#[test]
fn test_table_options_not_captured() {
    let sql = r#"CREATE TABLE products (
        id INT NOT NULL,
        name VARCHAR(255) NOT NULL
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci;"#;

    let record = parse_ok(sql);
    assert_eq!(record.fields().len(), 2, "should not capture ENGINE options");
}

#[test]
fn test_auto_increment_and_comment_options() {
    let sql = "CREATE TABLE t (id INT NOT NULL) AUTO_INCREMENT=100 COMMENT='legacy (v1) table'";
    let record = parse_ok(sql);
    assert_eq!(record.fields().len(), 1);
}

#[test]
fn test_multiple_spaces() {
    let sql = r#"CREATE    TABLE     users    (
        id      INT      NOT     NULL,
        name    VARCHAR(255)    NOT    NULL
    )"#;
    let types = field_types(&parse_ok(sql));
    assert_eq!(types.len(), 2);
    assert_eq!(types["Id"], "int");
    assert_eq!(types["Name"], "string");
}

#[test]
fn test_newlines_and_tabs() {
    let sql = "CREATE TABLE\tusers\t(\n\tid\tINT\tNOT\tNULL,\n\tname\tVARCHAR(255)\tNOT\tNULL\n)";
    assert_eq!(parse_ok(sql).fields().len(), 2);
}

#[test]
fn test_quoted_identifiers() {
    let sql = "CREATE TABLE `users` (\n\t`user_id` INT NOT NULL,\n\t`user_name` VARCHAR(255) NOT NULL\n)";
    let record = parse_ok(sql);
    assert_eq!(record.name(), "Users");
    let columns: Vec<(&str, &str)> = record
        .fields()
        .iter()
        .map(|f| (f.name(), f.column_name()))
        .collect();
    assert_eq!(columns, vec![("UserId", "user_id"), ("UserName", "user_name")]);
}

#[test]
fn test_double_quoted_identifiers() {
    let sql = r#"CREATE TABLE "orders" ("order_id" BIGINT NOT NULL, "note" TEXT)"#;
    let record = parse_ok(sql);
    assert_eq!(record.name(), "Orders");
    let types = field_types(&record);
    assert_eq!(types["OrderId"], "int64");
    assert_eq!(types["Note"], "*string");
}

// ============================================================================
// Constraint Tests
// ============================================================================

#[test]
fn test_constraints_skipped() {
    let sql = r#"CREATE TABLE orders (
        id INT NOT NULL,
        user_id INT NOT NULL,
        total DECIMAL(10,2) NOT NULL,
        PRIMARY KEY (id),
        FOREIGN KEY (user_id) REFERENCES users(id),
        INDEX idx_user_id (user_id),
        KEY idx_total (total),
        UNIQUE KEY unique_order (id, user_id),
        CONSTRAINT chk_total CHECK (total >= 0),
        CHECK (id > 0)
    )"#;

    let output = parse_sql_with_diagnostics(sql).unwrap();
    let names: Vec<&str> = output.record.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["Id", "UserId", "Total"]);
    assert!(output.diagnostics.is_empty(), "constraints are not diagnostics");
}

// ============================================================================
// Dialect Tests
// ============================================================================

#[test]
fn test_postgresql_if_not_exists() {
    let sql = r#"CREATE TABLE IF NOT EXISTS users (
        id INTEGER NOT NULL,
        username VARCHAR(100) NOT NULL,
        email TEXT,
        created_at TIMESTAMP NOT NULL
    )"#;
    let record = parse_ok(sql);
    assert_eq!(record.name(), "Users");
    assert_eq!(record.fields().len(), 4);
}

#[test]
fn test_sqlite_style() {
    let sql = r#"CREATE TABLE products (
        id INTEGER NOT NULL,
        name TEXT NOT NULL,
        price DECIMAL(10, 2) NOT NULL,
        in_stock BOOLEAN
    );"#;
    let types = field_types(&parse_ok(sql));
    assert_eq!(types.len(), 4);
    assert_eq!(types["Price"], "float64");
    assert_eq!(types["InStock"], "*bool");
}

#[test]
fn test_mariadb_sessions() {
    let sql = r#"CREATE TABLE sessions (
        session_id CHAR(128) NOT NULL,
        user_id BIGINT UNSIGNED,
        data MEDIUMTEXT,
        last_activity TIMESTAMP NOT NULL,
        PRIMARY KEY (session_id)
    ) ENGINE=InnoDB;"#;
    let types = field_types(&parse_ok(sql));
    assert_eq!(types.len(), 4);
    assert_eq!(types["UserId"], "*uint64");
}

#[test]
fn test_unsupported_dialect_types_dropped() {
    let sql = "CREATE TABLE t (id SERIAL PRIMARY KEY, name TEXT NOT NULL)";
    let output = parse_sql_with_diagnostics(sql).unwrap();
    assert_eq!(output.record.fields().len(), 1);
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.diagnostics[0].clause, "id SERIAL PRIMARY KEY");
}

#[test]
fn test_dialect_type_spellings_kept() {
    let sql = "CREATE TABLE t (id INT NOT NULL, ts TIMESTAMPTZ NOT NULL, n VARCHAR2(10), c CHARACTER VARYING(5), d DATETIME2)";
    let output = parse_sql_with_diagnostics(sql).unwrap();
    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);

    let types = field_types(&output.record);
    assert_eq!(types.len(), 5);
    assert_eq!(types["Ts"], "time.Time");
    assert_eq!(types["N"], "*string");
    assert_eq!(types["C"], "*string");
    assert_eq!(types["D"], "*time.Time");
}

#[test]
fn test_comment_word_inside_default_value() {
    let types = field_types(&parse_ok(
        "CREATE TABLE t (note VARCHAR(20) DEFAULT 'no comment' NOT NULL, memo TEXT DEFAULT 'x')",
    ));
    assert_eq!(types["Note"], "string");
    assert_eq!(types["Memo"], "*string");
}

#[test]
fn test_complex_real_world() {
    let sql = r#"CREATE TABLE IF NOT EXISTS user_profiles (
        user_id BIGINT UNSIGNED NOT NULL,
        username VARCHAR(50) NOT NULL,
        email VARCHAR(255) NOT NULL,
        full_name VARCHAR(200),
        bio TEXT,
        avatar_url VARCHAR(500),
        birth_date DATE,
        is_verified TINYINT(1) NOT NULL DEFAULT 0,
        follower_count INT UNSIGNED DEFAULT 0,
        following_count INT UNSIGNED DEFAULT 0,
        post_count MEDIUMINT UNSIGNED DEFAULT 0,
        rating DECIMAL(3,2),
        last_login_at TIMESTAMP,
        created_at DATETIME NOT NULL,
        updated_at DATETIME NOT NULL,
        PRIMARY KEY (user_id),
        UNIQUE KEY unique_username (username),
        UNIQUE KEY unique_email (email),
        INDEX idx_verified (is_verified),
        INDEX idx_created (created_at)
    ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci;"#;

    let record = parse_ok(sql);
    assert_eq!(record.name(), "UserProfiles");
    assert_eq!(record.fields().len(), 15);

    let types = field_types(&record);
    let expected = [
        ("UserId", "uint64"),
        ("Username", "string"),
        ("Email", "string"),
        ("FullName", "*string"),
        ("Bio", "*string"),
        ("IsVerified", "bool"),
        ("FollowerCount", "*uint32"),
        ("PostCount", "*uint32"),
        ("Rating", "*float64"),
        ("LastLoginAt", "*time.Time"),
        ("CreatedAt", "time.Time"),
    ];
    for (name, go_type) in expected {
        assert_eq!(types[name], go_type, "field {name}");
    }
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn test_error_cases() {
    let cases = [
        ("empty", ""),
        ("no table name", "CREATE TABLE ()"),
        ("no parentheses", "CREATE TABLE users"),
        ("invalid syntax", "INVALID SQL STATEMENT"),
        ("no columns", "CREATE TABLE users ()"),
        ("not sql", "Halo ini bukan SQL"),
    ];
    for (name, sql) in cases {
        assert!(parse_sql(sql).is_err(), "expected error for {name}");
    }
}

#[test]
fn test_error_kinds() {
    assert!(matches!(
        parse_sql("Halo ini bukan SQL"),
        Err(ConvertError::NoTableName)
    ));
    assert!(matches!(
        parse_sql("CREATE TABLE users ()"),
        Err(ConvertError::NoValidColumns)
    ));
    assert!(matches!(
        parse_sql("CREATE TABLE users (id INT, name TEXT"),
        Err(ConvertError::NoClosingParen)
    ));
    assert!(matches!(
        parse_sql("CREATE TABLE t (PRIMARY KEY (id), garbage)"),
        Err(ConvertError::NoValidColumns)
    ));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        parse_sql("nope").unwrap_err().to_string(),
        "failed to extract table name from SQL"
    );
    assert_eq!(
        parse_sql("CREATE TABLE t (PRIMARY KEY (id))").unwrap_err().to_string(),
        "failed to parse columns: no valid columns found"
    );
}
