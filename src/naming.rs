//! Identifier casing for generated Go code.
//!
//! Column and table names arrive in whatever case the SQL author used. Go
//! field and type names need PascalCase, while struct tag values are
//! normalized to lowercase snake_case.
//!
//! # Examples
//!
//! ```
//! use sql2struct::naming::{to_pascal_case, to_snake_case};
//!
//! assert_eq!(to_pascal_case("user_id"), "UserId");
//! assert_eq!(to_pascal_case("a_b_c_d"), "ABCD");
//! assert_eq!(to_snake_case("UserID"), "user_id");
//! assert_eq!(to_snake_case("created_at"), "created_at");
//! ```

/// Converts a snake_case identifier to PascalCase.
///
/// Each `_`-separated segment gets an uppercase first character and a
/// lowercase remainder. Empty segments (from leading, trailing or doubled
/// underscores) are dropped, so `_leading_underscore` becomes
/// `LeadingUnderscore`.
pub fn to_pascal_case(ident: &str) -> String {
    let mut result = String::with_capacity(ident.len());
    for part in ident.split('_').filter(|p| !p.is_empty()) {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(&chars.as_str().to_lowercase());
        }
    }
    result
}

/// Converts PascalCase, camelCase or SCREAMING_CASE to lowercase snake_case.
///
/// Input without ASCII uppercase letters is returned unchanged. Otherwise an
/// underscore is inserted before an uppercase letter only at a camelCase
/// boundary: not at the start, not right after `_`, and only when the
/// previous character is lowercase or the next one is. Acronym runs are
/// therefore kept together (`UserID` -> `user_id`, `HTTPServer` ->
/// `http_server`).
pub fn to_snake_case(ident: &str) -> String {
    if !ident.bytes().any(|b| b.is_ascii_uppercase()) {
        return ident.to_string();
    }

    let chars: Vec<char> = ident.chars().collect();
    let mut result = String::with_capacity(ident.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_uppercase() {
            result.push(c);
            continue;
        }

        if i > 0 && chars[i - 1] != '_' {
            let prev_is_lower = chars[i - 1].is_ascii_lowercase();
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev_is_lower || next_is_lower {
                result.push('_');
            }
        }
        result.push(c.to_ascii_lowercase());
    }

    result
}
