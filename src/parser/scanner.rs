//! Character-level scanning shared by the extractor and the splitter.
//!
//! Tracks parenthesis depth and whether the cursor is inside a quoted
//! span, so commas and parentheses inside `'...'`, `"..."` or `` `...` ``
//! are treated as plain text.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Trim the statement and collapse every whitespace run (spaces, tabs,
/// newlines) into a single space.
pub fn normalize_whitespace(sql: &str) -> String {
    WHITESPACE_RUN_RE.replace_all(sql.trim(), " ").into_owned()
}

/// What a single character meant to the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scan {
    Open,
    Close,
    /// A comma at depth 0 outside quotes
    Separator,
    Text,
}

#[derive(Debug, Default)]
pub(crate) struct DelimiterScanner {
    depth: i32,
    quote: Option<char>,
    escaped: bool,
}

impl DelimiterScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn in_quote(&self) -> bool {
        self.quote.is_some()
    }

    /// Advance over one character and classify it.
    pub fn step(&mut self, c: char) -> Scan {
        if let Some(q) = self.quote {
            if self.escaped {
                self.escaped = false;
            } else if c == '\\' && q != '`' {
                self.escaped = true;
            } else if c == q {
                self.quote = None;
            }
            return Scan::Text;
        }

        match c {
            '\'' | '"' | '`' => {
                self.quote = Some(c);
                Scan::Text
            }
            '(' => {
                self.depth += 1;
                Scan::Open
            }
            ')' => {
                self.depth -= 1;
                Scan::Close
            }
            ',' if self.depth == 0 => Scan::Separator,
            _ => Scan::Text,
        }
    }
}

/// Byte offset of the `)` that closes the `(` at `open`, or `None` when
/// the parenthesis is never closed.
pub(crate) fn find_matching_paren(text: &str, open: usize) -> Option<usize> {
    let mut scanner = DelimiterScanner::new();
    for (offset, c) in text[open..].char_indices() {
        if scanner.step(c) == Scan::Close && scanner.depth() == 0 {
            return Some(open + offset);
        }
    }
    None
}

/// Byte offset of the first whole-word, case-insensitive `keyword` that
/// sits outside quoted text.
pub(crate) fn find_keyword(text: &str, keyword: &str) -> Option<usize> {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let mut scanner = DelimiterScanner::new();
    let mut prev: Option<char> = None;

    for (i, c) in text.char_indices() {
        if !scanner.in_quote() && !prev.is_some_and(is_word) {
            let candidate = text.get(i..i + keyword.len());
            if candidate.is_some_and(|s| s.eq_ignore_ascii_case(keyword))
                && !text[i + keyword.len()..].chars().next().is_some_and(is_word)
            {
                return Some(i);
            }
        }
        scanner.step(c);
        prev = Some(c);
    }
    None
}
