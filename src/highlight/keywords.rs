//! Reserved words recognized by the tokenizer.
//!
//! Matching is exact and case-sensitive: `Class` is not a keyword.

use once_cell::sync::Lazy;
use std::collections::HashSet;

pub const KEYWORDS: &[&str] = &[
    "import",
    "from",
    "const",
    "let",
    "var",
    "function",
    "async",
    "await",
    "return",
    "if",
    "else",
    "new",
    "export",
    "default",
    "class",
    "extends",
    "try",
    "catch",
    "throw",
    "interface",
    "type",
    "enum",
];

static KEYWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| KEYWORDS.iter().copied().collect());

pub fn is_keyword(word: &str) -> bool {
    KEYWORD_SET.contains(word)
}
