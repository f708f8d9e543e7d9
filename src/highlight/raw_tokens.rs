//! Raw token shapes for the line tokenizer
//!
//! The tokens are defined using the logos derive macro. Every character of a
//! line starts exactly one of these shapes, so the lexer never needs priorities
//! to break ties, and every state inside a shape is accepting, so matches are
//! found without backtracking.
use logos::Logos;

/// Lexical shapes recognized before classification
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawToken {
    // Quoted strings. A backslash escapes the next character; a trailing lone
    // backslash and a missing closing quote are both accepted.
    #[regex(r#""([^"\\]|\\.)*("|\\)?"#)]
    DoubleQuoted,
    #[regex(r#"'([^'\\]|\\.)*('|\\)?"#)]
    SingleQuoted,
    #[regex(r#"`([^`\\]|\\.)*(`|\\)?"#)]
    Backquoted,

    // Digits with underscore separators only
    #[regex(r"[0-9][0-9_]*")]
    Number,

    // Identifier run, classified later
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Word,

    // Any other single character, including each space
    #[regex(r#"[^"'`0-9A-Za-z_$]"#)]
    Symbol,
}

impl RawToken {
    /// Check if this token is a quoted string of any flavor
    pub fn is_string(&self) -> bool {
        matches!(
            self,
            RawToken::DoubleQuoted | RawToken::SingleQuoted | RawToken::Backquoted
        )
    }
}

/// Tokenize a line into raw shapes with their byte spans
pub fn tokenize_with_spans(line: &str) -> Vec<(Result<RawToken, ()>, logos::Span)> {
    let mut lexer = RawToken::lexer(line);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push((result, lexer.span()));
    }

    tokens
}
