//! Classified tokens produced by the line tokenizer.

use serde::Serialize;
use std::fmt;

/// Display category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Keyword,
    String,
    Number,
    Function,
    Type,
    Plain,
    /// Whole-line comment. Only produced by the comment short-circuit, never
    /// mixed with other kinds on the same line.
    Comment,
}

impl TokenKind {
    pub const ALL: [TokenKind; 7] = [
        TokenKind::Keyword,
        TokenKind::String,
        TokenKind::Number,
        TokenKind::Function,
        TokenKind::Type,
        TokenKind::Plain,
        TokenKind::Comment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Function => "function",
            TokenKind::Type => "type",
            TokenKind::Plain => "plain",
            TokenKind::Comment => "comment",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contiguous, classified slice of a source line.
///
/// `text` is the raw substring, never escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Plain, text)
    }
}

/// Rebuild the source line from its tokens
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
