//! Line tokenization
//!
//! Pipeline for one line:
//!     1. Comment short-circuit: a line whose trimmed form starts with `//` is a
//!        single comment token.
//!     2. Raw scan with the logos lexer in [super::raw_tokens].
//!     3. Classification of identifier runs. Order is fixed: keyword, then call
//!        position (next non-space character is `(`), then leading uppercase,
//!        then plain. `class(` is therefore a keyword, not a function.
//!
//! Numbers are digit runs with underscore separators only. `1.5`, `0xff` and
//! `1e9` split into several tokens; that is the intended scope of this
//! highlighter.

use super::keywords::is_keyword;
use super::raw_tokens::{tokenize_with_spans, RawToken};
use super::token::{Token, TokenKind};

const COMMENT_MARKER: &str = "//";

/// Tokenize a single line of source text.
///
/// Never fails: unrecognized input degrades to plain tokens.
pub fn tokenize_line(line: &str) -> Vec<Token> {
    if line.trim_start().starts_with(COMMENT_MARKER) {
        return vec![Token::new(TokenKind::Comment, line)];
    }

    let mut tokens = Vec::new();
    for (result, span) in tokenize_with_spans(line) {
        let text = &line[span.clone()];
        match result {
            Ok(raw) if raw.is_string() => tokens.push(Token::new(TokenKind::String, text)),
            Ok(RawToken::Number) => tokens.push(Token::new(TokenKind::Number, text)),
            Ok(RawToken::Word) => {
                let kind = classify_word(text, &line[span.end..]);
                tokens.push(Token::new(kind, text));
            }
            Ok(_) => tokens.push(Token::plain(text)),
            Err(()) => {
                tracing::trace!(?span, "unmatched input, emitting plain characters");
                tokens.extend(text.chars().map(|c| Token::plain(c.to_string())));
            }
        }
    }

    tokens
}

/// Classify an identifier run given the remainder of the line after it
fn classify_word(word: &str, rest: &str) -> TokenKind {
    if is_keyword(word) {
        TokenKind::Keyword
    } else if rest.trim_start_matches(' ').starts_with('(') {
        TokenKind::Function
    } else if word.starts_with(|c: char| c.is_ascii_uppercase()) {
        TokenKind::Type
    } else {
        TokenKind::Plain
    }
}

/// Split a code block into display lines.
///
/// Surrounding whitespace of the whole block is dropped first, so an empty
/// block still yields one empty line.
pub fn block_lines(code: &str) -> impl Iterator<Item = &str> {
    code.trim().split('\n')
}

/// Tokenize every display line of a code block
pub fn tokenize_block(code: &str) -> Vec<Vec<Token>> {
    block_lines(code).map(tokenize_line).collect()
}
