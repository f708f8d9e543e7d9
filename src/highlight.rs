//! Line tokenizer
//!
//! Turns one line of source text into a sequence of classified [Token]s for
//! presentational coloring. This is a lexical highlighter, not a parser: it
//! knows nothing about nesting, and anything it does not recognize degrades to
//! plain text.
//!
//! Structure:
//!     Raw scanning is done by a vanilla logos lexer ([raw_tokens]) that only
//!     knows four shapes: quoted strings, digit runs, identifier runs and single
//!     symbols. Identifier classification (keyword, function call, type name)
//!     needs to look at the rest of the line, so it happens in a second pass in
//!     [tokenizer].
//!
//! Guarantees:
//!     - Lossless: concatenating the token texts reproduces the line exactly.
//!     - Total: every input, including the empty string, tokenizes.
//!     - Stateless: nothing carries over between lines.

pub mod escape;
pub mod keywords;
pub mod raw_tokens;
pub mod token;
pub mod tokenizer;

pub use escape::escape_html;
pub use keywords::{is_keyword, KEYWORDS};
pub use token::{detokenize, Token, TokenKind};
pub use tokenizer::{block_lines, tokenize_block, tokenize_line};
