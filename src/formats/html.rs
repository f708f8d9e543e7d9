//! HTML rendering of tokens
//!
//! Each token becomes either bare escaped text (unstyled kinds) or a
//! `<span class="…">` around the escaped text. Token text is only ever emitted
//! through [escape_html], so literal `<script>` in source shows up as text.

use super::registry::Formatter;
use crate::error::FormatError;
use crate::highlight::{escape_html, Token, TokenKind};
use std::collections::HashMap;

/// CSS class per token kind. Kinds without a class render as bare text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTheme {
    classes: HashMap<TokenKind, String>,
}

impl HtmlTheme {
    /// A theme with no classes at all
    pub fn unstyled() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    pub fn set_class(&mut self, kind: TokenKind, class: impl Into<String>) {
        self.classes.insert(kind, class.into());
    }

    pub fn class_for(&self, kind: TokenKind) -> Option<&str> {
        self.classes.get(&kind).map(String::as_str)
    }
}

impl Default for HtmlTheme {
    /// The landing page palette
    fn default() -> Self {
        let mut theme = Self::unstyled();
        theme.set_class(TokenKind::Keyword, "text-purple-400");
        theme.set_class(TokenKind::String, "text-green-400");
        theme.set_class(TokenKind::Number, "text-orange-400");
        theme.set_class(TokenKind::Function, "text-blue-400");
        theme.set_class(TokenKind::Type, "text-yellow-400");
        theme.set_class(TokenKind::Comment, "text-gray-500");
        theme
    }
}

pub fn render_token(token: &Token, theme: &HtmlTheme) -> String {
    let text = escape_html(&token.text);
    match theme.class_for(token.kind) {
        Some(class) => format!("<span class=\"{}\">{}</span>", escape_html(class), text),
        None => text.into_owned(),
    }
}

pub fn render_line(tokens: &[Token], theme: &HtmlTheme) -> String {
    tokens.iter().map(|t| render_token(t, theme)).collect()
}

/// Renders each line as markup, one output line per input line
pub struct HtmlFormatter {
    theme: HtmlTheme,
}

impl HtmlFormatter {
    pub fn new(theme: HtmlTheme) -> Self {
        Self { theme }
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new(HtmlTheme::default())
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn serialize(&self, lines: &[Vec<Token>]) -> Result<String, FormatError> {
        let mut out = String::new();
        for line in lines {
            out.push_str(&render_line(line, &self.theme));
            out.push('\n');
        }
        Ok(out)
    }

    fn description(&self) -> &str {
        "Styled <span> markup per line"
    }
}
