//! Format registry for tokenized code
//!
//! Each format implements the `Formatter` trait and is looked up by name, so
//! the CLI can expose every registered format without knowing about them.

use super::html::{HtmlFormatter, HtmlTheme};
use super::json::JsonFormatter;
use super::tag::TagFormatter;
use crate::error::FormatError;
use crate::highlight::Token;
use std::collections::HashMap;

/// Trait for token stream formatters
///
/// Implementors serialize the tokens of a block, one `Vec<Token>` per line.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "html", "tag")
    fn name(&self) -> &str;

    /// Serialize tokenized lines to this format
    fn serialize(&self, lines: &[Vec<Token>]) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of token formatters
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize tokenized lines using the specified format
    pub fn serialize(&self, lines: &[Vec<Token>], format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(lines)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters, using `theme` for html
    pub fn with_theme(theme: HtmlTheme) -> Self {
        let mut registry = Self::new();

        registry.register(HtmlFormatter::new(theme));
        registry.register(JsonFormatter);
        registry.register(TagFormatter);

        registry
    }

    /// Create a registry with default formatters
    pub fn with_defaults() -> Self {
        Self::with_theme(HtmlTheme::default())
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
