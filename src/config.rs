//! Configuration loading.
//!
//! `defaults/site.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Callers layer user-specific files on top of
//! those defaults via [`Loader`] before deserializing into [`SiteConfig`].

use crate::formats::html::HtmlTheme;
use crate::highlight::TokenKind;
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

const DEFAULT_TOML: &str = include_str!("../defaults/site.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub code_block: CodeBlockConfig,
    pub reveal: RevealConfig,
}

/// CSS class per token kind. An empty string means unstyled.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    pub keyword: String,
    pub string: String,
    pub number: String,
    pub function: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub comment: String,
    pub plain: String,
}

impl ThemeConfig {
    pub fn to_theme(&self) -> HtmlTheme {
        let mut theme = HtmlTheme::unstyled();
        for kind in TokenKind::ALL {
            let class = match kind {
                TokenKind::Keyword => &self.keyword,
                TokenKind::String => &self.string,
                TokenKind::Number => &self.number,
                TokenKind::Function => &self.function,
                TokenKind::Type => &self.type_name,
                TokenKind::Comment => &self.comment,
                TokenKind::Plain => &self.plain,
            };
            if !class.is_empty() {
                theme.set_class(kind, class.clone());
            }
        }
        theme
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodeBlockConfig {
    pub language: String,
    pub show_line_numbers: bool,
    pub copy_feedback_ms: u64,
}

impl CodeBlockConfig {
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RevealConfig {
    pub delay_ms: u64,
    pub threshold: f64,
    pub root_margin: String,
}

impl RevealConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SiteConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SiteConfig, ConfigError> {
    Loader::new().build()
}
