//! Page content and composition
//!
//! Content lives in a YAML file:
//!
//! ```yaml
//! navbar:            # optional, defaults to the x0 navbar
//!   brand: x0
//!   links: [{label: Ecosystem, href: "#features"}]
//!   actions: []
//! code_samples:
//!   - title: Create an agent
//!     reveal_delay_ms: 100   # optional, defaults to reveal.delay_ms
//!     reveal_class: demo     # optional extra class on the reveal wrapper
//!     code: |
//!       const agent = await client.createAgent(policy);
//! faq_reveal_delay_ms: 200   # optional
//! faq:
//!   - question: What is x0?
//!     answer: A payments protocol.
//! ```
//!
//! [render_page] stacks the navbar, each code sample inside a reveal wrapper,
//! and the FAQ inside one more. Layout beyond that ordering belongs to the
//! stylesheet.

use crate::components::{CodeBlock, Disclosure, ElementId, FaqItem, Navbar, ScrollReveal};
use crate::config::{CodeBlockConfig, RevealConfig, SiteConfig};
use crate::error::ContentError;
use serde::Deserialize;
use std::path::Path;
use std::time::{Duration, Instant};

/// A code sample as written in content files. Unset fields fall back to the
/// code block configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodeSample {
    pub code: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub show_line_numbers: Option<bool>,
    /// Overrides `reveal.delay_ms` for this sample
    #[serde(default)]
    pub reveal_delay_ms: Option<u64>,
    #[serde(default)]
    pub reveal_class: Option<String>,
}

impl CodeSample {
    pub fn to_block(&self, config: &CodeBlockConfig) -> CodeBlock {
        let mut block = CodeBlock::from_config(self.code.clone(), config);
        if let Some(title) = &self.title {
            block = block.with_title(title.clone());
        }
        if let Some(language) = &self.language {
            block = block.with_language(language.clone());
        }
        if let Some(show) = self.show_line_numbers {
            block = block.with_line_numbers(show);
        }
        block
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub navbar: Option<Navbar>,
    #[serde(default)]
    pub code_samples: Vec<CodeSample>,
    #[serde(default)]
    pub faq: Vec<FaqItem>,
    /// Overrides `reveal.delay_ms` for the FAQ section
    #[serde(default)]
    pub faq_reveal_delay_ms: Option<u64>,
}

impl SiteContent {
    pub fn from_yaml(source: &str) -> Result<Self, ContentError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::from_yaml(&source)?;
        tracing::debug!(
            path = %path.display(),
            code_samples = content.code_samples.len(),
            faq = content.faq.len(),
            "loaded site content"
        );
        Ok(content)
    }
}

fn reveal_for(
    index: usize,
    config: &RevealConfig,
    delay_ms: Option<u64>,
    class: Option<&str>,
) -> ScrollReveal {
    let mut reveal = ScrollReveal::from_config(ElementId(index as u64), config);
    if let Some(ms) = delay_ms {
        reveal = reveal.with_delay(Duration::from_millis(ms));
    }
    if let Some(class) = class {
        reveal = reveal.with_class(class);
    }
    reveal
}

/// Render the page fragment in its initial (nothing revealed, nothing open)
/// state.
pub fn render_page(content: &SiteContent, config: &SiteConfig) -> String {
    let theme = config.theme.to_theme();
    let now = Instant::now();
    let mut out = String::new();

    out.push_str(&content.navbar.clone().unwrap_or_default().render());

    for (index, sample) in content.code_samples.iter().enumerate() {
        let block = sample.to_block(&config.code_block);
        let reveal = reveal_for(
            index,
            &config.reveal,
            sample.reveal_delay_ms,
            sample.reveal_class.as_deref(),
        );
        out.push_str(&reveal.render(&block.render(&theme, now)));
    }

    if !content.faq.is_empty() {
        let reveal = reveal_for(
            content.code_samples.len(),
            &config.reveal,
            content.faq_reveal_delay_ms,
            None,
        );
        out.push_str(&reveal.render(&Disclosure::new(content.faq.clone()).render()));
    }

    out
}
