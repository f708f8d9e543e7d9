//! Highlighted code block with line numbers and a copy button.

use crate::config::CodeBlockConfig;
use crate::error::ClipboardError;
use crate::formats::html::{render_line, HtmlTheme};
use crate::highlight::{block_lines, escape_html, tokenize_line};
use std::time::{Duration, Instant};

const DEFAULT_LANGUAGE: &str = "typescript";
const DEFAULT_COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Platform clipboard capability
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyState {
    Idle,
    /// Acknowledgement shown until `until`
    Copied { until: Instant },
}

/// Copy action with a transient acknowledgement.
///
/// Copying again while acknowledged restarts the window from the latest copy.
#[derive(Debug, Clone)]
pub struct CopyButton {
    state: CopyState,
    feedback: Duration,
}

impl CopyButton {
    pub fn new(feedback: Duration) -> Self {
        Self {
            state: CopyState::Idle,
            feedback,
        }
    }

    /// Write `text` to the clipboard.
    ///
    /// Best effort: a clipboard failure is logged and leaves the state as is.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, text: &str, now: Instant) {
        match clipboard.write_text(text) {
            Ok(()) => {
                self.state = CopyState::Copied {
                    until: now + self.feedback,
                };
                tracing::debug!(bytes = text.len(), "copied code block");
            }
            Err(err) => tracing::warn!(error = %err, "copy to clipboard failed"),
        }
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        matches!(self.state, CopyState::Copied { until } if now < until)
    }

    /// Drop an expired acknowledgement. Returns whether it is still shown.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.is_copied(now) {
            self.state = CopyState::Idle;
        }
        self.state != CopyState::Idle
    }

    pub fn state(&self) -> CopyState {
        self.state
    }
}

impl Default for CopyButton {
    fn default() -> Self {
        Self::new(DEFAULT_COPY_FEEDBACK)
    }
}

/// A block of source code shown on the page
#[derive(Debug, Clone)]
pub struct CodeBlock {
    pub code: String,
    pub language: String,
    pub show_line_numbers: bool,
    pub title: Option<String>,
    copy_button: CopyButton,
}

impl CodeBlock {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            show_line_numbers: true,
            title: None,
            copy_button: CopyButton::default(),
        }
    }

    /// A block using the configured language, numbering and copy feedback
    pub fn from_config(code: impl Into<String>, config: &CodeBlockConfig) -> Self {
        Self {
            language: config.language.clone(),
            show_line_numbers: config.show_line_numbers,
            copy_button: CopyButton::new(config.copy_feedback()),
            ..Self::new(code)
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    /// Display lines: the trimmed block split on newlines
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        block_lines(&self.code)
    }

    /// Copy the whole, untrimmed block
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, now: Instant) {
        self.copy_button.copy(clipboard, &self.code, now);
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copy_button.is_copied(now)
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        self.copy_button.poll(now)
    }

    pub fn render(&self, theme: &HtmlTheme, now: Instant) -> String {
        let mut out = String::new();
        out.push_str("<div class=\"code-block\">\n");

        if let Some(title) = &self.title {
            out.push_str(&format!(
                "<div class=\"code-title\"><span>{}</span><span class=\"code-language\">{}</span></div>\n",
                escape_html(title),
                escape_html(&self.language)
            ));
        }

        let copied = self.is_copied(now);
        out.push_str(&format!(
            "<button class=\"copy-button\" aria-label=\"Copy code\" data-copied=\"{copied}\">{}</button>\n",
            if copied { "Copied" } else { "Copy" }
        ));

        out.push_str("<pre><code>\n");
        for (index, line) in self.lines().enumerate() {
            out.push_str("<div class=\"table-row\">");
            if self.show_line_numbers {
                out.push_str(&format!("<span class=\"line-number\">{}</span>", index + 1));
            }
            out.push_str(&format!(
                "<span class=\"table-cell\">{}</span></div>\n",
                render_line(&tokenize_line(line), theme)
            ));
        }
        out.push_str("</code></pre>\n</div>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeClipboard {
        contents: Option<String>,
        deny: bool,
    }

    impl Clipboard for FakeClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.deny {
                return Err(ClipboardError::Denied);
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_acknowledges_for_two_seconds() {
        let start = Instant::now();
        let mut block = CodeBlock::new("  let x = 1;\n");
        let mut clipboard = FakeClipboard::default();

        block.copy(&mut clipboard, start);

        assert_eq!(clipboard.contents.as_deref(), Some("  let x = 1;\n"));
        assert!(block.is_copied(start));
        assert!(block.is_copied(start + Duration::from_millis(1999)));
        assert!(!block.is_copied(start + Duration::from_secs(2)));
        assert!(!block.poll(start + Duration::from_secs(3)));
        assert_eq!(block.copy_button.state(), CopyState::Idle);
    }

    #[test]
    fn test_second_copy_restarts_window() {
        let start = Instant::now();
        let mut button = CopyButton::default();
        let mut clipboard = FakeClipboard::default();

        button.copy(&mut clipboard, "a", start);
        button.copy(&mut clipboard, "a", start + Duration::from_millis(1500));

        assert!(button.poll(start + Duration::from_millis(2500)));
    }

    #[test]
    fn test_denied_clipboard_is_silent() {
        let now = Instant::now();
        let mut button = CopyButton::default();
        let mut clipboard = FakeClipboard {
            deny: true,
            ..Default::default()
        };

        button.copy(&mut clipboard, "secret", now);

        assert!(!button.is_copied(now));
        assert!(clipboard.contents.is_none());
    }

    #[test]
    fn test_lines_are_trimmed_block() {
        let block = CodeBlock::new("\n\nconst a = 1;\nconst b = 2;\n\n");
        assert_eq!(block.lines().collect::<Vec<_>>(), vec!["const a = 1;", "const b = 2;"]);
    }

    #[test]
    fn test_render_with_numbers_and_title() {
        let block = CodeBlock::new("let a\n// done").with_title("Setup");
        let html = block.render(&HtmlTheme::default(), Instant::now());

        assert!(html.contains("<span>Setup</span><span class=\"code-language\">typescript</span>"));
        assert!(html.contains(
            "<span class=\"line-number\">1</span><span class=\"table-cell\"><span class=\"text-purple-400\">let</span> a</span>"
        ));
        assert!(html.contains("<span class=\"line-number\">2</span>"));
        assert!(html.contains("data-copied=\"false\">Copy</button>"));
    }

    #[test]
    fn test_render_without_numbers() {
        let block = CodeBlock::new("x").with_line_numbers(false);
        let html = block.render(&HtmlTheme::default(), Instant::now());

        assert!(!html.contains("line-number"));
        assert!(!html.contains("code-title"));
    }

    #[test]
    fn test_render_shows_acknowledgement() {
        let now = Instant::now();
        let mut block = CodeBlock::new("x");
        block.copy(&mut FakeClipboard::default(), now);

        let html = block.render(&HtmlTheme::default(), now);
        assert!(html.contains("data-copied=\"true\">Copied</button>"));
    }
}
