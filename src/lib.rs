//! # x0-site
//!
//! Code highlighting and presentational components for the x0 landing page.
//!
//! The only piece with real logic is the line tokenizer in [highlight]: it
//! splits one line of source text into classified tokens that the renderers in
//! [formats] turn into styled markup. The [components] module holds the small
//! state machines behind the page widgets (code block copy button, FAQ
//! accordion, scroll reveal, navbar), and [site] composes them into a page
//! fragment from YAML content.

pub mod components;
pub mod config;
pub mod error;
pub mod formats;
pub mod highlight;
pub mod logging;
pub mod site;

pub use highlight::{tokenize_block, tokenize_line, Token, TokenKind};
