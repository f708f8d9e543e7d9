//! Output formats for tokenized code
//!
//! A tokenized block stays structured (`Vec<Vec<Token>>`) until one of these
//! formatters serializes it. [html] is the only one meant for pages; [json] and
//! [tag] exist for tooling and inspection.

pub mod html;
pub mod json;
pub mod registry;
pub mod tag;

pub use registry::{FormatRegistry, Formatter};
