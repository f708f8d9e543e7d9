//! Error types
//!
//! The tokenizer and the renderers are total and have no error type. Errors
//! only arise at the edges: picking an output format, loading configuration or
//! content, and talking to the platform clipboard.

use std::path::PathBuf;
use thiserror::Error;

/// Error that can occur while producing an output format
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Error loading site content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid content: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Failure reported by a clipboard implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard access denied")]
    Denied,
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}
