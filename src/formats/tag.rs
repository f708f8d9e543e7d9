//! Tag format: one `<kind>text</kind>` per token, lines separated by a
//! `<line n>` header. Handy for eyeballing classification in snapshots.
//!
//! Text is written raw, not escaped; this is a debugging view, not markup.

use super::registry::Formatter;
use crate::error::FormatError;
use crate::highlight::Token;
use std::fmt::Write;

pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, lines: &[Vec<Token>]) -> Result<String, FormatError> {
        let mut out = String::new();
        for (index, line) in lines.iter().enumerate() {
            writeln!(out, "<line {}>", index + 1)
                .map_err(|e| FormatError::SerializationError(e.to_string()))?;
            for token in line {
                writeln!(out, "  <{kind}>{text}</{kind}>", kind = token.kind, text = token.text)
                    .map_err(|e| FormatError::SerializationError(e.to_string()))?;
            }
        }
        Ok(out)
    }

    fn description(&self) -> &str {
        "Debug listing of classified tokens"
    }
}
