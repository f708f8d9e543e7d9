//! JSON output: an array of lines, each an array of `{kind, text}` objects.

use super::registry::Formatter;
use crate::error::FormatError;
use crate::highlight::Token;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, lines: &[Vec<Token>]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(lines)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Token kinds and texts as JSON"
    }
}
