use crate::domain::model::{MalformedContent, ParsedValue};

/// Decodes JSON text into a [`ParsedValue`].
pub fn parse_json(raw: &str) -> Result<ParsedValue, MalformedContent> {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(ParsedValue::from)
        .map_err(|e| MalformedContent {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })
}
