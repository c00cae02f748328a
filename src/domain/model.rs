use std::fmt;
use thiserror::Error;

/// A scalar leaf of a parsed resource.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Number(serde_json::Number),
    Bool(bool),
}

/// Decoded content of a resource file.
///
/// Mappings keep the key order of the source document.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue {
    Null,
    Scalar(Scalar),
    Sequence(Vec<ParsedValue>),
    Mapping(Vec<(String, ParsedValue)>),
}

/// One line of rendered output.
pub type RenderLine = String;

impl ParsedValue {
    pub fn str(s: impl Into<String>) -> Self {
        ParsedValue::Scalar(Scalar::Str(s.into()))
    }

    /// Looks up a key in a mapping. Returns `None` for other shapes.
    pub fn get(&self, key: &str) -> Option<&ParsedValue> {
        match self {
            ParsedValue::Mapping(entries) => entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ParsedValue::Null)
    }

    /// True only for a string scalar that is exactly `""`.
    pub fn is_empty_str(&self) -> bool {
        matches!(self, ParsedValue::Scalar(Scalar::Str(s)) if s.is_empty())
    }

    /// Text shown to users for this value.
    ///
    /// Top-level strings are unquoted; nested containers fall back to
    /// compact JSON.
    pub fn display_text(&self) -> String {
        match self {
            ParsedValue::Scalar(Scalar::Str(s)) => s.clone(),
            other => other.to_string(),
        }
    }

    fn write_json(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedValue::Null => f.write_str("null"),
            ParsedValue::Scalar(Scalar::Str(s)) => write_json_string(f, s),
            ParsedValue::Scalar(Scalar::Number(n)) => write!(f, "{}", n),
            ParsedValue::Scalar(Scalar::Bool(b)) => write!(f, "{}", b),
            ParsedValue::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    item.write_json(f)?;
                }
                f.write_str("]")
            }
            ParsedValue::Mapping(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_json_string(f, key)?;
                    f.write_str(":")?;
                    value.write_json(f)?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_json_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
    f.write_str(&quoted)
}

impl fmt::Display for ParsedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_json(f)
    }
}

impl From<serde_json::Value> for ParsedValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ParsedValue::Null,
            serde_json::Value::Bool(b) => ParsedValue::Scalar(Scalar::Bool(b)),
            serde_json::Value::Number(n) => ParsedValue::Scalar(Scalar::Number(n)),
            serde_json::Value::String(s) => ParsedValue::Scalar(Scalar::Str(s)),
            serde_json::Value::Array(items) => {
                ParsedValue::Sequence(items.into_iter().map(ParsedValue::from).collect())
            }
            serde_json::Value::Object(map) => ParsedValue::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, ParsedValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Raw content could not be decoded as structured data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed content at line {line}, column {column}: {message}")]
pub struct MalformedContent {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

/// Newline-joined group of render lines destined for one outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk(String);

impl Chunk {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, the unit message limits are expressed in.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.split('\n')
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_keeps_key_order() {
        let value = ParsedValue::from(json!({"zeta": 1, "alpha": 2, "mid": 3}));
        let ParsedValue::Mapping(entries) = value else {
            panic!("expected a mapping");
        };
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(ParsedValue::str("Луна").display_text(), "Луна");
        assert_eq!(ParsedValue::from(json!(992.54)).display_text(), "992.54");
        assert_eq!(ParsedValue::from(json!(10)).display_text(), "10");
        assert_eq!(ParsedValue::from(json!(true)).display_text(), "true");
        assert_eq!(ParsedValue::Null.display_text(), "null");
        assert_eq!(
            ParsedValue::from(json!({"a": [1, "b"], "c": null})).display_text(),
            r#"{"a":[1,"b"],"c":null}"#
        );
    }

    #[test]
    fn test_get_only_on_mappings() {
        let item = ParsedValue::from(json!({"name": "x"}));
        assert_eq!(item.get("name"), Some(&ParsedValue::str("x")));
        assert_eq!(item.get("profit"), None);
        assert_eq!(ParsedValue::str("name").get("name"), None);
    }

    #[test]
    fn test_chunk_counts_characters() {
        let chunk = Chunk::new("цена\nprice");
        assert_eq!(chunk.char_len(), 10);
        assert_eq!(chunk.lines().collect::<Vec<_>>(), vec!["цена", "price"]);
    }
}
