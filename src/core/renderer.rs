//! Turns a parsed resource into numbered display lines.

use crate::domain::model::{ParsedValue, RenderLine, Scalar};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME_KEY: &str = "name";
pub const DEFAULT_VALUE_KEY: &str = "profit";
pub const DEFAULT_PLACEHOLDER: &str = "Не указано";

/// Separator between a label and its value.
const SEPARATOR: &str = ":    ";

/// Which fields of a sequence entry are shown, and the marker used when one
/// is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub name_key: String,
    pub value_key: String,
    pub placeholder: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            name_key: DEFAULT_NAME_KEY.to_string(),
            value_key: DEFAULT_VALUE_KEY.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, value: &ParsedValue) -> Vec<RenderLine> {
        match value {
            ParsedValue::Sequence(items) => items
                .iter()
                .enumerate()
                .filter_map(|(idx, item)| self.render_entry(idx + 1, item))
                .collect(),
            ParsedValue::Mapping(entries) => entries
                .iter()
                .filter_map(|(key, v)| {
                    let text = v.display_text();
                    let text = text.trim();
                    (!text.is_empty()).then(|| format!("{}{}{}", key, SEPARATOR, text))
                })
                .collect(),
            ParsedValue::Null => Vec::new(),
            scalar @ ParsedValue::Scalar(_) => {
                let text = scalar.display_text();
                let text = text.trim();
                if text.is_empty() {
                    Vec::new()
                } else {
                    vec![text.to_string()]
                }
            }
        }
    }

    fn render_entry(&self, position: usize, item: &ParsedValue) -> Option<RenderLine> {
        if let ParsedValue::Mapping(_) = item {
            let name = item.get(&self.options.name_key);
            let value = item.get(&self.options.value_key);
            if self.is_placeholder(name) || self.is_placeholder(value) {
                return None;
            }
            return Some(format!(
                "{}. {}{}{}",
                position,
                self.field_text(name),
                SEPARATOR,
                self.field_text(value)
            ));
        }

        let text = item.display_text();
        let text = text.trim();
        (!text.is_empty()).then(|| format!("{}. {}", position, text))
    }

    /// Missing fields and string fields equal to the placeholder.
    fn is_placeholder(&self, field: Option<&ParsedValue>) -> bool {
        match field {
            None => true,
            Some(ParsedValue::Scalar(Scalar::Str(s))) => *s == self.options.placeholder,
            Some(_) => false,
        }
    }

    fn field_text(&self, field: Option<&ParsedValue>) -> String {
        field
            .map(ParsedValue::display_text)
            .unwrap_or_else(|| self.options.placeholder.clone())
    }
}

/// Renders with the default field keys and placeholder.
pub fn render(value: &ParsedValue) -> Vec<RenderLine> {
    Renderer::default().render(value)
}
