//! Sequences classification, rendering and pagination into reply messages.

use crate::adapters::catalog::CommandTable;
use crate::adapters::json::parse_json;
use crate::core::classifier::is_empty;
use crate::core::paginator::paginate;
use crate::core::renderer::{RenderOptions, Renderer};
use crate::domain::model::{MalformedContent, ParsedValue};
use crate::domain::ports::ResourceStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Default upper bound for a single outgoing message, in characters.
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 4000;

/// User-facing texts. `{name}`, `{error}` and `{first_name}` are substituted
/// where noted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub no_content: String,
    pub invalid_content: String,
    /// `{name}` is the requested command.
    pub not_found: String,
    /// `{error}` is the failure description.
    pub failure: String,
    /// Label of the `(label i/total)` prefix on continuation parts.
    pub continued: String,
    /// `{first_name}` is the requesting user's first name.
    pub greeting: String,
    pub help_header: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            no_content: "В данный момент предложений нет в категории".to_string(),
            invalid_content: "Ошибка: файл содержит некорректный JSON".to_string(),
            not_found: "Файл {name}.json не найден".to_string(),
            failure: "Ошибка: {error}".to_string(),
            continued: "продолжение".to_string(),
            greeting: "Привет, {first_name}!\n\n\
                       Я бот для отображения данных из JSON файлов.\n\
                       Используйте /help чтобы увидеть все доступные команды."
                .to_string(),
            help_header: "Доступные команды:".to_string(),
        }
    }
}

impl Messages {
    pub fn not_found_for(&self, name: &str) -> String {
        self.not_found.replace("{name}", name)
    }

    pub fn failure_for(&self, error: &str) -> String {
        self.failure.replace("{error}", error)
    }

    pub fn greeting_for(&self, first_name: &str) -> String {
        self.greeting.replace("{first_name}", first_name)
    }
}

#[derive(Debug, Clone)]
pub struct Delivery {
    renderer: Renderer,
    messages: Messages,
    max_message_length: usize,
}

impl Default for Delivery {
    fn default() -> Self {
        Self::new(
            RenderOptions::default(),
            Messages::default(),
            DEFAULT_MAX_MESSAGE_LENGTH,
        )
    }
}

impl Delivery {
    pub fn new(options: RenderOptions, messages: Messages, max_message_length: usize) -> Self {
        Self {
            renderer: Renderer::new(options),
            messages,
            max_message_length: max_message_length.max(1),
        }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Turns a parse outcome into the ordered list of outgoing messages.
    pub fn classify_and_render(
        &self,
        raw: &str,
        parsed: Result<ParsedValue, MalformedContent>,
    ) -> Vec<String> {
        let value = match parsed {
            Ok(value) => value,
            Err(e) => {
                if raw.trim().is_empty() {
                    debug!("blank resource, reporting no content");
                    return vec![self.messages.no_content.clone()];
                }
                warn!(error = %e, "resource is not valid JSON");
                return vec![self.messages.invalid_content.clone()];
            }
        };

        if is_empty(&value) {
            return vec![self.messages.no_content.clone()];
        }

        let lines = self.renderer.render(&value);
        let text = lines.join("\n");
        if text.is_empty() {
            // every entry was skipped by the render rules
            return vec![self.messages.no_content.clone()];
        }

        if text.chars().count() <= self.max_message_length {
            return vec![text];
        }

        let chunks = paginate(&lines, self.max_message_length);
        let total = chunks.len();
        chunks
            .into_iter()
            .enumerate()
            .map(|(idx, chunk)| {
                if idx == 0 {
                    chunk.into_string()
                } else {
                    format!(
                        "({} {}/{})\n\n{}",
                        self.messages.continued,
                        idx + 1,
                        total,
                        chunk.as_str()
                    )
                }
            })
            .collect()
    }

    /// Resolves `command` in `table`, reads and parses the resource, and
    /// returns the reply messages. Failures become user-facing messages.
    pub async fn deliver<S: ResourceStore>(
        &self,
        table: &CommandTable,
        store: &S,
        command: &str,
    ) -> Vec<String> {
        let Some(path) = table.get(command) else {
            info!(command, "no resource for command");
            return vec![self.messages.not_found_for(command)];
        };

        let bytes = match store.read_resource(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(command, path = %path.display(), error = %e, "failed to read resource");
                return vec![self.messages.failure_for(&e.to_string())];
            }
        };

        let raw = match String::from_utf8(bytes) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(command, error = %e, "resource is not valid UTF-8");
                return vec![self.messages.failure_for(&e.to_string())];
            }
        };

        let parsed = parse_json(&raw);
        let replies = self.classify_and_render(&raw, parsed);
        debug!(command, parts = replies.len(), "prepared reply");
        replies
    }
}
