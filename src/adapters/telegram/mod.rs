//! Telegram transport: Bot API client, long-poll loop and reply sink.

pub mod api;
pub mod poller;
pub mod types;

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::ReplySink;
use crate::utils::error::Result;

pub use api::TelegramApi;
pub use poller::poll_loop;

/// Replies into a single Telegram chat.
pub struct TelegramReply {
    api: Arc<TelegramApi>,
    chat_id: i64,
}

impl TelegramReply {
    pub fn new(api: Arc<TelegramApi>, chat_id: i64) -> Self {
        Self { api, chat_id }
    }
}

#[async_trait]
impl ReplySink for TelegramReply {
    async fn send_text(&self, text: &str) -> Result<()> {
        self.api.send_message(self.chat_id, text).await?;
        Ok(())
    }
}
