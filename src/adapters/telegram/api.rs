//! Raw HTTP calls to the Telegram Bot API: `sendMessage` and `getUpdates`.

use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

use crate::utils::error::{BotError, Result};

use super::types::{ApiResponse, SentMessage, Update};

pub const DEFAULT_API_BASE_URL: &str = "https://api.telegram.org";

/// Low-level Telegram Bot API client.
pub struct TelegramApi {
    client: Client,
    base_url: String,
}

impl TelegramApi {
    pub fn new(bot_token: &str) -> Self {
        Self::with_base_url(bot_token, DEFAULT_API_BASE_URL)
    }

    /// Client against a custom API server (local Bot API server, tests).
    pub fn with_base_url(bot_token: &str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: format!("{}/bot{}", base_url.trim_end_matches('/'), bot_token),
        }
    }

    /// Send a plain-text message to a chat. Returns the sent message id.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<i64> {
        let body = json!({
            "chat_id": chat_id,
            "text": text,
        });

        debug!(chat_id, chars = text.chars().count(), "sendMessage");

        let resp = self
            .client
            .post(format!("{}/sendMessage", self.base_url))
            .json(&body)
            .send()
            .await?;

        let api_resp: ApiResponse<SentMessage> = resp.json().await?;
        if !api_resp.ok {
            let desc = api_resp.description.unwrap_or_default();
            warn!("sendMessage failed: {desc}");
            return Err(BotError::TelegramApiError(desc));
        }

        Ok(api_resp.result.map(|m| m.message_id).unwrap_or(0))
    }

    /// Long-poll for new updates.
    ///
    /// `offset` should be `last_update_id + 1` to acknowledge earlier updates.
    pub async fn get_updates(&self, offset: Option<i64>, timeout: u64) -> Result<Vec<Update>> {
        let mut body = json!({
            "timeout": timeout,
            "allowed_updates": ["message"],
        });

        if let Some(off) = offset {
            body["offset"] = json!(off);
        }

        let resp = self
            .client
            .post(format!("{}/getUpdates", self.base_url))
            // leave headroom over the server-side long-poll timeout
            .timeout(Duration::from_secs(timeout + 10))
            .json(&body)
            .send()
            .await?;

        let api_resp: ApiResponse<Vec<Update>> = resp.json().await?;
        if !api_resp.ok {
            let desc = api_resp.description.unwrap_or_default();
            warn!("getUpdates failed: {desc}");
            return Err(BotError::TelegramApiError(desc));
        }

        Ok(api_resp.result.unwrap_or_default())
    }
}
