//! Long-polling loop for Telegram Bot API `getUpdates`.
//!
//! Each text message is handed to the router on its own task so a slow
//! resource never holds up other chats.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::app::router::BotRouter;
use crate::domain::ports::ResourceStore;

use super::api::TelegramApi;
use super::TelegramReply;

/// Maximum delay between retries after `getUpdates` failures.
const MAX_BACKOFF_SECS: u64 = 60;

/// Run the long-polling loop until `cancel` flips to `true`.
pub async fn poll_loop<S>(
    api: Arc<TelegramApi>,
    router: Arc<BotRouter<S>>,
    poll_timeout: u64,
    mut cancel: watch::Receiver<bool>,
) where
    S: ResourceStore + 'static,
{
    let mut offset: Option<i64> = None;
    let mut backoff_secs = 1u64;

    info!(commands = router.table().len(), "Telegram poller started");

    loop {
        if *cancel.borrow() {
            info!("Telegram poller shutting down");
            return;
        }

        let updates = tokio::select! {
            result = api.get_updates(offset, poll_timeout) => result,
            _ = cancel.changed() => {
                info!("Telegram poller cancelled");
                return;
            }
        };

        match updates {
            Ok(updates) => {
                backoff_secs = 1;

                for update in updates {
                    offset = Some(update.update_id + 1);

                    let Some(msg) = update.message else {
                        continue;
                    };
                    let Some(text) = msg.text else {
                        continue;
                    };

                    let chat_id = msg.chat.id;
                    let first_name = msg
                        .from
                        .map(|u| u.first_name)
                        .unwrap_or_default();
                    debug!(chat_id, message_id = msg.message_id, "incoming message");

                    let router = Arc::clone(&router);
                    let sink = TelegramReply::new(Arc::clone(&api), chat_id);
                    tokio::spawn(async move {
                        if let Err(e) = router.handle_text(&sink, &text, &first_name).await {
                            warn!(chat_id, error = %e, "failed to deliver reply");
                        }
                    });
                }
            }
            Err(e) => {
                warn!(error = %e, backoff_secs, "getUpdates failed, backing off");
                tokio::time::sleep(std::time::Duration::from_secs(backoff_secs)).await;
                backoff_secs = (backoff_secs * 2).min(MAX_BACKOFF_SECS);
            }
        }
    }
}
