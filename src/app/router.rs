//! Routes chat commands to the built-in replies or to resource delivery.

use crate::adapters::catalog::CommandTable;
use crate::core::delivery::Delivery;
use crate::domain::ports::{ReplySink, ResourceStore};
use crate::utils::error::Result;
use tracing::{debug, warn};

/// Extracts the command name from a chat message.
///
/// `"/prices@my_bot extra"` yields `"prices"`. Text that is not a command
/// yields `None`.
pub fn parse_command(text: &str) -> Option<&str> {
    let first = text.split_whitespace().next()?;
    let cmd = first.strip_prefix('/')?;
    let cmd = cmd.split('@').next().unwrap_or(cmd);
    (!cmd.is_empty()).then_some(cmd)
}

pub struct BotRouter<S: ResourceStore> {
    table: CommandTable,
    store: S,
    delivery: Delivery,
}

impl<S: ResourceStore> BotRouter<S> {
    pub fn new(table: CommandTable, store: S, delivery: Delivery) -> Self {
        Self {
            table,
            store,
            delivery,
        }
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    pub fn help_text(&self) -> String {
        let commands: Vec<String> = self.table.names().map(|n| format!("/{}", n)).collect();
        format!(
            "{}\n{}",
            self.delivery.messages().help_header,
            commands.join("\n")
        )
    }

    /// Replies for one incoming message, in sending order. Non-command text
    /// gets no reply.
    pub async fn replies(&self, text: &str, first_name: &str) -> Vec<String> {
        let Some(command) = parse_command(text) else {
            return Vec::new();
        };

        match command {
            "start" => vec![self.delivery.messages().greeting_for(first_name)],
            "help" => vec![self.help_text()],
            name => self.delivery.deliver(&self.table, &self.store, name).await,
        }
    }

    /// Computes the replies for `text` and sends them through `sink` in
    /// order. Returns the number of messages sent.
    ///
    /// The first send failure stops the reply; the failure message is then
    /// sent in its place. The error is returned only when that send fails
    /// too.
    pub async fn handle_text<R>(&self, sink: &R, text: &str, first_name: &str) -> Result<usize>
    where
        R: ReplySink + ?Sized,
    {
        let replies = self.replies(text, first_name).await;
        for (sent, reply) in replies.iter().enumerate() {
            if let Err(e) = sink.send_text(reply).await {
                warn!(part = sent + 1, parts = replies.len(), error = %e, "reply part rejected");
                let notice = self.delivery.messages().failure_for(&e.to_string());
                sink.send_text(&notice).await?;
                return Ok(sent + 1);
            }
        }
        if !replies.is_empty() {
            debug!(parts = replies.len(), "reply sent");
        }
        Ok(replies.len())
    }
}
