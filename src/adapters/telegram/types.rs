//! Serde types for the Telegram Bot API.
//!
//! Only the fields the bot reads are deserialized; unknown fields are ignored.

use serde::Deserialize;

/// Generic Telegram API response wrapper.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub description: Option<String>,
    pub result: Option<T>,
}

/// A Telegram Update object from `getUpdates`.
#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// Sent message result (only the id is used).
#[derive(Debug, Deserialize)]
pub struct SentMessage {
    pub message_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_update_with_command() {
        let json = r#"{
            "update_id": 10,
            "message": {
                "message_id": 77,
                "from": {"id": 5, "first_name": "Аня", "is_bot": false},
                "chat": {"id": 5, "type": "private"},
                "date": 1700000000,
                "text": "/prices"
            }
        }"#;
        let update: Update = serde_json::from_str(json).unwrap();
        assert_eq!(update.update_id, 10);
        let msg = update.message.unwrap();
        assert_eq!(msg.text.as_deref(), Some("/prices"));
        assert_eq!(msg.from.unwrap().first_name, "Аня");
    }

    #[test]
    fn deserialize_update_without_message() {
        let json = r#"{"update_id": 11, "edited_message": {"message_id": 1}}"#;
        let update: Update = serde_json::from_str(json).unwrap();
        assert!(update.message.is_none());
    }

    #[test]
    fn deserialize_api_response_error() {
        let json = r#"{"ok": false, "description": "Unauthorized"}"#;
        let resp: ApiResponse<Vec<Update>> = serde_json::from_str(json).unwrap();
        assert!(!resp.ok);
        assert_eq!(resp.description.as_deref(), Some("Unauthorized"));
    }
}
