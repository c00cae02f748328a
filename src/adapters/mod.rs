// Adapters layer: concrete implementations for external systems (file system, JSON, Telegram).

pub mod catalog;
pub mod json;
pub mod telegram;
