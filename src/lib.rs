pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::catalog::{scan_directory, CommandTable, LocalStore};
pub use crate::adapters::json::parse_json;
pub use crate::app::router::BotRouter;
pub use crate::config::BotConfig;
pub use crate::core::classifier::is_empty;
pub use crate::core::delivery::{Delivery, Messages};
pub use crate::core::paginator::paginate;
pub use crate::core::renderer::{render, RenderOptions, Renderer};
pub use crate::domain::model::{Chunk, MalformedContent, ParsedValue, Scalar};
pub use crate::utils::error::{BotError, Result};
