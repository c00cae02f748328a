use crate::adapters::telegram::api::DEFAULT_API_BASE_URL;
use crate::core::delivery::{Delivery, Messages, DEFAULT_MAX_MESSAGE_LENGTH};
use crate::core::renderer::RenderOptions;
use crate::utils::error::{BotError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Telegram refuses messages longer than this many characters.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Room kept for the `(label i/total)\n\n` prefix of continuation parts.
pub const CONTINUATION_HEADROOM: usize = 64;

/// Largest accepted `delivery.max_message_length`.
pub const MAX_CHUNK_LENGTH: usize = TELEGRAM_MESSAGE_LIMIT - CONTINUATION_HEADROOM;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub bot: TelegramConfig,
    pub catalog: CatalogConfig,
    pub delivery: DeliveryConfig,
    pub render: RenderOptions,
    pub messages: Messages,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegramConfig {
    pub token: Option<String>,
    pub api_base_url: String,
    pub poll_timeout_seconds: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            poll_timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub directory: String,
    pub extension: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            extension: "json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    pub max_message_length: usize,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: "compact".to_string(),
        }
    }
}

impl BotConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BotError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            tracing::info!(
                "Config file {} not found, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    /// Parses the configuration from a TOML string after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BotError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` references (for example `${TELEGRAM_BOT_TOKEN}`)
    /// with environment values.
    ///
    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// The bot token, treating blank values and unresolved `${VAR}`
    /// placeholders as missing.
    pub fn token(&self) -> Result<&str> {
        match self.bot.token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() && !token.starts_with("${") => Ok(token),
            _ => Err(BotError::MissingConfigError {
                field: "bot.token".to_string(),
            }),
        }
    }

    pub fn log_format(&self) -> LogFormat {
        LogFormat::from_name(&self.logging.format).unwrap_or_default()
    }

    /// Builds the delivery pipeline described by this configuration.
    pub fn delivery(&self) -> Delivery {
        Delivery::new(
            self.render.clone(),
            self.messages.clone(),
            self.delivery.max_message_length,
        )
    }

    /// Checks everything except the token, which dry runs do not need.
    pub fn validate_config(&self) -> Result<()> {
        validate_url("bot.api_base_url", &self.bot.api_base_url)?;
        validate_range("bot.poll_timeout_seconds", self.bot.poll_timeout_seconds, 0, 300)?;

        validate_path("catalog.directory", &self.catalog.directory)?;
        validate_non_empty_string("catalog.extension", &self.catalog.extension)?;

        validate_range(
            "delivery.max_message_length",
            self.delivery.max_message_length,
            1,
            MAX_CHUNK_LENGTH,
        )?;
        validate_non_empty_string("messages.continued", &self.messages.continued)?;
        if self.messages.continued.chars().count() > CONTINUATION_HEADROOM / 2 {
            return Err(BotError::InvalidConfigValueError {
                field: "messages.continued".to_string(),
                value: self.messages.continued.clone(),
                reason: format!(
                    "Must be at most {} characters",
                    CONTINUATION_HEADROOM / 2
                ),
            });
        }

        validate_non_empty_string("render.name_key", &self.render.name_key)?;
        validate_non_empty_string("render.value_key", &self.render.value_key)?;

        if LogFormat::from_name(&self.logging.format).is_none() {
            return Err(BotError::InvalidConfigValueError {
                field: "logging.format".to_string(),
                value: self.logging.format.clone(),
                reason: "Supported formats: compact, json".to_string(),
            });
        }

        Ok(())
    }
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
