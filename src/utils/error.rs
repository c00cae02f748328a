use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Telegram API error: {0}")]
    TelegramApiError(String),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BotError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BotError::HttpError(_) | BotError::TelegramApiError(_) => ErrorCategory::Network,
            BotError::IoError(_) => ErrorCategory::Io,
            BotError::ConfigValidationError { .. }
            | BotError::InvalidConfigValueError { .. }
            | BotError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // getUpdates/sendMessage failures are retried by the poller
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BotError::HttpError(_) => "Could not reach the Telegram Bot API".to_string(),
            BotError::TelegramApiError(desc) => format!("Telegram rejected the request: {}", desc),
            BotError::IoError(e) => format!("File system error: {}", e),
            BotError::MissingConfigError { field } => {
                format!("Required setting '{}' is not configured", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BotError::HttpError(_) => "Check network connectivity and the api_base_url setting",
            BotError::TelegramApiError(_) => "Verify the bot token with @BotFather",
            BotError::IoError(_) => "Check that the data directory exists and is readable",
            BotError::MissingConfigError { .. } => {
                "Set it in the config file, on the command line or via the environment"
            }
            BotError::ConfigValidationError { .. } | BotError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and restart the bot"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_are_critical() {
        let err = BotError::MissingConfigError {
            field: "bot.token".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("bot.token"));
    }

    #[test]
    fn test_io_errors_keep_their_source() {
        let err = BotError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "catalog missing",
        ));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.to_string(), "IO error: catalog missing");
    }

    #[test]
    fn test_telegram_errors_are_retryable() {
        let err = BotError::TelegramApiError("Unauthorized".to_string());
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.to_string(), "Telegram API error: Unauthorized");
    }
}
