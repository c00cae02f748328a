use crate::utils::error::{BotError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(BotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(BotError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(BotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(BotError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

fn command_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9_]{1,32}$").expect("command name pattern is valid"))
}

/// Telegram only routes `/commands` made of lowercase latin letters,
/// digits and underscores, at most 32 characters long.
pub fn is_valid_command_name(name: &str) -> bool {
    command_name_regex().is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("bot.api_base_url", "https://api.telegram.org").is_ok());
        assert!(validate_url("bot.api_base_url", "http://127.0.0.1:8081").is_ok());
        assert!(validate_url("bot.api_base_url", "").is_err());
        assert!(validate_url("bot.api_base_url", "invalid-url").is_err());
        assert!(validate_url("bot.api_base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("delivery.max_message_length", 4000, 1, 4096).is_ok());
        assert!(validate_range("delivery.max_message_length", 0, 1, 4096).is_err());
        assert!(validate_range("delivery.max_message_length", 5000, 1, 4096).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("bot.token", "123:abc").is_ok());
        assert!(validate_non_empty_string("bot.token", "   ").is_err());
    }

    #[test]
    fn test_command_names() {
        assert!(is_valid_command_name("prices"));
        assert!(is_valid_command_name("moon_set_3"));
        assert!(!is_valid_command_name("Prices"));
        assert!(!is_valid_command_name("my-file"));
        assert!(!is_valid_command_name("цены"));
        assert!(!is_valid_command_name(""));
        assert!(!is_valid_command_name(&"a".repeat(33)));
    }
}
