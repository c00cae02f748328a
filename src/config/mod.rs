pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

pub use toml_config::BotConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "json-catalog-bot")]
#[command(about = "Telegram bot that serves JSON data files as chat commands")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "bot-config.toml")]
    pub config: String,

    /// Bot token (overrides the config file; falls back to TELEGRAM_BOT_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Directory scanned for data files (overrides catalog.directory)
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Log format: compact or json (overrides logging.format)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// List the commands that would be registered and exit
    #[arg(long)]
    pub dry_run: bool,

    /// Print the replies for one command to stdout and exit
    #[arg(long, value_name = "COMMAND")]
    pub preview: Option<String>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Applies command-line overrides on top of the file configuration.
    pub fn apply_to(&self, config: &mut BotConfig) {
        if let Some(token) = &self.token {
            config.bot.token = Some(token.clone());
        } else if config.token().is_err() {
            if let Ok(token) = std::env::var("TELEGRAM_BOT_TOKEN") {
                config.bot.token = Some(token);
            }
        }

        if let Some(dir) = &self.data_dir {
            config.catalog.directory = dir.clone();
        }

        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
    }
}
