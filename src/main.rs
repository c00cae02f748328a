use clap::Parser;
use json_catalog_bot::adapters::telegram::{poll_loop, TelegramApi};
use json_catalog_bot::utils::error::{BotError, ErrorSeverity};
use json_catalog_bot::utils::{logger, validation::Validate};
use json_catalog_bot::{scan_directory, BotConfig, BotRouter, CliConfig, LocalStore};
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliConfig::parse();

    let mut config = match BotConfig::load_or_default(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file is valid TOML");
            std::process::exit(1);
        }
    };
    args.apply_to(&mut config);

    logger::init_logger(args.verbose, config.log_format());
    tracing::info!("🚀 Starting json-catalog-bot");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let table = match scan_directory(Path::new(&config.catalog.directory), &config.catalog.extension) {
        Ok(table) => table,
        Err(e) => {
            tracing::error!(
                "❌ Failed to scan data directory {}: {}",
                config.catalog.directory,
                e
            );
            exit_with(&e);
        }
    };
    tracing::info!(
        "📁 Found {} resource file(s) in {}",
        table.len(),
        config.catalog.directory
    );
    if !table.is_empty() {
        let commands: Vec<String> = table.names().map(|n| format!("/{}", n)).collect();
        tracing::info!("Available commands: {}", commands.join(", "));
    }

    let router = Arc::new(BotRouter::new(table, LocalStore::new(), config.delivery()));

    if args.dry_run {
        println!("{}", router.help_text());
        return Ok(());
    }

    if let Some(command) = &args.preview {
        let replies = router.replies(&format!("/{}", command), "").await;
        for (i, reply) in replies.iter().enumerate() {
            if i > 0 {
                println!("-----");
            }
            println!("{}", reply);
        }
        return Ok(());
    }

    let token = match config.token() {
        Ok(token) => token.to_string(),
        Err(e) => exit_with(&e),
    };
    let api = Arc::new(TelegramApi::with_base_url(&token, &config.bot.api_base_url));

    let (cancel_tx, cancel_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Ctrl+C received, stopping bot");
            let _ = cancel_tx.send(true);
        }
    });

    tracing::info!("✅ Bot is running, press Ctrl+C to stop");
    poll_loop(api, router, config.bot.poll_timeout_seconds, cancel_rx).await;
    tracing::info!("Bot stopped");

    Ok(())
}

fn exit_with(e: &BotError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
