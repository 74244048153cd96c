use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;

use translator_bot::application::messaging::MessageDispatcher;
use translator_bot::application::services::CommandService;
use translator_bot::domain::traits::{Bot, Translator};
use translator_bot::infrastructure::adapters::TelegramAdapter;
use translator_bot::infrastructure::config::{Settings, DEFAULT_CONFIG_PATH};
use translator_bot::infrastructure::logging::{self, DEFAULT_LOG_FILE};
use translator_bot::infrastructure::translate::GoogleTranslator;

/// Long-poll timeout for getUpdates
const POLL_TIMEOUT_SECONDS: i64 = 30;

/// Pause after a failed getUpdates or getMe call
const POLL_ERROR_BACKOFF_SECONDS: u64 = 5;

/// getMe attempts before giving up on an unreachable Bot API
const STARTUP_ATTEMPTS: u32 = 12;

#[derive(Parser)]
#[command(name = "translator-bot")]
#[command(about = "Telegram bot that translates /t messages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log file path (appended to)
    #[arg(short, long, default_value = DEFAULT_LOG_FILE)]
    log_file: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot (default)
    Run,
    /// Show version
    Version,
    /// Print a sample config
    InitConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_bot(&cli.config, &cli.log_file),
        Commands::Version => {
            println!("translator-bot v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Commands::InitConfig => init_config(),
    }
}

fn run_bot(config_path: &str, log_file: &str) -> ExitCode {
    let log = match logging::init(log_file) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("Logging to {}", log.path().display());

    let settings = match Settings::load(config_path) {
        Ok(settings) => Arc::new(settings),
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        "Starting translator-bot (token: {}, {} -> {})",
        settings.token_hint(),
        settings.source_lang,
        settings.target_lang
    );

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    rt.block_on(async {
        let translator: Arc<dyn Translator> = Arc::new(GoogleTranslator::new());
        let mut commands = CommandService::new();
        commands.register_defaults(settings.clone(), translator);

        let mut bot = TelegramAdapter::new(settings.token.clone());
        run_telegram_bot(&mut bot, commands).await
    })
}

async fn run_telegram_bot(bot: &mut TelegramAdapter, commands: CommandService) -> ExitCode {
    // Fetch bot info; a rejected token is a configuration error
    let backoff = tokio::time::Duration::from_secs(POLL_ERROR_BACKOFF_SECONDS);
    if let Err(e) = bot.connect(STARTUP_ATTEMPTS, backoff).await {
        tracing::error!("Failed to fetch bot info: {}", e);
        return ExitCode::FAILURE;
    }

    let info = bot.bot_info();
    tracing::info!("Bot started: @{}", info.username);

    let dispatcher = MessageDispatcher::new(info.username, commands);

    // Register bot commands with Telegram
    if let Err(e) = bot.register_commands(&dispatcher.commands().commands()).await {
        tracing::warn!("Failed to register commands: {}", e);
    }

    let mut offset: i64 = 0;

    tracing::info!("Starting message loop...");

    loop {
        match bot.get_updates(offset, POLL_TIMEOUT_SECONDS).await {
            Ok(updates) => {
                offset = TelegramAdapter::get_next_offset(&updates, offset);

                for update in updates {
                    let Some(message) = update.into_message() else {
                        continue;
                    };

                    let chat_id = message.chat_id.clone();
                    if let Err(e) = dispatcher.dispatch(&*bot, message).await {
                        tracing::error!("Failed to handle message in chat {}: {}", chat_id, e);
                    }
                }
            }
            Err(e) => {
                tracing::error!("Failed to get updates: {}", e);
                tokio::time::sleep(tokio::time::Duration::from_secs(POLL_ERROR_BACKOFF_SECONDS)).await;
            }
        }
    }
}

fn init_config() -> ExitCode {
    match serde_yaml::to_string(&Settings::sample()) {
        Ok(yaml) => {
            println!("{}", yaml);
            println!("# Save this to {} and adjust as needed.", DEFAULT_CONFIG_PATH);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to render sample config: {}", e);
            ExitCode::FAILURE
        }
    }
}
