use clap::{Parser, Subcommand};
use std::path::Path;
use std::sync::Arc;

use filter_bot::application::errors::BotError;
use filter_bot::application::messaging::CommandDispatcher;
use filter_bot::application::services::{MessageService, Outcome};
use filter_bot::domain::entities::{Guild, InboundMessage};
use filter_bot::domain::traits::ReplySink;
use filter_bot::infrastructure::adapters::ConsoleAdapter;
use filter_bot::infrastructure::config::{Config, ConsoleConfig};
use filter_bot::infrastructure::open_store;

#[derive(Parser)]
#[command(name = "filter-bot")]
#[command(about = "A chat bot that keeps per-guild word filters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Default command prefix (overrides config)
    #[arg(short, long)]
    prefix: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot on the console
    Run,
    /// Handle a single message as if it was sent in a guild
    Exec {
        /// Guild id
        #[arg(long)]
        guild: String,
        /// Guild name shown in replies
        #[arg(long)]
        guild_name: Option<String>,
        /// Message text, e.g. "f!add cats"
        text: String,
    },
    /// Print guild prefixes and filters as JSON (every stored guild without --guild)
    Show {
        /// Guild id
        #[arg(long)]
        guild: Option<String>,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run => load_config(&cli.config, cli.prefix).and_then(run_bot),
        Commands::Exec { guild, guild_name, text } => load_config(&cli.config, cli.prefix)
            .and_then(|config| exec_message(config, guild, guild_name, text)),
        Commands::Show { guild } => load_config(&cli.config, cli.prefix)
            .and_then(|config| show_guild(config, guild)),
        Commands::Version => {
            println!("filter-bot v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(config_path: &str, prefix_override: Option<String>) -> Result<Config, BotError> {
    let mut config = if Path::new(config_path).exists() {
        let mut config = Config::load(config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        });
        config.apply_env();
        config
    } else {
        Config::load_env()
    };

    if let Some(prefix) = prefix_override {
        config.bot.default_prefix = prefix;
    }
    config.validate()?;
    Ok(config)
}

fn runtime() -> Result<tokio::runtime::Runtime, BotError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| BotError::Internal(format!("Failed to start runtime: {}", e)))
}

fn build_service(config: &Config) -> Result<MessageService, BotError> {
    let store = open_store(config)?;
    let dispatcher = Arc::new(CommandDispatcher::new(store));
    Ok(MessageService::new(dispatcher).with_reply_on_unknown(config.bot.reply_on_unknown))
}

fn run_bot(config: Config) -> Result<(), BotError> {
    tracing::info!("Starting {}", config.bot.name);

    runtime()?.block_on(async {
        let service = build_service(&config)?;
        let bot = ConsoleAdapter::new(config.bot.name.clone());
        run_console_bot(&bot, &service, &config.console).await
    })
}

async fn run_console_bot(bot: &ConsoleAdapter, service: &MessageService, console: &ConsoleConfig) -> Result<(), BotError> {
    let info = bot.bot_info();
    tracing::info!("Bot started: @{} in guild {}", info.username, console.guild_name);

    let guild = Guild::new(console.guild_id.clone(), console.guild_name.clone());
    let mut lines = ConsoleAdapter::stdin_lines();

    // Main loop (for console mode)
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| BotError::Internal(format!("Failed to read stdin: {}", e)))?
    {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let message = InboundMessage::in_guild(guild.clone(), "console", console.author_id.clone(), input);
        match service.on_message(&message, bot).await {
            Ok(outcome) => tracing::debug!("Outcome: {:?}", outcome),
            Err(e) => tracing::error!("Failed to handle message: {}", e),
        }
    }

    tracing::info!("Input closed, shutting down");
    Ok(())
}

fn exec_message(config: Config, guild_id: String, guild_name: Option<String>, text: String) -> Result<(), BotError> {
    runtime()?.block_on(async {
        let service = build_service(&config)?;
        let bot = ConsoleAdapter::new(config.bot.name.clone());

        let name = guild_name.unwrap_or_else(|| guild_id.clone());
        let message = InboundMessage::in_guild(Guild::new(guild_id, name), "cli", config.console.author_id.clone(), text);

        match service.on_message(&message, &bot).await? {
            Outcome::Unrecognized(rest) => println!("Unknown command: {}", rest),
            Outcome::Clean => println!("No filters matched"),
            _ => {}
        }
        Ok::<(), BotError>(())
    })
}

fn show_guild(config: Config, guild_id: Option<String>) -> Result<(), BotError> {
    runtime()?.block_on(async {
        let store = open_store(&config)?;
        let json = match guild_id {
            Some(id) => serde_json::to_string_pretty(&store.get_guild_config(&id).await?),
            None => {
                let mut guilds = Vec::new();
                for id in store.list_guilds().await? {
                    guilds.push(store.get_guild_config(&id).await?);
                }
                serde_json::to_string_pretty(&guilds)
            }
        }
        .map_err(|e| BotError::Internal(format!("Failed to serialize guild: {}", e)))?;
        println!("{}", json);
        Ok::<(), BotError>(())
    })
}

fn init_config() -> Result<(), BotError> {
    let yaml = serde_yaml::to_string(&Config::default())
        .map_err(|e| BotError::Internal(format!("Failed to serialize config: {}", e)))?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
