use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand};
use ircp_core::{
    load_config, load_config_or_default, primary_symbol, resolve_state, resolve_symbol,
    try_one_suggestions, TryOneRequest,
};
use ircp_schema::Topic;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod journal;
mod journal_ui;
mod reference;

#[derive(Parser)]
#[command(name = "ircp", version, about = "IRCP guided reflection journal")]
struct Cli {
    #[arg(
        long,
        default_value = "~/.ircp",
        help = "Config root directory (contains config/, logs/ and exports)"
    )]
    config_root: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Write a guided entry and export it as PDF")]
    Journal {
        #[arg(long, help = "Skip the topic menu (e.g. conflict, record-win)")]
        topic: Option<Topic>,
    },
    #[command(about = "List reflection topics")]
    Topics,
    #[command(about = "Show the state symbol key")]
    States {
        #[arg(long, help = "Include the full state descriptions")]
        detail: bool,
    },
    #[command(about = "Show the User Compass")]
    Compass,
    #[command(about = "Resolve a state id, legacy id, label or glyph")]
    Resolve {
        #[arg(long, help = "State id (current or legacy)")]
        id: Option<String>,
        #[arg(long, help = "State label (current or legacy)")]
        label: Option<String>,
        #[arg(long, help = "State glyph")]
        symbol: Option<String>,
    },
    #[command(about = "Compute a try-one trio")]
    Suggest {
        #[arg(long)]
        topic: Topic,
        #[arg(long = "symbol", help = "Selected state glyph (repeatable)")]
        symbols: Vec<String>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, help = "Hash of the trio shown last time")]
        previous: Option<String>,
    },
    #[command(about = "Validate config files")]
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Expand ~ to home directory
    if cli.config_root.starts_with("~") {
        if let Some(home) = std::env::var_os("HOME") {
            cli.config_root = PathBuf::from(home).join(
                cli.config_root
                    .strip_prefix("~")
                    .unwrap_or(&cli.config_root),
            );
        }
    }

    let log_dir = cli.config_root.join("logs");
    std::fs::create_dir_all(&log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&log_dir, "ircp.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .init();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Journal { topic } => {
            let config = load_config_or_default(&cli.config_root.join("config"))?;
            journal::run_journal(&cli.config_root, &config, topic).await?;
        }
        Commands::Topics => print!("{}", reference::topics_listing()),
        Commands::States { detail } => {
            if detail {
                print!("{}", reference::states_listing());
            } else {
                print!("{}", reference::symbol_key_listing());
            }
        }
        Commands::Compass => print!("{}", reference::compass_listing()),
        Commands::Resolve { id, label, symbol } => {
            let state = match symbol.as_deref() {
                Some(glyph) => resolve_symbol(glyph),
                None => resolve_state(id.as_deref(), label.as_deref()),
            };
            let state = state.ok_or_else(|| anyhow!("no matching state"))?;
            print!("{}", reference::state_detail(state));
        }
        Commands::Suggest {
            topic,
            symbols,
            seed,
            previous,
        } => {
            let result = try_one_suggestions(&TryOneRequest {
                topic,
                primary_symbol: primary_symbol(&symbols),
                rotation_seed: seed,
                previous_hash: previous.as_deref(),
            });
            print!("{}", reference::try_one_listing(&result));
        }
        Commands::Validate => {
            let config = load_config(&cli.config_root.join("config"))?;
            println!(
                "Config valid. exports -> {}, hash slot: {}, history limit {}.",
                config.export_dir(&cli.config_root).display(),
                config.suggestions.hash_slot,
                config.history.limit
            );
        }
    }

    Ok(())
}
