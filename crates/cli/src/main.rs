//! Kainji terminal driver
//!
//! Drives the token-creation form from stdin against an in-process wallet.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use kainji_cli::{run, ConsoleSink};
use kainji_form::{AuthGateway, FormConfig, LocalWallet, TokenCreationForm};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "kainji")]
#[command(about = "Create a token from the terminal (simulated mint)")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "kainji.toml")]
    config: String,

    /// Override log level
    #[arg(long)]
    log_level: Option<String>,

    /// Start with the wallet already connected
    #[arg(long)]
    connected: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = FormConfig::load_or_default(&cli.config)?;
    if let Some(log_level) = cli.log_level {
        config.logging.log_level = log_level;
    }

    init_logging(&config);
    info!("Starting Kainji token form");

    let wallet = Arc::new(LocalWallet::new());
    if cli.connected {
        wallet.connect();
    }

    let mut form = TokenCreationForm::new(wallet, Arc::new(ConsoleSink), &config);

    println!("Create Your Token (type `help` for commands)");
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run(&mut form, stdin, &mut stdout).await?;

    info!("Shutting down Kainji token form");
    Ok(())
}

fn init_logging(config: &FormConfig) {
    let log_level = config
        .logging
        .log_level
        .parse()
        .unwrap_or(tracing::Level::INFO);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("kainji={},kainji_form={},kainji_cli={}", log_level, log_level, log_level)
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
