//! Ledgerkit CLI - Main entry point

use clap::{Parser, Subcommand};
use ledgerkit_cli::{commands, CliConfig, TemplateArgs, TemplateKind};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ledgerkit")]
#[command(about = "Ledgerkit - transaction DSL toolkit", long_about = None)]
struct Cli {
    /// Config file path (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level, overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON transaction payload
    Validate {
        /// Payload file
        file: PathBuf,
    },

    /// Validate a payload and print its canonical wire form
    Normalize {
        /// Payload file
        file: PathBuf,
    },

    /// Print a generated transaction payload
    Template {
        /// Transaction shape
        #[arg(value_enum)]
        kind: TemplateKind,
        /// Amount to move
        #[arg(long)]
        value: String,
        /// Account (destination for deposit, source otherwise)
        #[arg(long)]
        account: String,
        /// Destination account (transfer only)
        #[arg(long)]
        to_account: Option<String>,
        /// Asset code, defaults to the configured asset
        #[arg(long)]
        asset: Option<String>,
        /// Transaction description
        #[arg(long)]
        description: Option<String>,
        /// Transaction code
        #[arg(long)]
        code: Option<String>,
        /// Create the transaction as pending
        #[arg(long)]
        pending: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load_or_default(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
        config.validate()?;
    }

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "configuration loaded");

    let output = match cli.command {
        Commands::Validate { file } => commands::validate(&file)?,
        Commands::Normalize { file } => commands::normalize(&file, &config)?,
        Commands::Template {
            kind,
            value,
            account,
            to_account,
            asset,
            description,
            code,
            pending,
        } => {
            let args = TemplateArgs {
                asset,
                value,
                account,
                to_account,
                description,
                code,
                pending,
            };
            commands::template(kind, &args, &config)?
        }
    };

    println!("{output}");
    Ok(())
}
