//! AlFred CLI
//!
//! Command-line front end for the knowledge board:
//! - List knowledge cards
//! - Upload a document with files
//! - Remove a document
//! - Generate a config file

use alfred::board::{AssumeYes, Board, ConsolePrompt, Outcome, Prompt};
use alfred::client::{ClientConfig, KnowledgeClient};
use alfred::config::{generate_default_config, Config, LoggingConfig};
use alfred::records::UploadFile;
use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "alfred")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "AlFred knowledge management client")]
#[command(long_about = "Browse, upload, and remove knowledge documents on an AlFred backend.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides config file and API_BASE_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file path (default: search standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List knowledge cards
    List,

    /// Upload a new knowledge document
    Upload {
        /// Document name
        #[arg(short, long)]
        name: String,
        /// Document description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Files to attach
        files: Vec<PathBuf>,
    },

    /// Remove a knowledge document by id
    Remove {
        /// Record identifier
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let (mut config, loaded) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, None),
        None => {
            let loaded = Config::load_default();
            (loaded.config.clone(), Some(loaded))
        }
    };
    if let Some(url) = &cli.api_url {
        config = config.with_base_url(url.as_str());
    }

    init_logging(&config.logging);

    if let Some(loaded) = &loaded {
        for error in &loaded.skipped {
            tracing::warn!("Skipping config file: {}", error);
        }
        match &loaded.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::debug!("Using default config with environment overrides"),
        }
    }
    tracing::debug!(base_url = %config.api.base_url, "using knowledge backend");

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("writing config to {:?}", path))?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(ExitCode::SUCCESS);
    }

    let client = KnowledgeClient::new(ClientConfig::from(&config.api))?;

    match cli.command {
        Commands::List => {
            let mut board = Board::with_config(client, ConsolePrompt::stdio(), &config.board);
            let outcome = board.load().await;

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(board.records())?),
                _ => print!("{}", board.view()),
            }

            if let Outcome::Failed(message) = outcome {
                bail!(message);
            }
        }

        Commands::Upload {
            name,
            description,
            files,
        } => {
            let mut uploads = Vec::with_capacity(files.len());
            for path in &files {
                let file = UploadFile::from_path(path)
                    .await
                    .with_context(|| format!("reading {:?}", path))?;
                uploads.push(file);
            }

            let mut board = Board::with_config(client, ConsolePrompt::stdio(), &config.board);
            board.open_form();
            board.set_name(name);
            board.set_description(description);
            board.set_files(uploads);

            // The prompt has already shown the failure
            if !board.submit().await.is_completed() {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Remove { id, yes } => {
            if yes {
                remove(client, AssumeYes, &config, &id).await?;
            } else {
                remove(client, ConsolePrompt::stdio(), &config, &id).await?;
            }
        }

        Commands::Config { .. } => unreachable!("handled above"),
    }

    Ok(ExitCode::SUCCESS)
}

async fn remove<P: Prompt>(
    client: KnowledgeClient,
    prompt: P,
    config: &Config,
    id: &str,
) -> anyhow::Result<()> {
    let mut board = Board::with_config(client, prompt, &config.board);

    match board.remove(id).await {
        Outcome::Completed => println!("Removed {}", id),
        Outcome::Declined => println!("Cancelled"),
        Outcome::Failed(message) => bail!(message),
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("alfred={}", config.level)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
