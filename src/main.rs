use anyhow::Result;
use clap::{Parser, Subcommand};

/// portfolio - contact form backend
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Portfolio contact form service", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// List stored contact messages
    Messages {
        /// Maximum number of messages to print
        #[arg(long, default_value_t = 20)]
        limit: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = portfolio::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    portfolio::observability::init_observability(
        "portfolio",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Serve { host, port } => portfolio::cli::serve(config, host, port).await,
        Commands::Migrate => portfolio::cli::migrate(config).await,
        Commands::Reset => portfolio::cli::reset(config).await,
        Commands::Messages { limit } => portfolio::cli::list_messages(config, limit).await,
    }
}
