use anyhow::Result;
use clap::{Parser, Subcommand};

/// recipefinder - recipe search and weekly meal planning
#[derive(Parser)]
#[command(name = "recipefinder")]
#[command(about = "Recipe search, weekly meal planning and shopping lists", long_about = None)]
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
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = recipefinder::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize observability (tracing + logging)
    recipefinder::observability::init_observability(
        "recipefinder",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => {
            recipefinder::cli::server::serve(config, host, port).await
        }
        Commands::Migrate => recipefinder::cli::migrate::migrate(config).await,
        Commands::Reset => recipefinder::cli::migrate::reset(config).await,
    }
}
