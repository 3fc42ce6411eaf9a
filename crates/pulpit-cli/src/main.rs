use clap::{Parser, Subcommand};
use pulpit_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pulpit", version, about = "Pulpit ministry media CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sermon library
    Sermons {
        #[command(subcommand)]
        action: commands::sermons::SermonsAction,
    },
    /// Prophetic declarations, re-sorted daily at midnight
    Declarations {
        #[command(subcommand)]
        action: commands::declarations::DeclarationsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Diagnostics go to stderr so stdout stays clean for JSON output.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    init_tracing(&config);

    let result = match cli.command {
        Commands::Sermons { action } => commands::sermons::run(action, &config),
        Commands::Declarations { action } => commands::declarations::run(action, &config),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
