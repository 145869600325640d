//! CLI application for telecom SMS invoice extraction.

mod commands;
mod tally;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, detect, process};

/// Extract Tally import data from CloudXP, RJIL and JTL invoices
#[derive(Parser)]
#[command(name = "billex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract fields from a single invoice file
    Process(process::ProcessArgs),

    /// Extract fields from multiple invoice files
    Batch(batch::BatchArgs),

    /// Detect which invoice template a document matches
    Detect(detect::DetectArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Process(args) => process::run(args).await,
        Commands::Batch(args) => batch::run(args).await,
        Commands::Detect(args) => detect::run(args).await,
    }
}
