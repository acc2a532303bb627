mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cirrus", about = "Cloud cover index from sky-camera photos")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the cloud cover index of one or more sky photos
    Index(commands::index::IndexArgs),
    /// Show image file metadata
    Info(commands::info::InfoArgs),
    /// Time the pipeline across downscale factors
    Bench(commands::bench::BenchArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Index(args) => commands::index::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Bench(args) => commands::bench::run(args),
    }
}
