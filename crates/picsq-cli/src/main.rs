mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "picsq", about = "Turn rectangular images into squares by cropping or padding")]
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
    /// Square one or more images and save them
    Square(commands::square::SquareArgs),
    /// Show preview geometry and the crop selection for an image
    Geometry(commands::geometry::GeometryArgs),
    /// Print or save a default config file
    Config(commands::config::ConfigArgs),
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
        Commands::Square(args) => commands::square::run(args),
        Commands::Geometry(args) => commands::geometry::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
