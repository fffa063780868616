use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod options;
mod render;

#[derive(Parser)]
#[command(name = "pathway", about = "Career recommendations from your skills and interests")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the career assessment
    Assess(commands::assess::AssessArgs),
    /// Browse the service catalogs
    Catalog(commands::catalog::CatalogArgs),
    /// Show the results of your last assessment
    Results,
    /// Discard the last results and start over
    Retake,
    /// Check recommendation service availability
    Status(commands::status::StatusArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Assess(args) => commands::assess::run(args).await,
        Commands::Catalog(args) => commands::catalog::run(args).await,
        Commands::Results => commands::results::run(),
        Commands::Retake => commands::retake::run(),
        Commands::Status(args) => commands::status::run(args).await,
    }
}
