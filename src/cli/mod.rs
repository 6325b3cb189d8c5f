//! Command-line interface for layered settings
//!
//! Provides `show`, `get`, `sources`, `check` and `completions` subcommands.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod check;
mod get;
mod show;
mod sources;
mod utils;

/// Inspect the merged settings of a web application
#[derive(Parser)]
#[command(name = "settings")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    sources: utils::SourceArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the merged settings
    Show(show::ShowArgs),

    /// Print one setting as JSON
    Get(get::GetArgs),

    /// Print where every setting came from
    Sources(sources::SourcesArgs),

    /// Report settings that are unsafe outside development
    Check(check::CheckArgs),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Show(args) => show::run(&cli.sources, args),
        Commands::Get(args) => get::run(&cli.sources, args),
        Commands::Sources(args) => sources::run(&cli.sources, args),
        Commands::Check(args) => check::run(&cli.sources, args),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "settings", &mut std::io::stdout());
            Ok(())
        }
    }
}
