//! Sources command implementation

use anyhow::Result;
use clap::Args;
use layered_settings::render::{build_report, write_report};
use std::path::PathBuf;

use super::utils::SourceArgs;

#[derive(Args)]
pub struct SourcesArgs {
    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Include secret values in the report
    #[arg(long)]
    pub reveal_secrets: bool,
}

pub fn run(sources: &SourceArgs, args: SourcesArgs) -> Result<()> {
    let settings = sources.load()?;
    match args.output {
        Some(path) => {
            write_report(&path, &settings, args.reveal_secrets)?;
            tracing::info!("Wrote settings report to {}", path.display());
        }
        None => {
            let report = build_report(&settings, args.reveal_secrets)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
