//! Show command implementation

use anyhow::Result;
use clap::Args;
use layered_settings::render::{render, OutputFormat};

use super::utils::SourceArgs;

#[derive(Args)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print secret values instead of masking them
    #[arg(long)]
    pub reveal_secrets: bool,
}

pub fn run(sources: &SourceArgs, args: ShowArgs) -> Result<()> {
    let settings = sources.load()?;
    print!("{}", render(&settings, args.format, args.reveal_secrets)?);
    Ok(())
}
