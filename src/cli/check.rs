//! Check command implementation

use anyhow::Result;
use clap::Args;
use layered_settings::check;

use super::utils::SourceArgs;

#[derive(Args)]
pub struct CheckArgs {
    /// Exit with an error if anything is reported
    #[arg(long)]
    pub strict: bool,
}

pub fn run(sources: &SourceArgs, args: CheckArgs) -> Result<()> {
    let settings = sources.load()?;
    let findings = check::run(&settings);

    if findings.is_empty() {
        println!("No issues found.");
        return Ok(());
    }

    for finding in &findings {
        println!("WARNING {}: {}", finding.setting, finding.message);
    }
    println!("{} issue(s) found.", findings.len());

    if args.strict {
        anyhow::bail!("{} setting(s) are unsafe outside development", findings.len());
    }
    Ok(())
}
