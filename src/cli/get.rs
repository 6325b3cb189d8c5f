//! Get command implementation

use anyhow::Result;
use clap::Args;

use super::utils::SourceArgs;

#[derive(Args)]
pub struct GetArgs {
    /// Setting name, e.g. DEBUG
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Also print which layer set the value
    #[arg(long)]
    pub origin: bool,
}

pub fn run(sources: &SourceArgs, args: GetArgs) -> Result<()> {
    let settings = sources.load()?;
    let Some(setting) = settings.setting(&args.name) else {
        anyhow::bail!("Setting not found: {}", args.name);
    };

    println!("{}", serde_json::to_string(&setting.value)?);
    if args.origin {
        println!("origin: {}", setting.origin);
        if !setting.shadowed.is_empty() {
            let shadowed: Vec<String> = setting.shadowed.iter().map(ToString::to_string).collect();
            println!("shadowed: {}", shadowed.join(", "));
        }
    }
    Ok(())
}
