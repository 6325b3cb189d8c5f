//! settings: inspect the merged settings of a web application
//!
//! Loads the base, profile and local settings layers and prints the result,
//! its provenance, or advisory security findings.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
