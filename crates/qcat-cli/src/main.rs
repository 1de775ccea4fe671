//! qcat: a cat on the Bloch sphere.
//!
//! Simulates `P(φ)·RY(θ)|0⟩`, anchors an orange cat at the resulting Bloch
//! point and draws it in the terminal or exports the scene as JSON.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Result;
use clap::Parser;
use console::style;

use qcat_cli::{Cli, QcatConfig, logging, pipeline};

fn execute(cli: &Cli) -> Result<()> {
    let mut config = QcatConfig::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);
    config.validate()?;

    pipeline::execute(&config)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    if let Err(e) = execute(&cli) {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}
