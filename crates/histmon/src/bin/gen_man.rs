use clap_mangen::Man;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use clap::CommandFactory;
use histmon::cli::Cli;

fn main() -> Result<()> {
    let out_path = std::env::args().nth(1).unwrap_or_else(|| "histmon.1".to_string());
    let path = Path::new(&out_path);
    let mut file = File::create(path).with_context(|| format!("Creating {}", path.display()))?;
    Man::new(Cli::command())
        .render(&mut file)
        .context("Rendering man page")?;
    eprintln!("Generated man page at {}", path.display());
    Ok(())
}
