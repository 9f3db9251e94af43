use std::process::exit;

use anyhow::Result;
use clap::Parser;
use tokio::runtime::Builder;
use tracing::{error, info, Level};

use histmon::cli::{Cli, Commands};
use histmon::config::Config;
use histmon::install::Installer;
use histmon::logging::init_logging;
use histmon::notify::send;
use histmon::record::CommandRecord;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        if tracing::enabled!(Level::ERROR) {
            error!("{err:#}");
        } else {
            eprintln!("histmon: {err:#}");
        }
        exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_cli(&cli);
    let command = cli.subcommand();
    info!(?config, ?command, "Starting histmon");

    match command {
        Commands::Install => {
            let report = Installer::new()?.install(&config)?;
            println!(
                "Hook written to {}. Restart your shell or run `source {}`.",
                report.hook_script.display(),
                report.zshrc.display()
            );
        }
        Commands::Send => {
            let record = CommandRecord::from(cli.record);
            let rt = Builder::new_current_thread().enable_all().build()?;
            rt.block_on(send(&config, &record))?;
        }
    }
    Ok(())
}
