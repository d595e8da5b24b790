mod args;

use crate::args::Cli;
use anyhow::{Context, Result};
use clap::Parser;
use foundry::domain::config::ShowcaseConfig;
use foundry::kernel::config::load_config;
use foundry_logger::Logger;
use std::io::{self, Write};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logger = Logger::builder().name(env!("CARGO_PKG_NAME")).level(cli.log_level);
    let logger = match &cli.log_dir {
        Some(dir) => logger.file(dir),
        None => logger,
    };
    let _logger = logger.init()?;

    let mut config: ShowcaseConfig = load_config(cli.config.as_deref())?;
    let selection = cli.apply(&mut config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let ran = foundry::run(selection, &config, &mut out)?;
    out.flush().context("Failed to flush showcase output")?;

    info!(ran, "Showcases finished");
    Ok(())
}
