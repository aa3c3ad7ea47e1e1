//! dlwatch entry point.

mod cli;
mod config;
mod monitor;

use anyhow::Context;
use clap::Parser;
use dlwatch_steam::Paths;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::Config;

fn main() -> anyhow::Result<()> {
    // Reports go to stdout; keep logs quiet unless asked for.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_cli(&cli);

    let paths = match &config.steam_path {
        Some(dir) => Paths::with_base(dir),
        None => Paths::new().context("Steam installation path not found")?,
    };
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        steam = %paths.base_dir().display(),
        "starting dlwatch"
    );

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(monitor::run(&config, &paths))
}
