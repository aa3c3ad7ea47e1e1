use std::path::PathBuf;

use clap::Parser;

/// Reports the status of the current Steam download.
#[derive(Debug, Parser)]
#[command(name = "dlwatch", version, about)]
pub struct Cli {
    /// Configuration file (defaults to the per-user config location).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Steam installation directory; skips auto-detection.
    #[arg(long, value_name = "DIR")]
    pub steam_path: Option<PathBuf>,

    /// Number of polls before exiting.
    #[arg(long, value_name = "N")]
    pub polls: Option<u32>,

    /// Seconds between polls.
    #[arg(long, value_name = "SECS")]
    pub interval: Option<u64>,

    /// Trailing content log lines examined per poll.
    #[arg(long, value_name = "LINES")]
    pub window: Option<usize>,
}
