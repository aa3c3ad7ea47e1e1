//! Polling loop: poll the content log, print a report, wait, repeat.

use dlwatch_content_log::{DownloadReport, poll};
use dlwatch_steam::Paths;

use crate::config::Config;

/// Runs `config.poll_count` polls, or until Ctrl-C.
pub async fn run(config: &Config, paths: &Paths) -> anyhow::Result<()> {
    let total = config.poll_count;
    println!(
        "Monitoring Steam downloads ({total} polls, every {}s)...\n",
        config.poll_interval_secs
    );

    for i in 1..=total {
        let report = poll(paths, config.window_lines);
        tracing::debug!(poll = i, ?report, "poll complete");
        println!("{}", render(i, total, &report));

        if i == total {
            break;
        }

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted, stopping monitor");
                break;
            }
            _ = tokio::time::sleep(config.poll_interval()) => {}
        }
    }

    Ok(())
}

/// Formats one poll result for the console.
fn render(index: u32, total: u32, report: &DownloadReport) -> String {
    match report {
        DownloadReport::Idle => format!("[{index}/{total}] No active download detected\n"),
        DownloadReport::Downloading {
            title,
            rate_mb_s,
            state,
            ..
        } => format!(
            "[{index}/{total}] Game: {title}\nSpeed: {rate_mb_s:.2} MB/s | Status: {state}\n"
        ),
    }
}
