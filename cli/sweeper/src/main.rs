//! bucketsweep CLI
//!
//! Bulk read sweep of an S3-compatible bucket.

use clap::Parser;
use tracing::info;

mod args;
mod run;

use args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    run::init_logging(args.log_level)?;

    info!(endpoint = %args.endpoint, bucket = %args.bucket, "Sweeping bucket");

    let summary = run::execute(args).await?;

    // Report results to stderr
    eprintln!();
    eprintln!("Sweep completed:");
    eprintln!("  Objects listed:  {}", summary.objects_listed);
    eprintln!("  Tasks enqueued:  {}", summary.tasks_enqueued);
    eprintln!("  Tasks succeeded: {}", summary.tasks_succeeded);
    eprintln!("  Tasks failed:    {}", summary.tasks_failed);
    eprintln!("  Bytes read:      {}", format_bytes(summary.bytes_read));
    eprintln!("  Listing errors:  {}", summary.listing_errors);

    if let Some(duration) = summary.duration() {
        eprintln!(
            "  Duration:        {:.2}s",
            duration.num_milliseconds() as f64 / 1000.0
        );

        if let Some(mbps) = summary.read_throughput_mbps() {
            eprintln!("  Throughput:      {:.1} MB/s", mbps);
        }
    }

    for error in &summary.errors {
        eprintln!("  Error: {}", error);
    }

    // Per-object failures are already counted above; the sweep itself
    // completed, so the exit status stays zero.
    Ok(())
}

/// Format bytes as human-readable string.
fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
