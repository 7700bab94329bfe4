//! Main execution logic for the bucketsweep CLI.

use anyhow::Result;
use bsw_sweeper::{S3Config, S3Lister, S3Retriever, SweepConfig, SweepSummary, Sweeper, create_s3_client};
use tracing::Level;
use tracing_subscriber::fmt;

use crate::args::{Cli, LogLevel};

/// Initialize logging.
pub fn init_logging(level: LogLevel) -> Result<()> {
    let level: Level = level.into();

    let subscriber = fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr); // Log to stderr so stdout stays clean

    subscriber.init();

    Ok(())
}

/// Execute the sweep with the provided arguments.
pub async fn execute(args: Cli) -> Result<SweepSummary> {
    // Build S3 configuration
    let mut s3_config = S3Config::new(&args.bucket)
        .with_region(&args.region)
        .with_endpoint(&args.endpoint);

    if let Some(prefix) = &args.prefix {
        s3_config = s3_config.with_prefix(prefix);
    }

    if let (Some(access_key), Some(secret_key)) = (&args.access_key, &args.secret_key) {
        s3_config = s3_config.with_credentials(access_key, secret_key, None);
    }

    if let Some(profile) = &args.profile {
        s3_config = s3_config.with_profile(profile);
    }

    // One client handle shared by the lister and every worker
    let client = create_s3_client(&s3_config).await?;

    let lister = S3Lister::new(client.clone(), &args.bucket, args.prefix.clone());
    let retriever = S3Retriever::new(client, &args.bucket);

    let config = SweepConfig::new()
        .with_workers(args.workers)
        .with_chunk_size(args.chunk_size);

    let sweeper = Sweeper::new(lister, retriever, config);

    let summary = if args.sequential {
        sweeper.sweep_sequential().await
    } else {
        sweeper.sweep().await
    };

    Ok(summary)
}
