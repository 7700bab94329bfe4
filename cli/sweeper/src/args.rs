//! CLI argument definitions for bucketsweep.

use clap::{Parser, ValueEnum};

/// Bulk read sweep of an S3-compatible bucket.
///
/// Lists every object in the bucket and reads every byte of every object,
/// splitting large objects into bounded-size ranged GETs spread across a
/// fixed pool of concurrent workers. Retrieved bytes are discarded; the
/// point is to exercise and measure the object store, not to keep the
/// data.
///
/// ## Examples
///
/// Sweep a bucket on a local MinIO endpoint:
///   bucketsweep http://127.0.0.1:9000 my-bucket
///
/// Smaller chunks, fewer workers:
///   bucketsweep http://127.0.0.1:9000 my-bucket --workers 8 --chunk-size 8388608
///
/// One object at a time, no pool:
///   bucketsweep http://127.0.0.1:9000 my-bucket --sequential
#[derive(Parser, Debug)]
#[command(name = "bucketsweep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Object store endpoint URL (e.g. http://127.0.0.1:9000)
    pub endpoint: String,

    /// Bucket to sweep
    pub bucket: String,

    /// Key prefix to restrict the sweep
    #[arg(short, long, env = "BSW_PREFIX")]
    pub prefix: Option<String>,

    /// AWS region
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// AWS access key ID
    #[arg(long, env = "AWS_ACCESS_KEY_ID")]
    pub access_key: Option<String>,

    /// AWS secret access key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY")]
    pub secret_key: Option<String>,

    /// AWS profile name
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// Number of concurrent read workers (must be >= 1)
    #[arg(long, default_value = "32", value_parser = parse_positive_usize)]
    pub workers: usize,

    /// Maximum bytes per ranged GET (must be >= 1)
    #[arg(long, default_value = "4294967296", value_parser = parse_positive_u64)]
    pub chunk_size: u64,

    /// Read objects one at a time instead of through the worker pool
    #[arg(long)]
    pub sequential: bool,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Log level argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level (default)
    Info,
    /// Warning level
    Warn,
    /// Error level (least verbose)
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Parse a positive usize (>= 1).
fn parse_positive_usize(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if value < 1 {
        return Err(format!("{} is not in 1..", value));
    }
    Ok(value)
}

/// Parse a positive u64 (>= 1).
fn parse_positive_u64(s: &str) -> Result<u64, String> {
    let value: u64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if value < 1 {
        return Err(format!("{} is not in 1..", value));
    }
    Ok(value)
}
