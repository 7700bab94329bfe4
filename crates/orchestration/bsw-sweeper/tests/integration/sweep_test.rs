//! End-to-end sweep tests against LocalStack.

use std::time::Duration;

use bsw_sweeper::{S3Lister, S3Retriever, SweepConfig, Sweeper};

use crate::common::LocalStackTestContext;

const MIB: u64 = 1024 * 1024;

fn test_config(workers: usize, chunk_size: u64) -> SweepConfig {
    SweepConfig::new()
        .with_workers(workers)
        .with_chunk_size(chunk_size)
        .with_poll_interval(Duration::from_millis(5))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_sweep_reads_every_byte() {
    let ctx = LocalStackTestContext::new().await;
    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping");
        return;
    }

    let bucket = "bsw-it-sweep";
    ctx.create_bucket(bucket).await.unwrap();
    ctx.put_object(bucket, "small.bin", vec![1u8; 1024])
        .await
        .unwrap();
    ctx.put_object(bucket, "empty.bin", Vec::new()).await.unwrap();
    ctx.put_object(bucket, "nested/large.bin", vec![2u8; 5 * MIB as usize])
        .await
        .unwrap();

    let lister = S3Lister::new(ctx.s3.clone(), bucket, None);
    let retriever = S3Retriever::new(ctx.s3.clone(), bucket);
    let sweeper = Sweeper::new(lister, retriever, test_config(4, MIB));

    let summary = sweeper.sweep().await;

    // 1 KiB -> one task, empty -> none, 5 MiB at 1 MiB chunks -> five.
    assert_eq!(summary.objects_listed, 3);
    assert_eq!(summary.tasks_enqueued, 6);
    assert_eq!(summary.tasks_succeeded, 6);
    assert_eq!(summary.tasks_failed, 0);
    assert_eq!(summary.bytes_read, 1024 + 5 * MIB);
    assert!(!summary.has_errors());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_sweep_with_prefix() {
    let ctx = LocalStackTestContext::new().await;
    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping");
        return;
    }

    let bucket = "bsw-it-prefix";
    ctx.create_bucket(bucket).await.unwrap();
    ctx.put_object(bucket, "keep/a.bin", vec![0u8; 100])
        .await
        .unwrap();
    ctx.put_object(bucket, "keep/b.bin", vec![0u8; 200])
        .await
        .unwrap();
    ctx.put_object(bucket, "drop/c.bin", vec![0u8; 300])
        .await
        .unwrap();

    let lister = S3Lister::new(ctx.s3.clone(), bucket, Some("keep/".to_string()));
    let retriever = S3Retriever::new(ctx.s3.clone(), bucket);
    let sweeper = Sweeper::new(lister, retriever, test_config(2, MIB));

    let summary = sweeper.sweep().await;

    assert_eq!(summary.objects_listed, 2);
    assert_eq!(summary.bytes_read, 300);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_sequential_sweep_matches_bucket() {
    let ctx = LocalStackTestContext::new().await;
    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping");
        return;
    }

    let bucket = "bsw-it-sequential";
    ctx.create_bucket(bucket).await.unwrap();
    ctx.put_object(bucket, "a.bin", vec![0u8; 512]).await.unwrap();
    ctx.put_object(bucket, "b.bin", Vec::new()).await.unwrap();

    let lister = S3Lister::new(ctx.s3.clone(), bucket, None);
    let retriever = S3Retriever::new(ctx.s3.clone(), bucket);
    let sweeper = Sweeper::new(lister, retriever, test_config(2, MIB));

    let summary = sweeper.sweep_sequential().await;

    // Sequential mode issues one whole-object GET per key, empty ones too.
    assert_eq!(summary.objects_listed, 2);
    assert_eq!(summary.tasks_enqueued, 2);
    assert_eq!(summary.tasks_succeeded, 2);
    assert_eq!(summary.bytes_read, 512);
}
