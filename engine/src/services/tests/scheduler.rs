//! Tests for PerformanceScheduler

use std::sync::Arc;
use std::time::Duration;

use super::common::*;
use crate::core::earnings::FixedEarnings;
use crate::services::scheduler::PerformanceScheduler;
use crate::traits::{MockPerformerStore, PerformerStore};

#[tokio::test]
async fn test_scheduler_runs_batches_until_stopped() {
    let (lifecycle, store) = fixed_lifecycle(100);
    lifecycle.seed(2).await.unwrap();

    let handle = PerformanceScheduler::new(lifecycle, Duration::from_millis(20)).spawn();
    tokio::time::sleep(Duration::from_millis(150)).await;
    let batches = handle.stop().await;

    assert!(batches >= 1);
    for performer in store.list().await.unwrap() {
        assert_eq!(performer.history().len() as u64, batches);
    }
}

#[tokio::test]
async fn test_first_batch_waits_one_period() {
    let (lifecycle, store) = fixed_lifecycle(100);
    lifecycle.seed(1).await.unwrap();

    let handle = PerformanceScheduler::new(lifecycle, Duration::from_secs(60)).spawn();
    tokio::time::sleep(Duration::from_millis(30)).await;
    let batches = handle.stop().await;

    assert_eq!(batches, 0);
    let performer = &store.list().await.unwrap()[0];
    assert!(performer.history().is_empty());
}

#[tokio::test]
async fn test_stop_after_task_panic_reports_no_batches() {
    let mut store = MockPerformerStore::new();
    store.expect_list().returning(|| panic!("listing blew up"));
    let lifecycle = lifecycle_over(Arc::new(store), Arc::new(FixedEarnings(0)));

    let handle = PerformanceScheduler::new(lifecycle, Duration::from_millis(10)).spawn();
    tokio::time::sleep(Duration::from_millis(60)).await;

    assert_eq!(handle.stop().await, 0);
}
