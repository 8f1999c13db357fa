use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{NaiveDate, NaiveDateTime};
use sise::{Sise, SyncJob};
use sise_core::{Interval, SiseError};
use sise_mock::{MemoryStore, MockConnector};

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

fn engine(connector: &Arc<MockConnector>, store: &Arc<MemoryStore>) -> Sise {
    Sise::builder()
        .with_connector(connector.clone())
        .with_store(store.clone())
        .fetch_delay(StdDuration::from_millis(1))
        .build()
        .unwrap()
}

#[tokio::test]
async fn one_bad_job_does_not_stop_the_batch() {
    let connector = Arc::new(MockConnector::new());
    let store = Arc::new(MemoryStore::new());
    let sise = engine(&connector, &store);

    let start = ts(2024, 1, 1, 9, 0);
    let end = ts(2024, 1, 1, 12, 0);
    let jobs = vec![
        SyncJob::new("KRW-BTC", start, end),
        SyncJob::new("KRW-ETH", "certainly not a date", end),
        SyncJob::new("KRW-XRP", start, end),
    ];

    let mut seen = Vec::new();
    let report = sise
        .sync_many(Interval::M5, jobs, |p| {
            seen.push((p.index, p.total, p.ticker.to_string()));
        })
        .await;

    assert!(!report.is_complete());
    assert_eq!(report.synced, vec!["KRW-BTC".to_string(), "KRW-XRP".to_string()]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "KRW-ETH");
    assert!(matches!(report.failed[0].1, SiseError::InvalidDate { .. }));

    // The neighbours of the failed job produced persisted output.
    assert!(store.snapshot("KRW-BTC", Interval::M5).is_some());
    assert!(store.snapshot("KRW-XRP", Interval::M5).is_some());
    assert!(store.snapshot("KRW-ETH", Interval::M5).is_none());

    // Progress fired once per job, in order.
    assert_eq!(
        seen,
        vec![
            (1, 3, "KRW-BTC".to_string()),
            (2, 3, "KRW-ETH".to_string()),
            (3, 3, "KRW-XRP".to_string()),
        ]
    );
}

#[tokio::test]
async fn empty_batch_reports_complete() {
    let connector = Arc::new(MockConnector::new());
    let store = Arc::new(MemoryStore::new());
    let sise = engine(&connector, &store);

    let report = sise.sync_many(Interval::M5, Vec::new(), |_| {}).await;
    assert!(report.is_complete());
    assert!(report.synced.is_empty());
    assert_eq!(connector.call_count(), 0);
}
