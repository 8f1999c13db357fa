use std::sync::Arc;

use sise::{Sise, SyncJob};
use sise_core::{DateInput, Interval};
use sise_store::CsvStore;
use sise_upbit::UpbitConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sise = Sise::builder()
        .with_connector(Arc::new(UpbitConnector::new_default()))
        .with_store(Arc::new(CsvStore::new("cdata")))
        .build()?;

    // Every KRW market, one sequential pass.
    let jobs: Vec<SyncJob> = sise
        .tickers("KRW")
        .await?
        .into_iter()
        .map(|t| SyncJob::new(t, "2025-03-01 09:00:00", DateInput::Now))
        .collect();

    let report = sise
        .sync_many(Interval::M5, jobs, |p| {
            println!("[{} / {}] {}", p.index, p.total, p.ticker);
        })
        .await;

    println!(
        "done: {} synced, {} failed",
        report.synced.len(),
        report.failed.len()
    );
    for (ticker, err) in &report.failed {
        eprintln!("- {ticker}: {err}");
    }

    Ok(())
}
