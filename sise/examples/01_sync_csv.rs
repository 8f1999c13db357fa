use std::sync::Arc;

use sise::Sise;
use sise_core::{DateInput, Interval};
use sise_store::CsvStore;
use sise_upbit::UpbitConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let sise = Sise::builder()
        .with_connector(Arc::new(UpbitConnector::new_default()))
        .with_store(Arc::new(CsvStore::new("cdata")))
        .build()?;

    // Extend (or create) the local KRW-BTC archive up to now.
    let series = sise
        .sync(
            "KRW-BTC",
            Interval::M5,
            "2025-03-01 09:00:00".into(),
            DateInput::Now,
        )
        .await?;

    if let (Some(first), Some(last)) = (series.first(), series.last()) {
        println!(
            "KRW-BTC m5: {} candles, {} .. {}",
            series.len(),
            first.ts,
            last.ts
        );
    }

    Ok(())
}
