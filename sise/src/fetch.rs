use chrono::NaiveDateTime;

use sise_core::timeseries::clock;
use sise_core::{plan_pages, sort_dedup_keep_last, Candle, Interval, SiseError};

use crate::core::Sise;

impl Sise {
    /// Fetch `count` candles ending at the exchange-local anchor `to`,
    /// walking the connector's capped pagination.
    ///
    /// One remote call per planned page, with the configured delay slept
    /// between calls. A page that errors or comes back empty contributes
    /// nothing and is not retried; the caller sees a shorter series.
    pub(crate) async fn fetch_series(
        &self,
        ticker: &str,
        interval: Interval,
        count: u32,
        to: NaiveDateTime,
    ) -> Result<Vec<Candle>, SiseError> {
        let provider = self
            .connector
            .as_candle_provider()
            .ok_or_else(|| SiseError::unsupported("candles"))?;
        if !provider.supported_intervals().contains(&interval) {
            return Err(SiseError::unsupported("candles/interval"));
        }

        let pages = plan_pages(count, to, interval, provider.max_page_size());
        if pages.is_empty() {
            return Ok(Vec::new());
        }
        tracing::info!(
            ticker,
            interval = %interval,
            count,
            pages = pages.len(),
            "fetching remote candles"
        );

        let mut out: Vec<Candle> = Vec::with_capacity(count as usize);
        let total = pages.len();
        for (i, page) in pages.into_iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.cfg.fetch_delay).await;
            }
            let anchor = clock::to_api_anchor(page.to, self.cfg.utc_offset);
            match provider.candles(ticker, interval, page.count, anchor).await {
                Ok(batch) if batch.is_empty() => {
                    tracing::warn!(ticker, page = i + 1, total, "page yielded no data");
                }
                Ok(batch) => {
                    tracing::debug!(ticker, page = i + 1, total, rows = batch.len(), "page fetched");
                    out.extend(batch);
                }
                Err(e) => {
                    tracing::warn!(ticker, page = i + 1, total, error = %e, "page fetch failed");
                }
            }
        }

        Ok(sort_dedup_keep_last(out))
    }
}
