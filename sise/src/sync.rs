use chrono::NaiveDateTime;

use sise_core::{
    candles_between, coerce, fill_gaps, merge_keep_last, sort_dedup_keep_last, Candle, DateInput,
    Interval, SiseError,
};

use crate::core::Sise;

impl Sise {
    /// Bring the persisted series for (`ticker`, `interval`) up to coverage
    /// of `[start, end]` and return it.
    ///
    /// Only genuinely missing segments are fetched: the leading segment when
    /// `start` precedes the stored minimum, the trailing segment when `end`
    /// follows the stored maximum, or the whole window when nothing is
    /// stored. A fully covered window returns the stored series unchanged
    /// without touching the network or the file.
    ///
    /// The returned (and persisted) series is sorted, deduplicated keep-last
    /// in {leading, stored, trailing} submission order (a trailing fetch
    /// supersedes stored rows at the same instant), and gap-filled onto the
    /// exact interval grid.
    ///
    /// # Errors
    /// - `InvalidDate` when `start` or `end` cannot be coerced.
    /// - `InvalidArg` when the coerced range is empty or inverted.
    /// - `Unsupported` when the connector lacks the candle capability or the
    ///   interval.
    /// - `Storage` when the persisted file is malformed or unwritable.
    pub async fn sync(
        &self,
        ticker: &str,
        interval: Interval,
        start: DateInput,
        end: DateInput,
    ) -> Result<Vec<Candle>, SiseError> {
        let start = coerce(start, self.cfg.utc_offset)?;
        let end = coerce(end, self.cfg.utc_offset)?;
        if start >= end {
            return Err(SiseError::InvalidArg(format!(
                "empty sync range: {start} >= {end}"
            )));
        }

        let existing = sort_dedup_keep_last(self.store.load(ticker, interval)?);

        let merged = if existing.is_empty() {
            tracing::info!(ticker, interval = %interval, %start, %end, "no stored series; fetching full window");
            self.fetch_window(ticker, interval, start, end).await?
        } else {
            // Both bounds exist: the series is non-empty and sorted.
            let stored_min = existing.first().map(|c| c.ts).unwrap_or(start);
            let stored_max = existing.last().map(|c| c.ts).unwrap_or(end);
            let needs_leading = start < stored_min;
            let needs_trailing = end > stored_max;

            if !needs_leading && !needs_trailing {
                tracing::info!(ticker, interval = %interval, "window already covered; no remote calls");
                return Ok(existing);
            }

            let leading = if needs_leading {
                tracing::info!(ticker, interval = %interval, %start, until = %stored_min, "fetching leading segment");
                self.fetch_window(ticker, interval, start, stored_min).await?
            } else {
                Vec::new()
            };
            let trailing = if needs_trailing {
                tracing::info!(ticker, interval = %interval, from = %stored_max, %end, "fetching trailing segment");
                self.fetch_window(ticker, interval, stored_max, end).await?
            } else {
                Vec::new()
            };

            merge_keep_last([leading, existing, trailing])
        };

        let filled = fill_gaps(&merged, interval);
        if filled.is_empty() {
            // Nothing came back; leave any prior file untouched.
            tracing::warn!(ticker, interval = %interval, "fetch yielded no data; nothing persisted");
            return Ok(filled);
        }

        self.store.save(ticker, interval, &filled)?;
        Ok(filled)
    }

    /// Fetch the candles covering `[start, end]`, both grid endpoints
    /// inclusive, anchored at `end`.
    async fn fetch_window(
        &self,
        ticker: &str,
        interval: Interval,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Candle>, SiseError> {
        let count = candles_between(start, end, interval).saturating_add(1);
        self.fetch_series(ticker, interval, count, end).await
    }
}
