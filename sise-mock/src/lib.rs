//! Mock connector and in-memory store for CI-safe tests and examples.
//!
//! `MockConnector` serves a deterministic synthetic series derived from the
//! candle timestamp alone, so any two fetches of the same instant agree.
//! Remote-call and save counters back the engine's idempotence assertions.
#![warn(missing_docs)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, Utc};
use rust_decimal::Decimal;

use sise_core::connector::{CandleProvider, PriceProvider, SiseConnector, TickerProvider};
use sise_core::timeseries::clock;
use sise_core::{Candle, Interval, SeriesStore, SiseError};

/// Deterministic mock connector.
///
/// Scripted symbols steer failure paths:
/// - `"FAIL"` returns a connector error;
/// - `"EMPTY"` returns no candles (the venue's "no data this round" shape);
/// - `"GAPPY"` omits every seventh grid point, for gap-fill tests.
pub struct MockConnector {
    page_size: u16,
    offset: FixedOffset,
    calls: AtomicUsize,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Mock with the reference venue's page size (200).
    #[must_use]
    pub fn new() -> Self {
        Self::with_page_size(200)
    }

    /// Mock with a custom page size, for pagination tests.
    #[must_use]
    pub fn with_page_size(page_size: u16) -> Self {
        Self {
            page_size,
            offset: clock::exchange_offset(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of remote calls served so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The deterministic candle this mock serves at `ts`.
    #[must_use]
    pub fn candle_at(ts: NaiveDateTime) -> Candle {
        let minute = ts.and_utc().timestamp() / 60;
        let base = Decimal::from(50_000 + minute.rem_euclid(1_000));
        let volume = Decimal::new(minute.rem_euclid(500) + 10, 1);
        Candle {
            ts,
            open: base,
            high: base + Decimal::from(2),
            low: base - Decimal::from(2),
            close: base + Decimal::ONE,
            volume,
            value: Some((base + Decimal::ONE) * volume),
        }
    }

    fn is_gap(ts: NaiveDateTime, interval: Interval) -> bool {
        (ts.and_utc().timestamp() / 60 / interval.minutes()).rem_euclid(7) == 3
    }
}

impl SiseConnector for MockConnector {
    fn name(&self) -> &'static str {
        "sise-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_candle_provider(&self) -> Option<&dyn CandleProvider> {
        Some(self as &dyn CandleProvider)
    }

    fn as_price_provider(&self) -> Option<&dyn PriceProvider> {
        Some(self as &dyn PriceProvider)
    }

    fn as_ticker_provider(&self) -> Option<&dyn TickerProvider> {
        Some(self as &dyn TickerProvider)
    }
}

#[async_trait]
impl CandleProvider for MockConnector {
    async fn candles(
        &self,
        ticker: &str,
        interval: Interval,
        count: u16,
        to: DateTime<Utc>,
    ) -> Result<Vec<Candle>, SiseError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match ticker {
            "FAIL" => {
                return Err(SiseError::connector("sise-mock", "forced failure: candles"));
            }
            "EMPTY" => return Ok(Vec::new()),
            _ => {}
        }

        let count = count.min(self.page_size);
        let newest = clock::from_api_anchor(to, self.offset);
        let step = interval.duration();
        let mut out = Vec::with_capacity(usize::from(count));
        for i in (0..i64::from(count)).rev() {
            let ts = newest - Duration::minutes(step.num_minutes() * i);
            if ticker == "GAPPY" && Self::is_gap(ts, interval) {
                continue;
            }
            out.push(Self::candle_at(ts));
        }
        Ok(out)
    }

    fn max_page_size(&self) -> u16 {
        self.page_size
    }

    fn supported_intervals(&self) -> &'static [Interval] {
        Interval::ALL
    }
}

#[async_trait]
impl PriceProvider for MockConnector {
    async fn current_price(&self, ticker: &str) -> Result<Decimal, SiseError> {
        match ticker {
            "FAIL" => Err(SiseError::connector("sise-mock", "forced failure: price")),
            _ => Ok(Self::candle_at(clock::now_local(self.offset)).close),
        }
    }
}

#[async_trait]
impl TickerProvider for MockConnector {
    async fn tickers(&self, quote: &str) -> Result<Vec<String>, SiseError> {
        Ok(vec![
            format!("{quote}-BTC"),
            format!("{quote}-ETH"),
            format!("{quote}-XRP"),
        ])
    }
}

/// In-memory store keyed by (ticker, interval), for facade tests.
#[derive(Default)]
pub struct MemoryStore {
    series: RwLock<HashMap<String, Vec<Candle>>>,
    saves: AtomicUsize,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of saves performed so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Snapshot of the stored series, if any.
    pub fn snapshot(&self, ticker: &str, interval: Interval) -> Option<Vec<Candle>> {
        self.series
            .read()
            .expect("store lock poisoned")
            .get(&key(ticker, interval))
            .cloned()
    }
}

fn key(ticker: &str, interval: Interval) -> String {
    format!("{ticker}_{interval}")
}

impl SeriesStore for MemoryStore {
    fn load(&self, ticker: &str, interval: Interval) -> Result<Vec<Candle>, SiseError> {
        Ok(self
            .series
            .read()
            .expect("store lock poisoned")
            .get(&key(ticker, interval))
            .cloned()
            .unwrap_or_default())
    }

    fn save(
        &self,
        ticker: &str,
        interval: Interval,
        candles: &[Candle],
    ) -> Result<(), SiseError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.series
            .write()
            .expect("store lock poisoned")
            .insert(key(ticker, interval), candles.to_vec());
        Ok(())
    }
}
