use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::types::{Candle, Interval};
use crate::SiseError;

/// Focused role trait for connectors that serve paginated OHLCV candles.
#[async_trait]
pub trait CandleProvider: Send + Sync {
    /// Fetch up to `count` candles ending at or before `to`, sorted ascending
    /// by timestamp.
    ///
    /// `to` is a UTC instant; returned candle timestamps are exchange-local
    /// wall clock, as delivered by the venue. An empty result means the venue
    /// had no data for the window and is not an error.
    async fn candles(
        &self,
        ticker: &str,
        interval: Interval,
        count: u16,
        to: DateTime<Utc>,
    ) -> Result<Vec<Candle>, SiseError>;

    /// REQUIRED: the largest candle count a single call may return.
    fn max_page_size(&self) -> u16;

    /// REQUIRED: exact intervals this connector can natively serve.
    fn supported_intervals(&self) -> &'static [Interval];
}

/// Focused role trait for connectors that serve a point-in-time price.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Fetch the current traded price for the given ticker.
    async fn current_price(&self, ticker: &str) -> Result<Decimal, SiseError>;
}

/// Focused role trait for connectors that can list tradable tickers.
#[async_trait]
pub trait TickerProvider: Send + Sync {
    /// List tickers quoted in `quote` (e.g. "KRW").
    async fn tickers(&self, quote: &str) -> Result<Vec<String>, SiseError>;
}

/// Main connector trait implemented by provider crates. Exposes capability
/// discovery through `as_*_provider` accessors.
pub trait SiseConnector: Send + Sync {
    /// A stable identifier for logs and error tagging (e.g. "sise-upbit").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise candle capability by returning a usable trait object
    /// reference when supported.
    fn as_candle_provider(&self) -> Option<&dyn CandleProvider> {
        None
    }

    /// If implemented, returns a trait object for current-price lookups.
    fn as_price_provider(&self) -> Option<&dyn PriceProvider> {
        None
    }

    /// If implemented, returns a trait object for ticker listing.
    fn as_ticker_provider(&self) -> Option<&dyn TickerProvider> {
        None
    }
}
