//! Upbit public REST connector for the sise ecosystem.
//!
//! Maps the venue's minute-candle, ticker-snapshot, and market-listing
//! endpoints onto the `sise_core` connector roles. Two wire quirks are
//! normalized here so the rest of the workspace never sees them:
//!
//! - the venue's `to` parameter is exclusive; the connector shifts the
//!   anchor one interval forward so the trait contract ("ending at or
//!   before `to`") holds;
//! - rows arrive newest-first; the connector returns them ascending.
#![warn(missing_docs)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;

use sise_core::connector::{CandleProvider, PriceProvider, SiseConnector, TickerProvider};
use sise_core::{Candle, Interval, SiseError};

/// Transport trait and wire DTOs.
pub mod adapter;
mod builder;

pub use adapter::{CandleDto, HttpTransport, MarketDto, TickerDto, UpbitTransport};
pub use builder::{UpbitBuilder, DEFAULT_BASE_URL};

use adapter::CONNECTOR_NAME;

/// Largest candle count the venue returns per call.
const MAX_PAGE_SIZE: u16 = 200;

/// Connector for the Upbit public REST API.
pub struct UpbitConnector {
    transport: Arc<dyn UpbitTransport>,
}

impl UpbitConnector {
    /// Start building a connector against the production endpoint.
    #[must_use]
    pub fn builder() -> UpbitBuilder {
        UpbitBuilder::new()
    }

    /// Build a connector with default settings.
    #[must_use]
    pub fn new_default() -> Self {
        Self::builder().build()
    }

    /// Wrap an existing transport. Primarily for tests that inject a mock.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn UpbitTransport>) -> Self {
        Self { transport }
    }
}

impl SiseConnector for UpbitConnector {
    fn name(&self) -> &'static str {
        CONNECTOR_NAME
    }

    fn vendor(&self) -> &'static str {
        "Upbit"
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

fn candle_from_dto(dto: CandleDto) -> Result<Candle, SiseError> {
    let ts = NaiveDateTime::parse_from_str(&dto.candle_date_time_kst, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| {
            SiseError::Data(format!(
                "bad candle timestamp for {}: {}",
                dto.market, dto.candle_date_time_kst
            ))
        })?;
    Ok(Candle {
        ts,
        open: dto.opening_price,
        high: dto.high_price,
        low: dto.low_price,
        close: dto.trade_price,
        volume: dto.candle_acc_trade_volume,
        value: Some(dto.candle_acc_trade_price),
    })
}

#[async_trait]
impl CandleProvider for UpbitConnector {
    async fn candles(
        &self,
        ticker: &str,
        interval: Interval,
        count: u16,
        to: DateTime<Utc>,
    ) -> Result<Vec<Candle>, SiseError> {
        let count = count.min(MAX_PAGE_SIZE);
        // Exclusive wire anchor: one interval forward keeps `to` itself in range.
        let wire_to = to + interval.duration();
        let rows = self
            .transport
            .minute_candles(interval.minutes(), ticker, count, wire_to)
            .await?;

        let mut candles = rows
            .into_iter()
            .map(candle_from_dto)
            .collect::<Result<Vec<_>, _>>()?;
        candles.sort_by_key(|c| c.ts);
        Ok(candles)
    }

    fn max_page_size(&self) -> u16 {
        MAX_PAGE_SIZE
    }

    fn supported_intervals(&self) -> &'static [Interval] {
        Interval::ALL
    }
}

#[async_trait]
impl PriceProvider for UpbitConnector {
    async fn current_price(&self, ticker: &str) -> Result<Decimal, SiseError> {
        let rows = self.transport.ticker_snapshot(ticker).await?;
        rows.into_iter()
            .find(|r| r.market == ticker)
            .map(|r| r.trade_price)
            .ok_or_else(|| SiseError::not_found(format!("price for {ticker}")))
    }
}

#[async_trait]
impl TickerProvider for UpbitConnector {
    async fn tickers(&self, quote: &str) -> Result<Vec<String>, SiseError> {
        let prefix = format!("{quote}-");
        let rows = self.transport.markets().await?;
        Ok(rows
            .into_iter()
            .filter(|m| m.market.starts_with(&prefix))
            .map(|m| m.market)
            .collect())
    }
}
