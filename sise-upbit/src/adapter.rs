use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use sise_core::SiseError;

pub(crate) const CONNECTOR_NAME: &str = "sise-upbit";

/// Wire representation of one minute candle, as returned by
/// `GET /v1/candles/minutes/{unit}`. Prices arrive as JSON numbers.
#[derive(Debug, Clone, Deserialize)]
pub struct CandleDto {
    /// Market code, e.g. "KRW-BTC".
    pub market: String,
    /// Candle open time in UTC, ISO-8601 without offset.
    pub candle_date_time_utc: String,
    /// Candle open time in KST, ISO-8601 without offset.
    pub candle_date_time_kst: String,
    /// Opening price.
    pub opening_price: Decimal,
    /// Highest price.
    pub high_price: Decimal,
    /// Lowest price.
    pub low_price: Decimal,
    /// Closing price.
    pub trade_price: Decimal,
    /// Accumulated traded notional over the candle.
    pub candle_acc_trade_price: Decimal,
    /// Accumulated traded volume over the candle.
    pub candle_acc_trade_volume: Decimal,
}

/// Wire representation of a ticker snapshot row from `GET /v1/ticker`.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerDto {
    /// Market code.
    pub market: String,
    /// Last traded price.
    pub trade_price: Decimal,
}

/// Wire representation of one market listing row from `GET /v1/market/all`.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketDto {
    /// Market code.
    pub market: String,
}

/// Transport abstraction over the venue's REST surface (so tests can inject
/// mocks or point at a local server).
#[async_trait]
pub trait UpbitTransport: Send + Sync {
    /// Fetch up to `count` minute candles for `market` ending before `to`.
    ///
    /// The venue's `to` parameter is exclusive and the rows arrive
    /// newest-first; the connector layer normalizes both.
    async fn minute_candles(
        &self,
        unit: i64,
        market: &str,
        count: u16,
        to: DateTime<Utc>,
    ) -> Result<Vec<CandleDto>, SiseError>;

    /// Fetch the current ticker snapshot for `market`.
    async fn ticker_snapshot(&self, market: &str) -> Result<Vec<TickerDto>, SiseError>;

    /// List every market the venue trades.
    async fn markets(&self) -> Result<Vec<MarketDto>, SiseError>;
}

/// Real transport backed by a single `reqwest::Client`.
///
/// The client is `Clone + Send + Sync`, so no external locking is needed.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub(crate) const fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, context: &str) -> Result<T, SiseError> {
        tracing::debug!(%url, context, "upbit request");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| SiseError::connector(CONNECTOR_NAME, format!("{context}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(map_status(status, context));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| SiseError::connector(CONNECTOR_NAME, format!("decode {context}: {e}")))
    }

    fn endpoint(&self, path: &str, context: &str) -> Result<Url, SiseError> {
        self.base_url
            .join(path)
            .map_err(|e| SiseError::connector(CONNECTOR_NAME, format!("{context}: bad url: {e}")))
    }
}

fn map_status(status: StatusCode, context: &str) -> SiseError {
    match status {
        StatusCode::NOT_FOUND => SiseError::not_found(context.to_string()),
        StatusCode::TOO_MANY_REQUESTS => {
            SiseError::connector(CONNECTOR_NAME, format!("rate limit: {context}"))
        }
        s if s.is_server_error() => {
            SiseError::connector(CONNECTOR_NAME, format!("server error {s}: {context}"))
        }
        s => SiseError::connector(CONNECTOR_NAME, format!("status {s}: {context}")),
    }
}

#[async_trait]
impl UpbitTransport for HttpTransport {
    async fn minute_candles(
        &self,
        unit: i64,
        market: &str,
        count: u16,
        to: DateTime<Utc>,
    ) -> Result<Vec<CandleDto>, SiseError> {
        let context = "candles";
        let mut url = self.endpoint(&format!("v1/candles/minutes/{unit}"), context)?;
        url.query_pairs_mut()
            .append_pair("market", market)
            .append_pair("count", &count.to_string())
            .append_pair("to", &to.format("%Y-%m-%dT%H:%M:%SZ").to_string());
        self.get_json(url, context).await
    }

    async fn ticker_snapshot(&self, market: &str) -> Result<Vec<TickerDto>, SiseError> {
        let context = "ticker";
        let mut url = self.endpoint("v1/ticker", context)?;
        url.query_pairs_mut().append_pair("markets", market);
        self.get_json(url, context).await
    }

    async fn markets(&self) -> Result<Vec<MarketDto>, SiseError> {
        let context = "markets";
        let mut url = self.endpoint("v1/market/all", context)?;
        url.query_pairs_mut().append_pair("isDetails", "false");
        self.get_json(url, context).await
    }
}
