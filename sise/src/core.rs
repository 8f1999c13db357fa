use std::sync::Arc;
use std::time::Duration;

use chrono::FixedOffset;
use rust_decimal::Decimal;

use sise_core::timeseries::clock;
use sise_core::{SeriesStore, SiseConnector, SiseError};

/// Configuration for the sync engine.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Delay slept between successive remote page fetches.
    pub fetch_delay: Duration,
    /// Fixed UTC offset of the exchange's wall clock, applied when building
    /// remote anchors.
    pub utc_offset: FixedOffset,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            fetch_delay: Duration::from_millis(120),
            utc_offset: clock::exchange_offset(),
        }
    }
}

/// Engine that reconciles persisted candle series against a remote connector.
pub struct Sise {
    pub(crate) connector: Arc<dyn SiseConnector>,
    pub(crate) store: Arc<dyn SeriesStore>,
    pub(crate) cfg: SyncConfig,
}

impl std::fmt::Debug for Sise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sise").field("cfg", &self.cfg).finish_non_exhaustive()
    }
}

/// Builder for constructing a [`Sise`] engine.
pub struct SiseBuilder {
    connector: Option<Arc<dyn SiseConnector>>,
    store: Option<Arc<dyn SeriesStore>>,
    cfg: SyncConfig,
}

impl Default for SiseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SiseBuilder {
    /// Create a new builder with default configuration (120 ms fetch delay,
    /// the exchange's fixed UTC offset).
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            store: None,
            cfg: SyncConfig::default(),
        }
    }

    /// Register the connector that serves remote candles.
    #[must_use]
    pub fn with_connector(mut self, connector: Arc<dyn SiseConnector>) -> Self {
        self.connector = Some(connector);
        self
    }

    /// Register the persistence adapter.
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn SeriesStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Override the delay slept between successive page fetches.
    ///
    /// The venue rate-limits aggressively; anything much below ~100 ms
    /// risks throttled or empty pages.
    #[must_use]
    pub const fn fetch_delay(mut self, delay: Duration) -> Self {
        self.cfg.fetch_delay = delay;
        self
    }

    /// Override the exchange's UTC offset.
    #[must_use]
    pub const fn utc_offset(mut self, offset: FixedOffset) -> Self {
        self.cfg.utc_offset = offset;
        self
    }

    /// Build the engine.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector or no store has been registered.
    pub fn build(self) -> Result<Sise, SiseError> {
        let connector = self.connector.ok_or_else(|| {
            SiseError::InvalidArg(
                "no connector registered; add one via with_connector(...)".to_string(),
            )
        })?;
        let store = self.store.ok_or_else(|| {
            SiseError::InvalidArg("no store registered; add one via with_store(...)".to_string())
        })?;
        Ok(Sise {
            connector,
            store,
            cfg: self.cfg,
        })
    }
}

impl Sise {
    /// Start building a new engine.
    #[must_use]
    pub fn builder() -> SiseBuilder {
        SiseBuilder::new()
    }

    /// Fetch the current traded price for `ticker` from the connector.
    ///
    /// # Errors
    /// Returns `Unsupported` if the connector has no price capability, or
    /// the connector's own failure otherwise.
    pub async fn current_price(&self, ticker: &str) -> Result<Decimal, SiseError> {
        let provider = self
            .connector
            .as_price_provider()
            .ok_or_else(|| SiseError::unsupported("current_price"))?;
        provider.current_price(ticker).await
    }

    /// List tickers quoted in `quote` (e.g. "KRW") from the connector.
    ///
    /// # Errors
    /// Returns `Unsupported` if the connector has no ticker-listing
    /// capability, or the connector's own failure otherwise.
    pub async fn tickers(&self, quote: &str) -> Result<Vec<String>, SiseError> {
        let provider = self
            .connector
            .as_ticker_provider()
            .ok_or_else(|| SiseError::unsupported("tickers"))?;
        provider.tickers(quote).await
    }
}
