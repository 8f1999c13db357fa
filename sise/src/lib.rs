//! sise keeps a local candle archive in step with a rate-limited remote
//! market-data API.
//!
//! Overview
//! - `sync` compares a requested window against the persisted series and
//!   fetches only the missing leading and/or trailing segments; a fully
//!   covered window performs zero remote calls.
//! - Fetches walk backward through the venue's capped pagination (remainder
//!   page first), sleeping a fixed delay between pages to respect the rate
//!   limit.
//! - Merged output is deduplicated keep-last, re-indexed onto the exact
//!   interval grid with forward fill, and written back as a full overwrite.
//! - `sync_many` drives a sequential batch of tickers; one ticker's failure
//!   is recorded and the batch continues. Progress surfaces through an
//!   explicit callback, not shared counters.
//!
//! Key behaviors and trade-offs
//! - Incremental minimality: remote traffic is O(new coverage), never
//!   O(total history), on repeat runs.
//! - Best-effort pages: an empty or failed page is logged and treated as
//!   "no data this round"; the engine never retries a page inline.
//! - Timestamps: series are keyed in exchange-local wall-clock time; UTC
//!   exists only at the connector anchor boundary.
//!
//! Building an engine and syncing one ticker:
//! ```rust,ignore
//! use sise::{Sise, SyncJob};
//! use sise_core::{DateInput, Interval};
//!
//! let engine = Sise::builder()
//!     .with_connector(Arc::new(UpbitConnector::new_default()))
//!     .with_store(Arc::new(CsvStore::new("cdata")))
//!     .build()?;
//!
//! let series = engine
//!     .sync("KRW-BTC", Interval::M5, "2024-01-01 09:00:00".into(), DateInput::Now)
//!     .await?;
//! ```
#![warn(missing_docs)]

mod batch;
pub(crate) mod core;
mod fetch;
mod sync;

pub use crate::batch::{BatchProgress, BatchReport, SyncJob};
pub use crate::core::{Sise, SiseBuilder, SyncConfig};

// Re-export core types for convenience
pub use sise_core::{Candle, DateInput, Interval, SiseConnector, SeriesStore, SiseError};
