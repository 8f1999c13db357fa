//! sise-core
//!
//! Core types, traits, and utilities shared across the sise workspace.
//!
//! - `types`: common data structures (candles, intervals, date inputs, page requests).
//! - `connector`: the `SiseConnector` trait and capability provider traits.
//! - `store`: the `SeriesStore` persistence contract.
//! - `timeseries`: pure helpers for date coercion, pagination planning,
//!   timezone anchoring, merging, and gap filling.
//!
//! Time conventions
//! ----------------
//! Series timestamps are exchange-local wall-clock (`NaiveDateTime`, KST for
//! the reference venue). UTC appears only at the connector boundary: the
//! remote API consumes UTC anchors, produced by `timeseries::clock`.
#![warn(missing_docs)]

/// Connector capability traits and the primary `SiseConnector` interface.
pub mod connector;
/// Unified error type for the sise workspace.
pub mod error;
/// Persistence contract for candle series.
pub mod store;
/// Time-series utilities for coercion, pagination, merging, and gap filling.
pub mod timeseries;
pub mod types;

pub use connector::SiseConnector;
pub use error::SiseError;
pub use store::SeriesStore;
pub use timeseries::clock::{exchange_offset, now_local, to_api_anchor};
pub use timeseries::coerce::coerce;
pub use timeseries::grid::{fill_gaps, is_uniform};
pub use timeseries::merge::{merge_keep_last, sort_dedup_keep_last};
pub use timeseries::paginate::{candles_between, plan_pages};
pub use types::*;
