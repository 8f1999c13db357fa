//! Time-series utilities shared by connectors and the facade.
//!
//! Modules include:
//! - `clock`: exchange-local ↔ UTC anchor conversion
//! - `coerce`: total coercion of heterogeneous date inputs
//! - `paginate`: backward-walking page planning for capped remote calls
//! - `merge`: keep-last merging of candle series
//! - `grid`: uniform-grid re-indexing with forward fill
/// Exchange-local wall clock and UTC anchor helpers.
pub mod clock;
/// Coercion of `DateInput` values into timestamps.
pub mod coerce;
/// Uniform-grid re-indexing and gap filling.
pub mod grid;
/// Merge utilities for joining candle series.
pub mod merge;
/// Pagination planning for the capped remote candle endpoint.
pub mod paginate;
