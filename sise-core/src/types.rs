//! Foundational data structures shared by connectors, stores, and the facade.

use core::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::SiseError;

/// One fixed-duration OHLCV record.
///
/// `ts` is the candle's opening timestamp in exchange-local wall-clock time
/// and is the unique key within a series. Prices are decimals to avoid
/// binary-float drift when series are persisted and re-read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    /// Opening timestamp, exchange-local wall clock. Unique within a series.
    pub ts: NaiveDateTime,
    /// Opening price.
    pub open: Decimal,
    /// Highest traded price.
    pub high: Decimal,
    /// Lowest traded price.
    pub low: Decimal,
    /// Last traded price.
    pub close: Decimal,
    /// Accumulated traded volume in the base asset.
    pub volume: Decimal,
    /// Accumulated traded notional in the quote currency, when the venue
    /// reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
}

/// Fixed candle duration, restricted to the minute units the remote API
/// serves natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Interval {
    /// One minute.
    M1,
    /// Three minutes.
    M3,
    /// Five minutes.
    M5,
    /// Ten minutes.
    M10,
    /// Fifteen minutes.
    M15,
    /// Thirty minutes.
    M30,
    /// One hour.
    M60,
    /// Four hours.
    M240,
}

impl Interval {
    /// Every interval the reference API serves, ascending.
    pub const ALL: &'static [Self] = &[
        Self::M1,
        Self::M3,
        Self::M5,
        Self::M10,
        Self::M15,
        Self::M30,
        Self::M60,
        Self::M240,
    ];

    /// Candle duration in whole minutes.
    #[must_use]
    pub const fn minutes(self) -> i64 {
        match self {
            Self::M1 => 1,
            Self::M3 => 3,
            Self::M5 => 5,
            Self::M10 => 10,
            Self::M15 => 15,
            Self::M30 => 30,
            Self::M60 => 60,
            Self::M240 => 240,
        }
    }

    /// Candle duration as a `chrono::Duration`.
    #[must_use]
    pub fn duration(self) -> Duration {
        Duration::minutes(self.minutes())
    }

    /// Look an interval up by its minute count.
    #[must_use]
    pub const fn try_from_minutes(minutes: i64) -> Option<Self> {
        match minutes {
            1 => Some(Self::M1),
            3 => Some(Self::M3),
            5 => Some(Self::M5),
            10 => Some(Self::M10),
            15 => Some(Self::M15),
            30 => Some(Self::M30),
            60 => Some(Self::M60),
            240 => Some(Self::M240),
            _ => None,
        }
    }
}

impl fmt::Display for Interval {
    /// Formats as the `m{minutes}` suffix used in persisted file names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.minutes())
    }
}

impl FromStr for Interval {
    type Err = SiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('m')
            .and_then(|m| m.parse::<i64>().ok())
            .and_then(Self::try_from_minutes)
            .ok_or_else(|| SiseError::InvalidArg(format!("unknown interval: {s}")))
    }
}

/// A caller-supplied point in time, before coercion.
///
/// Every accepted shape is an explicit variant, so downstream handling is
/// exhaustive and there is no "unsupported type" branch at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateInput {
    /// The current wall-clock time, truncated to whole seconds.
    #[default]
    Now,
    /// A textual timestamp, parsed permissively by the coercer.
    Text(String),
    /// An already-typed timestamp, passed through unchanged.
    Timestamp(NaiveDateTime),
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(ts: NaiveDateTime) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<Option<NaiveDateTime>> for DateInput {
    fn from(ts: Option<NaiveDateTime>) -> Self {
        ts.map_or(Self::Now, Self::Timestamp)
    }
}

/// Descriptor for one paginated remote call: up to `count` candles ending at
/// the exchange-local anchor `to`. Consumed immediately, never retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Exchange-local anchor timestamp of the page's newest candle.
    pub to: NaiveDateTime,
    /// Number of candles requested, at most the connector's page size.
    pub count: u16,
}
