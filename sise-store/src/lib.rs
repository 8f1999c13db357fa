//! CSV persistence for sise candle series.
//!
//! One file per (ticker, interval) pair, named `{ticker}_{interval}.csv`
//! under a configurable data directory. The timestamp column is written as
//! `%Y-%m-%d %H:%M:%S`; reads also accept the historical `%Y-%m-%d %H:%M`
//! shape (the stricter format is attempted first).
#![warn(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sise_core::{Candle, Interval, SeriesStore, SiseError};

/// Timestamp text written on save and tried first on load.
const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Fallback for files written before seconds were recorded.
const TS_FORMAT_LOOSE: &str = "%Y-%m-%d %H:%M";

/// One persisted row. Timestamps travel as text so both historical formats
/// can be accepted on the way in.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    timestamp: String,
    open: Decimal,
    high: Decimal,
    low: Decimal,
    close: Decimal,
    volume: Decimal,
    #[serde(default)]
    value: Option<Decimal>,
}

impl CsvRow {
    fn from_candle(c: &Candle) -> Self {
        Self {
            timestamp: c.ts.format(TS_FORMAT).to_string(),
            open: c.open,
            high: c.high,
            low: c.low,
            close: c.close,
            volume: c.volume,
            value: c.value,
        }
    }

    fn into_candle(self, path: &Path) -> Result<Candle, SiseError> {
        let ts = parse_timestamp(&self.timestamp).ok_or_else(|| {
            SiseError::storage(
                path.display().to_string(),
                format!("bad timestamp: {}", self.timestamp),
            )
        })?;
        Ok(Candle {
            ts,
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            volume: self.volume,
            value: self.value,
        })
    }
}

fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, TS_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, TS_FORMAT_LOOSE))
        .ok()
}

/// File-per-series CSV store rooted at a data directory.
pub struct CsvStore {
    dir: PathBuf,
}

impl CsvStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// the first save.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the series file for a (ticker, interval) pair.
    #[must_use]
    pub fn series_path(&self, ticker: &str, interval: Interval) -> PathBuf {
        self.dir.join(format!("{ticker}_{interval}.csv"))
    }
}

impl SeriesStore for CsvStore {
    fn load(&self, ticker: &str, interval: Interval) -> Result<Vec<Candle>, SiseError> {
        let path = self.series_path(ticker, interval);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no persisted series");
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&path)
            .map_err(|e| SiseError::storage(path.display().to_string(), e.to_string()))?;

        let mut candles = Vec::new();
        for record in reader.deserialize::<CsvRow>() {
            let row =
                record.map_err(|e| SiseError::storage(path.display().to_string(), e.to_string()))?;
            candles.push(row.into_candle(&path)?);
        }
        tracing::debug!(path = %path.display(), rows = candles.len(), "loaded series");
        Ok(candles)
    }

    fn save(
        &self,
        ticker: &str,
        interval: Interval,
        candles: &[Candle],
    ) -> Result<(), SiseError> {
        let path = self.series_path(ticker, interval);
        fs::create_dir_all(&self.dir)
            .map_err(|e| SiseError::storage(self.dir.display().to_string(), e.to_string()))?;

        let mut writer = csv::Writer::from_path(&path)
            .map_err(|e| SiseError::storage(path.display().to_string(), e.to_string()))?;
        for candle in candles {
            writer
                .serialize(CsvRow::from_candle(candle))
                .map_err(|e| SiseError::storage(path.display().to_string(), e.to_string()))?;
        }
        writer
            .flush()
            .map_err(|e| SiseError::storage(path.display().to_string(), e.to_string()))?;
        tracing::info!(path = %path.display(), rows = candles.len(), "series saved");
        Ok(())
    }
}
