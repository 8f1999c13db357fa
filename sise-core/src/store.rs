use crate::types::{Candle, Interval};
use crate::SiseError;

/// Persistence contract for one candle series per (ticker, interval) pair.
///
/// Implementations are synchronous: series files are small, each series has
/// exactly one owner during a sync run, and there is no concurrency to yield
/// to (see the facade's sequential batch driver).
pub trait SeriesStore: Send + Sync {
    /// Load the persisted series.
    ///
    /// A missing file is not an error and yields an empty series. Row order
    /// follows the file; callers normalize before relying on ordering.
    ///
    /// # Errors
    /// Returns `SiseError::Storage` if the file exists but cannot be read or
    /// parsed.
    fn load(&self, ticker: &str, interval: Interval) -> Result<Vec<Candle>, SiseError>;

    /// Persist `candles`, fully overwriting any prior content.
    ///
    /// The in-memory series already contains the complete reconciled history
    /// when this is called, so no append path is needed.
    ///
    /// # Errors
    /// Returns `SiseError::Storage` if the file cannot be written.
    fn save(&self, ticker: &str, interval: Interval, candles: &[Candle])
        -> Result<(), SiseError>;
}
