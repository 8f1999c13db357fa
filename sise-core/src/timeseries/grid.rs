use crate::types::{Candle, Interval};

/// Re-index a sorted, deduplicated series onto the uniform grid from its
/// first to its last timestamp, stepped by exactly one `interval`.
///
/// A grid point with no input row is filled by carrying the most recent
/// preceding row forward verbatim (timestamp aside), volume and notional
/// included rather than zeroed. Input rows that sit off the grid contribute
/// as fill sources but do not appear in the output.
///
/// Downstream indicator math assumes one row per fixed step; a missing step
/// would silently shift every subsequent lookback window.
#[must_use]
pub fn fill_gaps(candles: &[Candle], interval: Interval) -> Vec<Candle> {
    let (Some(first), Some(last)) = (candles.first(), candles.last()) else {
        return Vec::new();
    };

    let step = interval.duration();
    let mut out = Vec::with_capacity(candles.len());
    let mut next = 0usize;
    let mut carried: Option<&Candle> = None;
    let mut ts = first.ts;

    while ts <= last.ts {
        while next < candles.len() && candles[next].ts <= ts {
            carried = Some(&candles[next]);
            next += 1;
        }
        // `carried` is always set from the first grid point onward.
        if let Some(source) = carried {
            if source.ts == ts {
                out.push(source.clone());
            } else {
                let mut filled = source.clone();
                filled.ts = ts;
                out.push(filled);
            }
        }
        ts = ts + step;
    }
    out
}

/// Whether every pair of adjacent timestamps differs by exactly one
/// `interval`.
#[must_use]
pub fn is_uniform(candles: &[Candle], interval: Interval) -> bool {
    let step = interval.duration();
    candles.windows(2).all(|w| w[1].ts - w[0].ts == step)
}
