use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::types::Candle;

/// Merge candle series in submission order, keyed by timestamp.
///
/// On duplicate timestamps the last-submitted candle wins, so callers encode
/// authority by ordering: freshly fetched segments submitted after stored
/// data supersede stale rows at the same instant. Output is sorted ascending.
pub fn merge_keep_last<I>(series: I) -> Vec<Candle>
where
    I: IntoIterator<Item = Vec<Candle>>,
{
    let mut map: BTreeMap<NaiveDateTime, Candle> = BTreeMap::new();
    for s in series {
        for c in s {
            map.insert(c.ts, c);
        }
    }
    map.into_values().collect()
}

/// Sort a single series ascending and drop duplicate timestamps, keeping the
/// last occurrence in input order.
#[must_use]
pub fn sort_dedup_keep_last(candles: Vec<Candle>) -> Vec<Candle> {
    merge_keep_last([candles])
}

// Inline tests omitted; covered by property tests in `sise-core/tests/`.
