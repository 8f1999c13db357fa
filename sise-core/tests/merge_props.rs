use chrono::{DateTime, NaiveDateTime};
use proptest::prelude::*;
use rust_decimal::Decimal;
use sise_core::{merge_keep_last, sort_dedup_keep_last, Candle};
use std::collections::BTreeSet;

fn ts_from_secs(s: i64) -> NaiveDateTime {
    DateTime::from_timestamp(s, 0).unwrap().naive_utc()
}

fn candle(ts_secs: i64, close_cents: i64) -> Candle {
    let close = Decimal::new(close_cents, 2);
    Candle {
        ts: ts_from_secs(ts_secs),
        open: close - Decimal::ONE,
        high: close + Decimal::ONE,
        low: close - Decimal::TWO,
        close,
        volume: Decimal::TEN,
        value: None,
    }
}

fn arb_series() -> impl Strategy<Value = Vec<Candle>> {
    proptest::collection::vec(
        ((0i64..10_000).prop_map(|m| m * 60), 0i64..1_000_000),
        0..200,
    )
    .prop_map(|rows| rows.into_iter().map(|(s, c)| candle(s, c)).collect())
}

proptest! {
    #[test]
    fn output_is_sorted_and_duplicate_free(series in arb_series()) {
        let merged = sort_dedup_keep_last(series);
        for w in merged.windows(2) {
            prop_assert!(w[0].ts < w[1].ts);
        }
    }

    #[test]
    fn output_timestamps_equal_input_timestamp_set(series in arb_series()) {
        let expected: BTreeSet<NaiveDateTime> = series.iter().map(|c| c.ts).collect();
        let merged = sort_dedup_keep_last(series);
        let got: BTreeSet<NaiveDateTime> = merged.iter().map(|c| c.ts).collect();
        prop_assert_eq!(got.len(), merged.len());
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn merge_is_idempotent(series in arb_series()) {
        let once = sort_dedup_keep_last(series);
        let twice = sort_dedup_keep_last(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn later_series_supersedes_earlier(a in arb_series(), b in arb_series()) {
        let merged = merge_keep_last([a.clone(), b.clone()]);
        // For every timestamp present in `b`, the merged row must be `b`'s
        // last row at that instant.
        for candle in &merged {
            if let Some(winner) = b.iter().rev().find(|c| c.ts == candle.ts) {
                prop_assert_eq!(candle, winner);
            }
        }
        // Rows only in `a` must survive untouched.
        for candle in &merged {
            if !b.iter().any(|c| c.ts == candle.ts) {
                let source = a.iter().rev().find(|c| c.ts == candle.ts);
                prop_assert_eq!(Some(candle), source);
            }
        }
    }
}

#[test]
fn keep_last_within_a_single_series() {
    let stale = candle(600, 100);
    let fresh = candle(600, 999);
    let merged = sort_dedup_keep_last(vec![stale, fresh.clone()]);
    assert_eq!(merged, vec![fresh]);
}
