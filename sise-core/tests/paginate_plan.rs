use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use sise_core::{candles_between, plan_pages, Interval, PageRequest};

fn t(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

#[test]
fn zero_count_is_a_noop() {
    assert!(plan_pages(0, t(2025, 3, 2, 18, 0, 0), Interval::M5, 200).is_empty());
}

#[test]
fn small_count_is_a_single_page() {
    let to = t(2025, 3, 2, 18, 0, 0);
    let pages = plan_pages(50, to, Interval::M5, 200);
    assert_eq!(pages, vec![PageRequest { to, count: 50 }]);
}

#[test]
fn exact_multiple_has_no_remainder_page() {
    let to = t(2025, 3, 2, 18, 0, 0);
    let unit = Duration::minutes(5);
    let pages = plan_pages(400, to, Interval::M5, 200);
    assert_eq!(
        pages,
        vec![
            PageRequest { to: to - unit * 200, count: 200 },
            PageRequest { to, count: 200 },
        ]
    );
}

#[test]
fn remainder_page_comes_first_for_450() {
    let to = t(2025, 3, 2, 18, 0, 0);
    let unit = Duration::minutes(5);
    let pages = plan_pages(450, to, Interval::M5, 200);
    assert_eq!(
        pages,
        vec![
            PageRequest { to: to - unit * 400, count: 50 },
            PageRequest { to: to - unit * 200, count: 200 },
            PageRequest { to, count: 200 },
        ]
    );
}

proptest! {
    // The plan must always cover exactly `count` candles ending at `to`,
    // with contiguous non-overlapping pages.
    #[test]
    fn plan_covers_count_exactly(count in 0u32..3_000, limit in 1u16..500) {
        let to = t(2025, 3, 2, 18, 0, 0);
        let interval = Interval::M1;
        let pages = plan_pages(count, to, interval, limit);

        let total: u32 = pages.iter().map(|p| u32::from(p.count)).sum();
        prop_assert_eq!(total, count);

        if let Some(last) = pages.last() {
            prop_assert_eq!(last.to, to);
        }
        // Every page except a leading remainder is full, and anchors are
        // spaced by exactly the candles the following page carries.
        for w in pages.windows(2) {
            prop_assert_eq!(w[1].count, limit);
            let gap = w[1].to - w[0].to;
            prop_assert_eq!(gap, interval.duration() * i32::from(w[1].count));
        }
    }
}

#[test]
fn candles_between_counts_whole_intervals() {
    let start = t(2024, 1, 1, 9, 0, 0);
    assert_eq!(
        candles_between(start, t(2024, 1, 1, 10, 0, 0), Interval::M5),
        12
    );
}

#[test]
fn candles_between_rounds_partial_intervals_up() {
    let start = t(2024, 1, 1, 9, 0, 0);
    assert_eq!(
        candles_between(start, t(2024, 1, 1, 9, 7, 0), Interval::M5),
        2
    );
}

#[test]
fn candles_between_rounds_stray_seconds_up() {
    let start = t(2024, 1, 1, 9, 0, 0);
    assert_eq!(
        candles_between(start, t(2024, 1, 1, 9, 5, 1), Interval::M5),
        2
    );
}

#[test]
fn candles_between_inverted_range_is_zero() {
    let start = t(2024, 1, 1, 9, 0, 0);
    assert_eq!(candles_between(start, start, Interval::M5), 0);
    assert_eq!(
        candles_between(start, t(2023, 12, 31, 9, 0, 0), Interval::M5),
        0
    );
}
