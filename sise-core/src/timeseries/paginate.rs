use chrono::{Duration, NaiveDateTime};

use crate::types::{Interval, PageRequest};

/// Plan the paginated calls needed to fetch `count` candles ending at `to`.
///
/// The remote endpoint only answers "give me N candles ending at T" with
/// N capped at `page_limit`, so an arbitrary window is covered by walking
/// backward from `to` in `page_limit × interval` strides. The irregular
/// remainder page (if any) is fetched first, at the earliest anchor, so that
/// every subsequent full page lands on a page-limit boundary.
///
/// `count == 0` yields an empty plan: a no-op, not an error.
///
/// For `count = 450`, `page_limit = 200` the plan is exactly three requests:
/// `(to − 400·unit, 50)`, `(to − 200·unit, 200)`, `(to, 200)`.
#[must_use]
pub fn plan_pages(
    count: u32,
    to: NaiveDateTime,
    interval: Interval,
    page_limit: u16,
) -> Vec<PageRequest> {
    if count == 0 || page_limit == 0 {
        return Vec::new();
    }

    let limit = u32::from(page_limit);
    let quotient = count / limit;
    let remainder = count % limit;
    let unit_minutes = interval.minutes();

    let mut pages = Vec::with_capacity(quotient as usize + usize::from(remainder != 0));
    let mut anchor = to - Duration::minutes(unit_minutes * i64::from(count));

    if remainder != 0 {
        anchor += Duration::minutes(unit_minutes * i64::from(remainder));
        pages.push(PageRequest {
            to: anchor,
            count: remainder as u16,
        });
    }
    for _ in 0..quotient {
        anchor += Duration::minutes(unit_minutes * i64::from(limit));
        pages.push(PageRequest {
            to: anchor,
            count: page_limit,
        });
    }
    pages
}

/// Number of whole candles spanning `[start, end)`, rounding partial
/// intervals (and partial minutes) up.
///
/// Returns 0 when `end` is not after `start`.
#[must_use]
pub fn candles_between(start: NaiveDateTime, end: NaiveDateTime, interval: Interval) -> u32 {
    if end <= start {
        return 0;
    }
    let span = end - start;
    let mut minutes = span.num_minutes();
    if span.num_seconds() % 60 != 0 {
        minutes += 1;
    }
    let mut count = minutes / interval.minutes();
    if minutes % interval.minutes() != 0 {
        count += 1;
    }
    u32::try_from(count).unwrap_or(u32::MAX)
}
