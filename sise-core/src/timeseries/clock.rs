use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, Timelike, Utc};

/// UTC offset of the reference exchange's home timezone (KST). The venue has
/// no daylight saving, so a fixed offset is exact.
pub const EXCHANGE_UTC_OFFSET_HOURS: i32 = 9;

/// The exchange's fixed UTC offset.
#[must_use]
pub fn exchange_offset() -> FixedOffset {
    FixedOffset::east_opt(EXCHANGE_UTC_OFFSET_HOURS * 3600).expect("valid fixed offset")
}

/// Convert an exchange-local wall-clock anchor into the UTC instant the
/// remote API expects.
///
/// Applied only when constructing outbound anchors; returned candle data is
/// consumed in exchange-local time as delivered, so no inverse conversion
/// happens on the read path.
#[must_use]
pub fn to_api_anchor(local: NaiveDateTime, offset: FixedOffset) -> DateTime<Utc> {
    (local - Duration::seconds(i64::from(offset.local_minus_utc()))).and_utc()
}

/// Convert a UTC instant back into exchange-local wall-clock time.
#[must_use]
pub fn from_api_anchor(utc: DateTime<Utc>, offset: FixedOffset) -> NaiveDateTime {
    utc.naive_utc() + Duration::seconds(i64::from(offset.local_minus_utc()))
}

/// The current exchange-local wall-clock time, truncated to whole seconds.
#[must_use]
pub fn now_local(offset: FixedOffset) -> NaiveDateTime {
    let now = Utc::now().with_timezone(&offset).naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
