use chrono::{FixedOffset, NaiveDate, NaiveDateTime};

use crate::timeseries::clock;
use crate::types::DateInput;
use crate::SiseError;

/// Textual formats accepted for date inputs, strictest first.
const TEXT_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Coerce a caller-supplied date input into an exchange-local timestamp.
///
/// Total over every `DateInput` variant:
/// - `Now` resolves against `offset` and is truncated to whole seconds.
/// - `Text` is parsed permissively against the accepted formats above,
///   plus bare `%Y-%m-%d` dates resolving to midnight.
/// - `Timestamp` passes through unchanged.
///
/// # Errors
/// Returns `SiseError::InvalidDate` carrying the offending input when a
/// textual timestamp cannot be parsed. Never panics; this function gates all
/// downstream range arithmetic.
pub fn coerce(input: DateInput, offset: FixedOffset) -> Result<NaiveDateTime, SiseError> {
    match input {
        DateInput::Now => Ok(clock::now_local(offset)),
        DateInput::Timestamp(ts) => Ok(ts),
        DateInput::Text(s) => parse_text(&s).ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::warn!(input = %s, "unparsable date input");
            SiseError::invalid_date(s)
        }),
    }
}

fn parse_text(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    for format in TEXT_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, format) {
            return Some(ts);
        }
    }
    // Bare dates resolve to midnight.
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
