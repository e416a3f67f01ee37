//! Time helpers — timestamps and the time-of-day codec.
//!
//! The device stores schedule boundaries as seconds since local midnight while
//! operators edit them as "HH:MM" strings. The codec here is deliberately
//! lossy: seconds within the minute are discarded, so a round trip holds at
//! minute granularity only.

use chrono::{DateTime, Utc};

use crate::error::ValidationError;

/// UTC timestamp used for notification lifetimes.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render seconds since midnight as a zero-padded "HH:MM" string.
///
/// Total for any `u32` input: values at or beyond 86400 render with an hour
/// field above 23 rather than wrapping or failing. Seconds within the minute
/// are truncated.
#[must_use]
pub fn seconds_to_time_string(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{hours:02}:{minutes:02}")
}

/// Parse an "HH:MM" string into seconds since midnight.
///
/// Accepts the same out-of-range hours that [`seconds_to_time_string`]
/// produces (minutes must still be below 60).
///
/// # Errors
///
/// Returns [`ValidationError::InvalidTime`] for anything that is not two
/// colon-separated numeric fields.
pub fn time_string_to_seconds(input: &str) -> Result<u32, ValidationError> {
    let invalid = || ValidationError::InvalidTime {
        input: input.to_string(),
    };

    let (hours, minutes) = input.trim().split_once(':').ok_or_else(invalid)?;
    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }
    Ok(hours * 3600 + minutes * 60)
}
