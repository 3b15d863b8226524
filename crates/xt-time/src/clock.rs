//! "Now" as a local [`DateTime`].
//!
//! The instant comes from [`Settings::evaluation_instant`] when one is pinned,
//! otherwise from the system clock. It is converted to wall-clock time in the
//! configured time zone ([`Settings::time_zone`], `America/New_York` unless
//! changed).

use chrono::{Datelike, Timelike};
use chrono_tz::Tz;

use crate::date::Date;
use crate::date_time::{DateTime, TimeOfDay};
use xt_core::errors::{Error, Result};
use xt_core::{fail, Settings};

/// Resolve an IANA time-zone identifier.
pub fn time_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| Error::TimeZone(name.to_string()))
}

/// The current UTC instant in seconds since the Unix epoch, honouring the
/// evaluation-instant override.
pub fn unix_now() -> i64 {
    Settings::instance()
        .evaluation_instant()
        .unwrap_or_else(|| chrono::Utc::now().timestamp())
}

/// Wall-clock time in `tz` at the given UTC instant.
pub fn local_at(unix_seconds: i64, tz: Tz) -> Result<DateTime> {
    let Some(utc) = chrono::DateTime::from_timestamp(unix_seconds, 0) else {
        fail!("instant {unix_seconds} is outside the representable range");
    };
    let local = utc.with_timezone(&tz).naive_local();
    let year = u16::try_from(local.year())
        .map_err(|_| Error::Date(format!("year {} out of range [1, 9999]", local.year())))?;
    // chrono guarantees month/day/hour/minute/second fit in u8; a leap
    // second is never produced from a whole-second timestamp.
    let date = Date::from_ymd(year, local.month() as u8, local.day() as u8)?;
    let time = TimeOfDay::new(local.hour() as u8, local.minute() as u8, local.second() as u8)?;
    Ok(DateTime::new(date, time))
}

/// Current wall-clock time in the time zone named `tz_name`.
pub fn now_in(tz_name: &str) -> Result<DateTime> {
    local_at(unix_now(), time_zone(tz_name)?)
}

/// Current wall-clock time in the configured default time zone.
pub fn now() -> Result<DateTime> {
    let tz_name = Settings::instance().time_zone();
    tracing::trace!(tz = %tz_name, "resolving local time");
    now_in(&tz_name)
}

/// Today's date in the configured default time zone.
pub fn today() -> Result<Date> {
    now().map(|dt| dt.date())
}
