//! `TimeOfDay` and `DateTime`: a civil date with a wall-clock time.
//!
//! No time zone is attached; [`crate::clock`] is responsible for turning an
//! instant into a local `DateTime`.

use crate::date::Date;
use xt_core::errors::{Error, Result};

/// A wall-clock time with one-second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTimeOfDay")
)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Midnight (00:00:00).
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Create a time from hour (0–23), minute (0–59), and second (0–59).
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self> {
        if hour > 23 {
            return Err(Error::Date(format!("hour {hour} out of range [0, 23]")));
        }
        if minute > 59 {
            return Err(Error::Date(format!("minute {minute} out of range [0, 59]")));
        }
        if second > 59 {
            return Err(Error::Date(format!("second {second} out of range [0, 59]")));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Const constructor for compile-time literals; values are not checked.
    pub(crate) const fn hms(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Hour of the day (0–23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of the hour (0–59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Second of the minute (0–59).
    pub fn second(&self) -> u8 {
        self.second
    }

    /// U.S. short time: `"1:05 PM"`.
    pub fn short_time(&self) -> String {
        let (h12, suffix) = match self.hour {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        format!("{h12}:{:02} {suffix}", self.minute)
    }
}

/// Unchecked wire form; deserialization goes through [`TimeOfDay::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTimeOfDay> for TimeOfDay {
    type Error = Error;

    fn try_from(raw: RawTimeOfDay) -> Result<Self> {
        TimeOfDay::new(raw.hour, raw.minute, raw.second)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// A civil date and wall-clock time, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateTime {
    // Field order drives the derived ordering: date first, then time.
    date: Date,
    time: TimeOfDay,
}

impl DateTime {
    /// Combine a date and a time.
    pub fn new(date: Date, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Build from individual components, validating each.
    pub fn from_ymd_hms(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self> {
        Ok(Self::new(
            Date::from_ymd(year, month, day)?,
            TimeOfDay::new(hour, minute, second)?,
        ))
    }

    /// The date part.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The time part.
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Date and time as one string: `"8/12/2020 1:05 PM"`.
    pub fn short_date_time(&self) -> String {
        format!("{} {}", self.date.short_date(), self.time.short_time())
    }
}

impl From<Date> for DateTime {
    fn from(date: Date) -> Self {
        Self::new(date, TimeOfDay::MIDNIGHT)
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_validation() {
        assert!(TimeOfDay::new(23, 59, 59).is_ok());
        assert_eq!(
            TimeOfDay::new(24, 0, 0).unwrap_err(),
            Error::Date("hour 24 out of range [0, 23]".into())
        );
        assert!(matches!(TimeOfDay::new(0, 60, 0), Err(Error::Date(_))));
        assert!(matches!(TimeOfDay::new(0, 0, 60), Err(Error::Date(_))));
        assert!(matches!(
            DateTime::from_ymd_hms(2024, 1, 1, 25, 0, 0),
            Err(Error::Date(_))
        ));
    }

    #[test]
    fn chronological_order() {
        let a = DateTime::from_ymd_hms(2023, 12, 24, 13, 0, 0).unwrap();
        let b = DateTime::from_ymd_hms(2023, 12, 24, 13, 0, 1).unwrap();
        let c = DateTime::from_ymd_hms(2023, 12, 25, 0, 0, 0).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn short_time() {
        assert_eq!(TimeOfDay::new(0, 5, 0).unwrap().short_time(), "12:05 AM");
        assert_eq!(TimeOfDay::new(12, 0, 0).unwrap().short_time(), "12:00 PM");
        assert_eq!(TimeOfDay::new(13, 5, 9).unwrap().short_time(), "1:05 PM");
    }

    #[test]
    fn short_date_time() {
        let dt = DateTime::from_ymd_hms(2020, 8, 12, 13, 5, 0).unwrap();
        assert_eq!(dt.short_date_time(), "8/12/2020 1:05 PM");
        assert_eq!(dt.to_string(), "12 August 2020 13:05:00");
    }
}
