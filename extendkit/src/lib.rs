//! # extendkit
//!
//! Small utilities grouped in one façade:
//!
//! * [`time`]: U.S. federal holidays, the Christmas Eve cutoff, Gauss Easter,
//!   and business-day calendars;
//! * [`text`]: extract arguments from a string by template.
//!
//! Application code should depend on this crate rather than the individual
//! `xt-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use extendkit::{easter_sunday, extract_arguments, ComparisonMode, Date, HolidayCalendar, Month};
//!
//! let independence = Date::from_ymd(2026, 7, 3).unwrap();
//! let calendar = HolidayCalendar::federal();
//! let holiday = calendar.holiday_on(independence).unwrap();
//! assert_eq!(holiday.name(), "Independence Day");
//!
//! let easter = easter_sunday(2024);
//! assert_eq!((easter.month(), easter.day()), (Month::March, 31));
//!
//! let args = extract_arguments("id=7 name=ada", "id={0} name={1}", ComparisonMode::Whole).unwrap();
//! assert_eq!(args, ["7", "ada"]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type, settings, and shared aliases.
pub use xt_core as core;

/// Dates, holidays, Easter, calendars, and the clock.
pub use xt_time as time;

/// Template argument extraction.
pub use xt_text as text;

pub use xt_core::{Error, Result, Settings};
pub use xt_text::{extract, extract_arguments, ComparisonMode, MatchOptions};
pub use xt_time::{
    easter_sunday, is_christmas_eve, Calendar, ChristmasEveCutoff, Date, DateTime,
    HolidayCalendar, Month, Weekday,
};
