//! # xt-time
//!
//! Dates, the U.S. federal holiday rule table, Easter, the Christmas Eve
//! cutoff, business-day calendars, and a time-zone aware clock.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// Local "now" in a configured time zone.
pub mod clock;

/// Christmas Eve cutoff.
pub mod cutoff;

/// `Date` type.
pub mod date;

/// `DateTime` and `TimeOfDay`.
pub mod date_time;

/// Gauss Easter computation.
pub mod easter;

/// Holiday rules and the federal holiday table.
pub mod holidays;

/// `Month`: month of the year.
pub mod month;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::Calendar;
pub use calendars::united_states::UnitedStatesFederal;
pub use cutoff::{is_christmas_eve, ChristmasEveCutoff};
pub use date::Date;
pub use date_time::{DateTime, TimeOfDay};
pub use easter::{easter_monday, easter_sunday, good_friday, EasterDate};
pub use holidays::{
    federal_holiday_on, is_federal_holiday, DayRule, FederalHoliday, HolidayCalendar,
    HolidayRule, Observance,
};
pub use month::Month;
pub use weekday::Weekday;
