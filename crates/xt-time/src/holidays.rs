//! Holiday rules and the U.S. federal holiday table.
//!
//! A holiday is described by a [`DayRule`]: a fixed month/day (optionally
//! shifted off weekends), the *n*-th weekday of a month, or the last weekday
//! of a month. Rules are plain data so a table of them can be iterated,
//! extended, and checked for overlaps.
//!
//! # Observed shifts
//! A [`Observance::NearestWeekday`] holiday falling on a Saturday is observed
//! the Friday before; one falling on a Sunday is observed the Monday after.
//! The nominal date itself only matches when it is a weekday, so a date
//! never matches both the nominal and the shifted form.

use std::borrow::Cow;

use crate::date::{days_in_month, Date};
use crate::month::Month;
use crate::weekday::Weekday;
use xt_core::errors::Result;
use xt_core::utilities::format_ordinal;

// ── DayRule ───────────────────────────────────────────────────────────────────

/// Whether a fixed-date holiday moves when it falls on a weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Observance {
    /// Only the nominal date, whatever weekday it falls on.
    Nominal,
    /// Saturday → preceding Friday, Sunday → following Monday.
    NearestWeekday,
}

/// When in the year a holiday falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayRule {
    /// A fixed month and day.
    Fixed {
        /// Month of the holiday.
        month: Month,
        /// Day of the month.
        day: u8,
        /// Weekend adjustment.
        observance: Observance,
    },
    /// The `nth` occurrence of `weekday` in `month` (`nth = ceil(day / 7)`).
    NthWeekday {
        /// Month of the holiday.
        month: Month,
        /// Day of the week.
        weekday: Weekday,
        /// Occurrence, starting at 1.
        nth: u8,
    },
    /// The last occurrence of `weekday` in `month`.
    LastWeekday {
        /// Month of the holiday.
        month: Month,
        /// Day of the week.
        weekday: Weekday,
    },
}

impl DayRule {
    /// Return `true` if `date` is (an observance of) this rule.
    pub fn matches(&self, date: Date) -> bool {
        let m = date.month();
        let w = date.weekday();
        match *self {
            DayRule::Fixed {
                month,
                day,
                observance,
            } => {
                let is = |d: Date| d.month() == month.number() && d.day_of_month() == day;
                match observance {
                    Observance::Nominal => is(date),
                    Observance::NearestWeekday => {
                        (is(date) && !w.is_weekend())
                            || (w == Weekday::Friday && date.add_days(1).is_ok_and(is))
                            || (w == Weekday::Monday && date.add_days(-1).is_ok_and(is))
                    }
                }
            }
            DayRule::NthWeekday {
                month,
                weekday,
                nth,
            } => m == month.number() && w == weekday && date.nth_weekday_of_month() == nth,
            DayRule::LastWeekday { month, weekday } => {
                // A week later is already next month.
                m == month.number()
                    && w == weekday
                    && date.day_of_month() + 7 > days_in_month(date.year(), m)
            }
        }
    }

    /// The unshifted date of this rule in `year`.
    pub fn nominal_date(&self, year: u16) -> Result<Date> {
        match *self {
            DayRule::Fixed { month, day, .. } => Date::new(year, month, day),
            DayRule::NthWeekday {
                month,
                weekday,
                nth,
            } => Date::nth_weekday(nth, weekday, year, month.number()),
            DayRule::LastWeekday { month, weekday } => {
                Date::last_weekday(weekday, year, month.number())
            }
        }
    }

    /// The date on which this rule is observed for `year`, after any weekend
    /// shift. May fall in an adjacent year (New Year's Day on a Saturday is
    /// observed on December 31 of the year before).
    pub fn observed_date(&self, year: u16) -> Result<Date> {
        let nominal = self.nominal_date(year)?;
        match *self {
            DayRule::Fixed {
                observance: Observance::NearestWeekday,
                ..
            } => match nominal.weekday() {
                Weekday::Saturday => nominal.add_days(-1),
                Weekday::Sunday => nominal.add_days(1),
                _ => Ok(nominal),
            },
            _ => Ok(nominal),
        }
    }
}

impl std::fmt::Display for DayRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayRule::Fixed {
                month,
                day,
                observance: Observance::Nominal,
            } => write!(f, "{month} {day}"),
            DayRule::Fixed { month, day, .. } => write!(f, "{month} {day} (nearest weekday)"),
            DayRule::NthWeekday {
                month,
                weekday,
                nth,
            } => write!(f, "{} {weekday} of {month}", format_ordinal(u32::from(*nth))),
            DayRule::LastWeekday { month, weekday } => write!(f, "last {weekday} of {month}"),
        }
    }
}

// ── Federal holidays ──────────────────────────────────────────────────────────

/// The U.S. federal holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FederalHoliday {
    /// January 1.
    NewYearsDay,
    /// Third Monday of January.
    MartinLutherKingJrDay,
    /// Third Monday of February (Washington's Birthday).
    PresidentsDay,
    /// Last Monday of May.
    MemorialDay,
    /// July 4.
    IndependenceDay,
    /// First Monday of September.
    LaborDay,
    /// Second Monday of October.
    ColumbusDay,
    /// November 11.
    VeteransDay,
    /// Fourth Thursday of November.
    Thanksgiving,
    /// December 25.
    ChristmasDay,
}

const fn shifted(month: Month, day: u8) -> DayRule {
    DayRule::Fixed {
        month,
        day,
        observance: Observance::NearestWeekday,
    }
}

const fn nth_monday(month: Month, nth: u8) -> DayRule {
    DayRule::NthWeekday {
        month,
        weekday: Weekday::Monday,
        nth,
    }
}

impl FederalHoliday {
    /// Every federal holiday, in calendar order.
    pub const ALL: [FederalHoliday; 10] = [
        FederalHoliday::NewYearsDay,
        FederalHoliday::MartinLutherKingJrDay,
        FederalHoliday::PresidentsDay,
        FederalHoliday::MemorialDay,
        FederalHoliday::IndependenceDay,
        FederalHoliday::LaborDay,
        FederalHoliday::ColumbusDay,
        FederalHoliday::VeteransDay,
        FederalHoliday::Thanksgiving,
        FederalHoliday::ChristmasDay,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            FederalHoliday::NewYearsDay => "New Year's Day",
            FederalHoliday::MartinLutherKingJrDay => "Martin Luther King Jr. Day",
            FederalHoliday::PresidentsDay => "Presidents Day",
            FederalHoliday::MemorialDay => "Memorial Day",
            FederalHoliday::IndependenceDay => "Independence Day",
            FederalHoliday::LaborDay => "Labor Day",
            FederalHoliday::ColumbusDay => "Columbus Day",
            FederalHoliday::VeteransDay => "Veterans Day",
            FederalHoliday::Thanksgiving => "Thanksgiving Day",
            FederalHoliday::ChristmasDay => "Christmas Day",
        }
    }

    /// The rule that places this holiday in the year.
    pub const fn rule(&self) -> DayRule {
        match self {
            FederalHoliday::NewYearsDay => shifted(Month::January, 1),
            FederalHoliday::MartinLutherKingJrDay => nth_monday(Month::January, 3),
            FederalHoliday::PresidentsDay => nth_monday(Month::February, 3),
            FederalHoliday::MemorialDay => DayRule::LastWeekday {
                month: Month::May,
                weekday: Weekday::Monday,
            },
            FederalHoliday::IndependenceDay => shifted(Month::July, 4),
            FederalHoliday::LaborDay => nth_monday(Month::September, 1),
            FederalHoliday::ColumbusDay => nth_monday(Month::October, 2),
            FederalHoliday::VeteransDay => shifted(Month::November, 11),
            FederalHoliday::Thanksgiving => DayRule::NthWeekday {
                month: Month::November,
                weekday: Weekday::Thursday,
                nth: 4,
            },
            FederalHoliday::ChristmasDay => shifted(Month::December, 25),
        }
    }
}

impl std::fmt::Display for FederalHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Return the federal holiday observed on `date`, if any.
pub fn federal_holiday_on(date: Date) -> Option<FederalHoliday> {
    FederalHoliday::ALL
        .into_iter()
        .find(|h| h.rule().matches(date))
}

/// Return `true` if `date` is a U.S. federal holiday (including observed
/// Friday/Monday shifts).
pub fn is_federal_holiday(date: Date) -> bool {
    federal_holiday_on(date).is_some()
}

// ── Rule tables ───────────────────────────────────────────────────────────────

/// A named [`DayRule`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayRule {
    name: Cow<'static, str>,
    rule: DayRule,
}

impl HolidayRule {
    /// Create a rule.
    pub fn new(name: impl Into<Cow<'static, str>>, rule: DayRule) -> Self {
        Self {
            name: name.into(),
            rule,
        }
    }

    /// Name of the holiday.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The placement rule.
    pub fn rule(&self) -> &DayRule {
        &self.rule
    }

    /// Return `true` if `date` is (an observance of) this holiday.
    pub fn matches(&self, date: Date) -> bool {
        self.rule.matches(date)
    }
}

impl From<FederalHoliday> for HolidayRule {
    fn from(h: FederalHoliday) -> Self {
        HolidayRule::new(h.name(), h.rule())
    }
}

/// An ordered table of holiday rules.
///
/// Rules are evaluated independently; the first match is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    name: Cow<'static, str>,
    rules: Vec<HolidayRule>,
}

impl HolidayCalendar {
    /// The U.S. federal holiday table.
    pub fn federal() -> Self {
        Self::with_rules(
            "United States (Federal)",
            FederalHoliday::ALL.into_iter().map(HolidayRule::from),
        )
    }

    /// Build a calendar from an arbitrary rule table.
    pub fn with_rules(
        name: impl Into<Cow<'static, str>>,
        rules: impl IntoIterator<Item = HolidayRule>,
    ) -> Self {
        Self {
            name: name.into(),
            rules: rules.into_iter().collect(),
        }
    }

    /// Append a rule to the table.
    pub fn push_rule(&mut self, rule: HolidayRule) {
        self.rules.push(rule);
    }

    /// The rule table, in evaluation order.
    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    /// The first rule matching `date`.
    pub fn holiday_on(&self, date: Date) -> Option<&HolidayRule> {
        let hit = self.rules.iter().find(|r| r.matches(date));
        if let Some(rule) = hit {
            tracing::trace!(%date, holiday = rule.name(), "holiday rule matched");
        }
        hit
    }

    /// Every rule matching `date`. For a well-formed table this yields at
    /// most one rule.
    pub fn matching_rules(&self, date: Date) -> impl Iterator<Item = &HolidayRule> + '_ {
        self.rules.iter().filter(move |r| r.matches(date))
    }

    /// Return `true` if any rule matches `date`.
    pub fn is_holiday_date(&self, date: Date) -> bool {
        self.holiday_on(date).is_some()
    }

    /// All holiday dates falling inside `year`, in date order.
    ///
    /// Observed dates are reported in the year they fall in, so a year can
    /// contain the observed New Year's Day of the following year.
    pub fn holidays_in_year(&self, year: u16) -> Result<Vec<(Date, &HolidayRule)>> {
        let first = Date::from_ymd(year, 1, 1)?;
        let last = Date::from_ymd(year, 12, 31)?;
        let mut out = Vec::new();
        let mut d = first;
        loop {
            if let Some(rule) = self.holiday_on(d) {
                out.push((d, rule));
            }
            if d == last {
                break;
            }
            d = d.add_days(1)?;
        }
        Ok(out)
    }

    pub(crate) fn display_name(&self) -> &str {
        &self.name
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::federal()
    }
}
