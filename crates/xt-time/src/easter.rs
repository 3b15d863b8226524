//! Western (Gregorian) Easter by Gauss's method.
//!
//! [`easter_sunday`] accepts any integer year and never fails; the result is
//! only converted to a range-checked [`Date`] on request.

use crate::date::Date;
use crate::month::Month;
use xt_core::errors::{Error, Result};
use xt_core::Year;

/// Easter Sunday for a given year, as computed by [`easter_sunday`].
///
/// `month` is always March or April.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EasterDate {
    year: Year,
    month: Month,
    day: u8,
}

impl EasterDate {
    /// The year the computation was run for.
    pub fn year(&self) -> Year {
        self.year
    }

    /// March or April.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Convert to a [`Date`].
    ///
    /// # Errors
    /// Fails when the year lies outside the range `Date` can represent.
    pub fn to_date(&self) -> Result<Date> {
        let year = u16::try_from(self.year)
            .map_err(|_| Error::Date(format!("year {} out of range [1, 9999]", self.year)))?;
        Date::new(year, self.month, self.day)
    }
}

impl std::fmt::Display for EasterDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.year)
    }
}

/// Compute Easter Sunday for `year`.
///
/// Every division and remainder is floored, so the computation is defined
/// for all years (including zero and negative ones). Results are only
/// meaningful for Gregorian years (1583 onward).
pub fn easter_sunday(year: Year) -> EasterDate {
    // Widened so `5 * year` cannot overflow.
    let yr = i64::from(year);

    // Golden number and century.
    let g = yr.rem_euclid(19) + 1;
    let century = yr.div_euclid(100) + 1;

    // Leap-year and lunar (Metonic) corrections.
    let x = (3 * century).div_euclid(4) - 12;
    let y = (8 * century + 5).div_euclid(25) - 5;

    // Sunday finder.
    let z = (5 * yr).div_euclid(4) - x - 10;

    // Epact.
    let mut e = (11 * g + 20 + y - x).rem_euclid(30);
    if e == 24 {
        e += 1;
    }
    if e == 25 && g > 11 {
        e += 1;
    }

    // Paschal full moon, counted in days from March 1st.
    let mut n = 44 - e;
    if n < 21 {
        n += 30;
    }

    let mut p = (n + 7) - (z + n).rem_euclid(7);
    let month = if p > 31 {
        p -= 31;
        Month::April
    } else {
        Month::March
    };

    EasterDate {
        year,
        month,
        // n + 7 <= 57 and the subtracted remainder is at most 6.
        day: p as u8,
    }
}

/// Good Friday: two days before Easter Sunday.
pub fn good_friday(year: u16) -> Result<Date> {
    easter_sunday(Year::from(year)).to_date()?.add_days(-2)
}

/// Easter Monday: the day after Easter Sunday.
pub fn easter_monday(year: u16) -> Result<Date> {
    easter_sunday(Year::from(year)).to_date()?.add_days(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn md(year: Year) -> (u8, u8) {
        let e = easter_sunday(year);
        (e.month().number(), e.day())
    }

    #[test]
    fn reference_years() {
        assert_eq!(md(2024), (3, 31));
        assert_eq!(md(2025), (4, 20));
        assert_eq!(md(2000), (4, 23));
        assert_eq!(md(2019), (4, 21));
        assert_eq!(md(2008), (3, 23));
        assert_eq!(md(1943), (4, 25));
        assert_eq!(md(2285), (3, 22));
    }

    #[test]
    fn easter_is_a_sunday() {
        for year in 1583..=2500 {
            let d = easter_sunday(year).to_date().unwrap();
            assert_eq!(d.weekday(), Weekday::Sunday, "Easter {year}");
        }
    }

    #[test]
    fn out_of_range_years_still_compute() {
        let e = easter_sunday(-5);
        assert_eq!((e.month(), e.day()), (Month::April, 2));
        assert!(e.to_date().is_err());

        let e = easter_sunday(0);
        assert_eq!((e.month(), e.day()), (Month::April, 9));
        assert!(e.to_date().is_err());
    }

    #[test]
    fn good_friday_and_easter_monday() {
        // Easter Sunday 2023: April 9
        assert_eq!(good_friday(2023).unwrap(), Date::from_ymd(2023, 4, 7).unwrap());
        assert_eq!(easter_monday(2023).unwrap(), Date::from_ymd(2023, 4, 10).unwrap());
    }
}
