//! `Calendar` trait: business days over a holiday table.
//!
//! A calendar knows which dates are business days and can move dates
//! according to a [`BusinessDayConvention`]. Date arithmetic is checked, so
//! walking off either end of the supported range is an error rather than a
//! panic.

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use crate::holidays::HolidayCalendar;
use xt_core::errors::Result;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"United States (Federal)"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a non-business day (weekend or holiday).
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a weekend according to this calendar.
    fn is_weekend(&self, date: Date) -> bool {
        date.is_weekend()
    }

    /// Move `date` one day at a time in direction `step` until it lands on a
    /// business day.
    fn roll(&self, mut date: Date, step: i32) -> Result<Date> {
        while self.is_holiday(date) {
            date = date.add_days(step)?;
        }
        Ok(date)
    }

    /// Adjust `date` according to the given business-day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        use BusinessDayConvention::*;
        match convention {
            Unadjusted => Ok(date),
            Following => self.roll(date, 1),
            Preceding => self.roll(date, -1),
            ModifiedFollowing => {
                let adjusted = self.roll(date, 1)?;
                if adjusted.month() == date.month() {
                    Ok(adjusted)
                } else {
                    self.roll(date, -1)
                }
            }
            ModifiedPreceding => {
                let adjusted = self.roll(date, -1)?;
                if adjusted.month() == date.month() {
                    Ok(adjusted)
                } else {
                    self.roll(date, 1)
                }
            }
            Nearest => {
                let fwd = self.roll(date, 1)?;
                let bwd = self.roll(date, -1)?;
                // Ties go forward.
                if fwd - date <= date - bwd {
                    Ok(fwd)
                } else {
                    Ok(bwd)
                }
            }
        }
    }

    /// Advance `date` by `n` business days (backwards when `n < 0`).
    fn advance_business_days(&self, mut date: Date, n: i32) -> Result<Date> {
        let step = n.signum();
        for _ in 0..n.unsigned_abs() {
            date = date.add_days(step)?;
            date = self.roll(date, step)?;
        }
        Ok(date)
    }

    /// Count the business days between `d1` (exclusive) and `d2`
    /// (inclusive).  Negative if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        let (start, end, sign) = if d2 >= d1 { (d1, d2, 1) } else { (d2, d1, -1) };
        let count = (start.serial() + 1..=end.serial())
            .filter_map(|serial| Date::from_serial(serial).ok())
            .filter(|d| self.is_business_day(*d))
            .count() as i32;
        sign * count
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        self.display_name()
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday_date(date)
    }
}
