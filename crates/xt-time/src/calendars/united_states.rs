//! United States federal calendar.
//!
//! Business days are weekdays that are not federal holidays (observed
//! Friday/Monday shifts included). This is the allocation-free counterpart
//! of [`HolidayCalendar::federal`](crate::holidays::HolidayCalendar::federal).

use crate::calendar::Calendar;
use crate::date::Date;
use crate::holidays::{federal_holiday_on, FederalHoliday};

/// United States: federal holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedStatesFederal;

impl UnitedStatesFederal {
    /// The federal holiday observed on `date`, if any.
    pub fn holiday_on(&self, date: Date) -> Option<FederalHoliday> {
        federal_holiday_on(date)
    }
}

impl Calendar for UnitedStatesFederal {
    fn name(&self) -> &str {
        "US (Federal)"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && federal_holiday_on(date).is_none()
    }
}
