//! The façade exposes every crate and the common entry points.

use extendkit::core::ScopedEvaluationInstant;
use extendkit::time::{clock, good_friday, BusinessDayConvention, UnitedStatesFederal};
use extendkit::{
    easter_sunday, extract_arguments, is_christmas_eve, Calendar, ComparisonMode, Date,
    HolidayCalendar, Month, Weekday,
};

#[test]
fn christmas_eve_afternoon_from_pinned_clock() {
    // 2023-12-24T18:30:00Z is 13:30 in New York.
    let _pin = ScopedEvaluationInstant::new(1_703_442_600);
    let now = clock::now().unwrap();
    assert_eq!(now.short_date_time(), "12/24/2023 1:30 PM");
    assert!(is_christmas_eve(now));
}

#[test]
fn observed_holiday_is_not_a_business_day() {
    let cal = UnitedStatesFederal;
    let observed = Date::from_ymd(2026, 7, 3).unwrap();
    assert_eq!(observed.weekday(), Weekday::Friday);
    assert!(HolidayCalendar::federal().is_holiday_date(observed));
    assert!(!cal.is_business_day(observed));
    assert_eq!(
        cal.adjust(observed, BusinessDayConvention::Following).unwrap(),
        Date::from_ymd(2026, 7, 6).unwrap()
    );
}

#[test]
fn easter_and_good_friday() {
    let easter = easter_sunday(2025);
    assert_eq!((easter.month(), easter.day()), (Month::April, 20));
    assert_eq!(good_friday(2025).unwrap(), Date::from_ymd(2025, 4, 18).unwrap());
}

#[test]
fn template_extraction() {
    let args = extract_arguments(
        "My name is Aleksey Nagovitsyn. I'm from Russia.",
        "My name is {1} {0}. I'm from {2}.",
        ComparisonMode::Default,
    )
    .unwrap();
    assert_eq!(args, ["Nagovitsyn", "Aleksey", "Russia"]);
}
