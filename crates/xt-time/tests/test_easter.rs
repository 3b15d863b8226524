//! Gauss Easter: pinned reference years and agreement with the anonymous
//! Gregorian algorithm where both are exact.

use proptest::prelude::*;
use xt_time::{easter_sunday, Date, Month, Weekday};

/// Anonymous Gregorian ("Meeus/Jones/Butcher") algorithm, as (month, day).
fn meeus(y: i32) -> (u8, u8) {
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    (month as u8, day as u8)
}

#[test]
fn pinned_years() {
    let expected = [
        (1583, Month::April, 10),
        (1818, Month::March, 22),
        (1943, Month::April, 25),
        (1961, Month::April, 2),
        (2000, Month::April, 23),
        (2008, Month::March, 23),
        (2011, Month::April, 24),
        (2024, Month::March, 31),
        (2025, Month::April, 20),
        (2038, Month::April, 25),
        (2285, Month::March, 22),
    ];
    for (year, month, day) in expected {
        let e = easter_sunday(year);
        assert_eq!((e.month(), e.day()), (month, day), "Easter {year}");
        assert_eq!(e.year(), year);
    }
}

#[test]
fn known_divergent_years_keep_gauss_result() {
    // The simplified Gauss rule differs from the exact computus here.
    let e = easter_sunday(1666);
    assert_eq!((e.month(), e.day()), (Month::April, 18));
    let e = easter_sunday(2258);
    assert_eq!((e.month(), e.day()), (Month::April, 18));
}

#[test]
fn converts_to_date() {
    let d = easter_sunday(2024).to_date().unwrap();
    assert_eq!(d, Date::from_ymd(2024, 3, 31).unwrap());
    assert_eq!(easter_sunday(2024).to_string(), "31 March 2024");
}

proptest! {
    #[test]
    fn agrees_with_meeus(year in 1667i32..=2257) {
        let e = easter_sunday(year);
        prop_assert_eq!((e.month().number(), e.day()), meeus(year));
    }

    #[test]
    fn always_a_sunday_between_march_22_and_april_25(year in 1583i32..=9999) {
        let e = easter_sunday(year);
        let d = e.to_date().unwrap();
        prop_assert_eq!(d.weekday(), Weekday::Sunday);
        let md = (e.month().number(), e.day());
        prop_assert!(md >= (3, 22) && md <= (4, 25), "{:?}", md);
    }

    #[test]
    fn any_integer_year_is_accepted(year in any::<i32>()) {
        let e = easter_sunday(year);
        prop_assert!(matches!(e.month(), Month::March | Month::April));
        prop_assert!((1..=31).contains(&e.day()));
    }
}
