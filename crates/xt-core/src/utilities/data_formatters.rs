//! Small number formatting helpers.
//!
//! Used when rendering holiday rules (`"3rd Monday of January"`) and
//! fixed-width date fields.

/// Return the English ordinal suffix for `n` (e.g. `1` → `"st"`, `2` → `"nd"`).
pub fn ordinal_suffix(n: u32) -> &'static str {
    match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Format a number with its ordinal suffix (e.g. `1` → `"1st"`, `22` → `"22nd"`).
pub fn format_ordinal(n: u32) -> String {
    format!("{n}{}", ordinal_suffix(n))
}

/// Zero-pad `n` to two digits (`7` → `"07"`).
pub fn pad_two(n: u32) -> String {
    format!("{n:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ordinal() {
        assert_eq!(format_ordinal(1), "1st");
        assert_eq!(format_ordinal(2), "2nd");
        assert_eq!(format_ordinal(3), "3rd");
        assert_eq!(format_ordinal(4), "4th");
        assert_eq!(format_ordinal(11), "11th");
        assert_eq!(format_ordinal(12), "12th");
        assert_eq!(format_ordinal(13), "13th");
        assert_eq!(format_ordinal(21), "21st");
        assert_eq!(format_ordinal(22), "22nd");
        assert_eq!(format_ordinal(111), "111th");
    }

    #[test]
    fn test_pad_two() {
        assert_eq!(pad_two(7), "07");
        assert_eq!(pad_two(31), "31");
    }

    proptest! {
        #[test]
        fn ordinal_keeps_number_and_teens_use_th(n in 0u32..1_000_000) {
            let s = format_ordinal(n);
            prop_assert!(s.starts_with(&n.to_string()));
            prop_assert_eq!(s.len(), n.to_string().len() + 2);
            if (11..=13).contains(&(n % 100)) {
                prop_assert!(s.ends_with("th"));
            }
        }
    }
}
