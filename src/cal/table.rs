//! Days-per-month data and the leap year rule.


/// The number of days elapsed in a common year before the start of each
/// month, plus a final entry for the whole year. Month *m* (1-indexed)
/// spans `DAYS_BEFORE[m - 1] .. DAYS_BEFORE[m]`.
const DAYS_BEFORE: [i16; 13] = [
    0,
    31,
    31 + 28,
    31 + 28 + 31,
    31 + 28 + 31 + 30,
    31 + 28 + 31 + 30 + 31,
    31 + 28 + 31 + 30 + 31 + 30,
    31 + 28 + 31 + 30 + 31 + 30 + 31,
    31 + 28 + 31 + 30 + 31 + 30 + 31 + 31,
    31 + 28 + 31 + 30 + 31 + 30 + 31 + 31 + 30,
    31 + 28 + 31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,
    31 + 28 + 31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,
    31 + 28 + 31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,
];

/// Returns whether the given year is a leap year in the proleptic
/// Gregorian calendar.
///
/// ```
/// use civiltime::is_leap;
///
/// assert!(is_leap(2000));
/// assert!(!is_leap(1900));
/// ```
pub fn is_leap(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given month (1 to 12) of the given
/// year.
///
/// # Panics
///
/// Panics if `month` is not within `1 ..= 12`. Callers check the month
/// first; see `is_valid_date`.
pub fn days_in(month: i8, year: i64) -> i8 {
    if month == 2 && is_leap(year) {
        return 29;
    }

    let m = month as usize;
    (DAYS_BEFORE[m] - DAYS_BEFORE[m - 1]) as i8
}

/// Returns the number of days in a common year before the given month
/// (1 to 12) begins.
pub(crate) fn days_before(month: i8) -> i16 {
    DAYS_BEFORE[month as usize - 1]
}

/// Returns whether the year, month, and day numbers name a real day.
pub(crate) fn is_valid_date(year: i64, month: i64, day: i64) -> bool {
    month > 0 && month < 13 && day > 0 && day <= days_in(month as i8, year) as i64
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap(2024));
        assert!(is_leap(2000));
        assert!(is_leap(1600));
        assert!(!is_leap(1900));
        assert!(!is_leap(2023));
        assert!(!is_leap(2100));
    }

    #[test]
    fn negative_leap_years() {
        assert!(is_leap(0));
        assert!(is_leap(-4));
        assert!(!is_leap(-100));
        assert!(is_leap(-400));
    }

    #[test]
    fn february() {
        assert_eq!(days_in(2, 2024), 29);
        assert_eq!(days_in(2, 2023), 28);
        assert_eq!(days_in(2, 1900), 28);
    }

    #[test]
    fn other_months() {
        assert_eq!(days_in(4, 2023), 30);
        assert_eq!(days_in(7, 2023), 31);
        assert_eq!(days_in(12, 2023), 31);
        assert_eq!(days_in(1, 2023), 31);
    }

    #[test]
    fn a_whole_year() {
        let total: i64 = (1 ..= 12).map(|m| days_in(m, 2023) as i64).sum();
        assert_eq!(total, 365);

        let leap_total: i64 = (1 ..= 12).map(|m| days_in(m, 2024) as i64).sum();
        assert_eq!(leap_total, 366);
    }

    #[test]
    fn validity() {
        assert!(is_valid_date(2024, 2, 29));
        assert!(!is_valid_date(2023, 2, 29));
        assert!(!is_valid_date(2024, 13, 1));
        assert!(!is_valid_date(2024, 0, 1));
        assert!(!is_valid_date(2024, 4, 31));
        assert!(!is_valid_date(2024, 4, 0));
    }

    #[test]
    fn days_before_months() {
        assert_eq!(days_before(1), 0);
        assert_eq!(days_before(3), 59);
        assert_eq!(days_before(12), 334);
    }
}
