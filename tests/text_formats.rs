use civiltime::{LocalDate, LocalTime, LocalDateTime, Month, Offset};


mod dates {
    use super::*;

    #[test]
    fn four_digit_years() {
        let date = LocalDate::ymd(7, Month::March, 9).unwrap();
        assert_eq!(date.to_string(), "0007-03-09");
    }

    #[test]
    fn years_outside_four_digits() {
        assert_eq!(LocalDate::ymd(-1, Month::January, 1).unwrap().to_string(), "-0001-01-01");
        assert_eq!(LocalDate::ymd(12345, Month::June, 30).unwrap().to_string(), "+12345-06-30");
    }

    #[test]
    fn debug() {
        let date = LocalDate::ymd(2024, Month::July, 4).unwrap();
        assert_eq!(format!("{:?}", date), "LocalDate(2024-07-04)");
    }
}


mod times {
    use super::*;

    #[test]
    fn whole_seconds() {
        assert_eq!(LocalTime::hms(9, 5, 0).unwrap().to_string(), "09:05:00");
    }

    #[test]
    fn fraction_without_precision_is_trimmed() {
        let time = LocalTime::hms_ns(9, 5, 0, 120_000_000).unwrap();
        assert_eq!(time.to_string(), "09:05:00.12");
    }

    #[test]
    fn precision_pads_and_truncates() {
        let time = LocalTime::hms_ns(9, 5, 0, 120_000_000).unwrap();
        assert_eq!(time.with_precision(6).unwrap().to_string(), "09:05:00.120000");
        assert_eq!(time.with_precision(1).unwrap().to_string(), "09:05:00.1");
    }

    #[test]
    fn precision_with_no_fraction() {
        let time = LocalTime::hms(23, 59, 59).unwrap().with_precision(3).unwrap();
        assert_eq!(time.to_string(), "23:59:59.000");
    }

    #[test]
    fn leap_second() {
        assert_eq!(LocalTime::hms(23, 59, 60).unwrap().to_string(), "23:59:60");
    }
}


mod datetimes {
    use super::*;

    #[test]
    fn joined_with_t() {
        let date = LocalDate::ymd(1969, Month::July, 20).unwrap();
        let time = LocalTime::hms(20, 17, 40).unwrap();
        assert_eq!(LocalDateTime::new(date, time).to_string(), "1969-07-20T20:17:40");
    }

    #[test]
    fn debug() {
        let dt: LocalDateTime = "2000-01-01T00:00:00.5".parse().unwrap();
        assert_eq!(format!("{:?}", dt), "LocalDateTime(2000-01-01T00:00:00.5)");
    }
}


mod offsets {
    use super::*;

    #[test]
    fn utc() {
        assert_eq!(Offset::utc().to_string(), "Z");
    }

    #[test]
    fn hours_only() {
        assert_eq!(Offset::of_hours_and_minutes(1, 0).unwrap().to_string(), "+01");
    }

    #[test]
    fn negative_with_minutes() {
        assert_eq!(Offset::of_hours_and_minutes(-9, -30).unwrap().to_string(), "-09:30");
    }

    #[test]
    fn with_seconds() {
        assert_eq!(Offset::of_seconds(-(25 * 60 + 21)).unwrap().to_string(), "-00:25:21");
    }
}
