use civiltime::{LocalDate, LocalTime, LocalDateTime, Error};
use civiltime::{DatePiece, TimePiece};
use civiltime::parse::{parse_local_date, parse_local_time, parse_local_date_time};


mod strict {
    use super::*;

    #[test]
    fn dates_round_trip() {
        for text in &["0001-01-01", "1969-07-20", "2000-02-29", "9999-12-31"] {
            let date: LocalDate = text.parse().unwrap();
            assert_eq!(&date.to_string(), text);
        }
    }

    #[test]
    fn date_errors() {
        assert_eq!(parse_local_date(b"2024-02-30"), Err(Error::ImpossibleDate("2024-02-30".into())));
        assert_eq!(parse_local_date(b"2024-13-01"), Err(Error::ImpossibleDate("2024-13-01".into())));
        assert_eq!(parse_local_date(b"2024/02/01"), Err(Error::MalformedDate("2024/02/01".into())));
        assert_eq!(parse_local_date(b"2024-0a-01"), Err(Error::InvalidDigit("a".into())));
    }

    #[test]
    fn times_round_trip() {
        let time: LocalTime = "12:34:56.789".parse().unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (12, 34, 56));
        assert_eq!((time.nanosecond(), time.precision()), (789_000_000, 3));
        assert_eq!(time.to_string(), "12:34:56.789");

        let time: LocalTime = "12:34:56".parse().unwrap();
        assert_eq!(time.to_string(), "12:34:56");
    }

    #[test]
    fn trailing_zeros_are_kept() {
        let time: LocalTime = "00:00:00.100".parse().unwrap();
        assert_eq!(time.to_string(), "00:00:00.100");
    }

    #[test]
    fn time_errors() {
        assert_eq!("24:00:00".parse::<LocalTime>(), Err(Error::InvalidHour("24".into())));
        assert_eq!("12:60:00".parse::<LocalTime>(), Err(Error::InvalidMinute("60".into())));
        assert_eq!("12:00:00,5".parse::<LocalTime>(), Err(Error::TrailingCharacters(",5".into())));
    }

    #[test]
    fn time_leaves_a_remainder() {
        let (time, rest) = parse_local_time(b"09:00:00-05:00").unwrap();
        assert_eq!(time, LocalTime::hms(9, 0, 0).unwrap());
        assert_eq!(rest, b"-05:00");
    }

    #[test]
    fn datetime_separators() {
        for text in &["2024-01-01T12:00:00", "2024-01-01 12:00:00", "2024-01-01t12:00:00"] {
            let dt: LocalDateTime = text.parse().unwrap();
            assert_eq!(dt.to_string(), "2024-01-01T12:00:00");
        }

        assert_eq!("2024-01-01X12:00:00".parse::<LocalDateTime>(), Err(Error::MalformedSeparator("X".into())));
    }

    #[test]
    fn datetime_remainder() {
        let (dt, rest) = parse_local_date_time(b"2024-01-01T12:00:00.5Z").unwrap();
        assert_eq!(dt.nanosecond(), 500_000_000);
        assert_eq!(rest, b"Z");
    }

    #[test]
    fn errors_name_what_was_wrong() {
        let error = "2024-02-30".parse::<LocalDate>().unwrap_err();
        assert!(error.to_string().contains("2024-02-30"));

        let error = "1x:00:00".parse::<LocalTime>().unwrap_err();
        assert!(error.to_string().contains("\"x\""));
    }
}


#[cfg(feature="parse")]
mod lenient {
    use super::*;

    #[test]
    fn week_dates() {
        let cases = [
            ("2001-W05-6", (2001, 2, 3)),
            ("2002-W05-6", (2002, 2, 2)),
            ("2003-W05-6", (2003, 2, 1)),
            ("2015-W26-5", (2015, 6, 26)),
        ];

        for &(text, (y, m, d)) in cases.iter() {
            let date = LocalDate::from_iso(text).unwrap();
            assert_eq!((date.year(), date.month() as i8, date.day()), (y, m, d), "{}", text);
        }
    }

    #[test]
    fn datetimes() {
        let cases = [
            ("2001-02-03T04:05:06+07:00",  "2001-02-03T04:05:06"),
            ("20010203T040506+0700",       "2001-02-03T04:05:06"),
            ("2001-W05-6T04:05:06.123Z",   "2001-02-03T04:05:06.123"),
            ("2015-06-26T22:57:09Z",       "2015-06-26T22:57:09"),
        ];

        for &(text, expected) in cases.iter() {
            assert_eq!(LocalDateTime::from_iso(text).unwrap().to_string(), expected, "{}", text);
        }
    }

    #[test]
    fn rejects_nonsense() {
        assert!(LocalDateTime::from_iso("2015-06-26TZ").is_err());
        assert!(LocalDateTime::from_iso("yesterday at noon").is_err());
    }
}
