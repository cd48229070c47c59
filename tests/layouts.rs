#![cfg(feature="format")]

use civiltime::{LocalDate, LocalTime, LocalDateTime, Error};
use civiltime::fmt::{DateFormat, ReadError};


fn english() -> locale::Time {
    locale::Time::english()
}


#[test]
fn written_then_read() {
    let layout = "{_:E} {:D} {_:M} {:Y}, {02>:h}:{02>:m}";
    let dt: LocalDateTime = "1989-11-09T18:53:00".parse().unwrap();

    let text = DateFormat::parse(layout).unwrap().format(&dt, &english());
    assert_eq!(text, "Thursday 9 November 1989, 18:53");
    assert_eq!(LocalDateTime::from_text(&text, layout), Ok(dt));
}

#[test]
fn american_dates() {
    assert_eq!(LocalDate::from_text("07/04/76", "{02>:n}/{02>:D}/{:y}"),
               LocalDate::from_ymd(1976, 7, 4));
}

#[test]
fn missing_fields_default() {
    let date = LocalDate::from_text("March 2020", "{_:M} {:Y}").unwrap();
    assert_eq!(date.to_string(), "2020-03-01");

    let time = LocalTime::from_text("14h", "{:h}h").unwrap();
    assert_eq!(time.to_string(), "14:00:00");
}

#[test]
fn case_is_ignored_in_names() {
    assert_eq!(LocalDate::from_text("1 JAN 2000", "{:D} {:M} {:Y}"),
               LocalDate::from_ymd(2000, 1, 1));
}

#[test]
fn fractions_keep_their_width() {
    let time = LocalTime::from_text("12:00:00.050", "{:h}:{:m}:{:s}.{:f}").unwrap();
    assert_eq!(time.to_string(), "12:00:00.050");
}

#[test]
fn mismatches() {
    assert_eq!(LocalDate::from_default_text("2024-03-07!"),
               Err(Error::Layout(ReadError::Trailing { pos: 10 })));
    assert!(LocalDateTime::from_default_text("2024-03-07T08:00:00").is_err());
}
