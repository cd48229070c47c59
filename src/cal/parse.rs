//! Strict readers for the canonical text forms `YYYY-MM-DD`,
//! `HH:MM:SS[.fraction]`, and the two joined by `T`, `t`, or a space.
//!
//! These work on bytes, check every position, and never guess. The more
//! forgiving entry points live in `iso` and `fmt::custom`.

use std::str::FromStr;

use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Error};
use crate::cal::table;


fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn byte(b: u8) -> String {
    char::from(b).to_string()
}


/// Reads every byte of the slice as a base-10 digit.
///
/// ```
/// use civiltime::parse::parse_decimal_digits;
///
/// assert_eq!(parse_decimal_digits(b"2024"), Ok(2024));
/// assert!(parse_decimal_digits(b"20x4").is_err());
/// ```
pub fn parse_decimal_digits(bytes: &[u8]) -> Result<i64, Error> {
    let mut value = 0;

    for &b in bytes {
        if !b.is_ascii_digit() {
            return Err(Error::InvalidDigit(byte(b)));
        }

        value = value * 10 + i64::from(b - b'0');
    }

    Ok(value)
}

/// Reads a date from exactly ten bytes of `YYYY-MM-DD`.
pub fn parse_local_date(bytes: &[u8]) -> Result<LocalDate, Error> {
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(Error::MalformedDate(text(bytes)));
    }

    let year  = parse_decimal_digits(&bytes[0..4])?;
    let month = parse_decimal_digits(&bytes[5..7])?;
    let day   = parse_decimal_digits(&bytes[8..10])?;

    if !table::is_valid_date(year, month, day) {
        return Err(Error::ImpossibleDate(text(bytes)));
    }

    LocalDate::from_ymd(year, month as i8, day as i8)
}

/// Reads a time from the start of the bytes, returning it along with
/// whatever follows it.
///
/// Up to nine fraction digits are kept; any more are read past but
/// dropped, so the fraction is truncated rather than rounded. The time
/// remembers how many digits it kept as its precision.
///
/// ```
/// use civiltime::{LocalTime, TimePiece};
/// use civiltime::parse::parse_local_time;
///
/// let (time, rest) = parse_local_time(b"12:34:56.789Z").unwrap();
/// assert_eq!(time.nanosecond(), 789_000_000);
/// assert_eq!(time.precision(), 3);
/// assert_eq!(rest, b"Z");
/// ```
pub fn parse_local_time(bytes: &[u8]) -> Result<(LocalTime, &[u8]), Error> {
    if bytes.len() < 8 {
        return Err(Error::MalformedTime(text(bytes)));
    }

    let hour = parse_decimal_digits(&bytes[0..2])?;
    if hour > 23 {
        return Err(Error::InvalidHour(text(&bytes[0..2])));
    }
    if bytes[2] != b':' {
        return Err(Error::MalformedTime(byte(bytes[2])));
    }

    let minute = parse_decimal_digits(&bytes[3..5])?;
    if minute > 59 {
        return Err(Error::InvalidMinute(text(&bytes[3..5])));
    }
    if bytes[5] != b':' {
        return Err(Error::MalformedTime(byte(bytes[5])));
    }

    let second = parse_decimal_digits(&bytes[6..8])?;
    if second > 60 {
        return Err(Error::InvalidSecond(text(&bytes[6..8])));
    }

    let mut rest = &bytes[8..];
    let mut nanosecond = 0;
    let mut precision = 0;

    if rest.first() == Some(&b'.') {
        let digits = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            return Err(Error::MalformedFraction(text(bytes)));
        }

        let kept = digits.min(9);
        nanosecond = parse_decimal_digits(&rest[1 .. 1 + kept])? * 10_i64.pow(9 - kept as u32);
        precision = kept as u8;
        rest = &rest[1 + digits ..];
    }

    let time = LocalTime::hms_ns(hour as i8, minute as i8, second as i8, nanosecond as i32)?
                         .with_precision(precision)?;
    Ok((time, rest))
}

/// Reads a date and a time joined by `T`, `t`, or a space, returning the
/// date-time along with whatever follows the time.
pub fn parse_local_date_time(bytes: &[u8]) -> Result<(LocalDateTime, &[u8]), Error> {
    if bytes.len() < 11 {
        return Err(Error::MalformedDateTime(text(bytes)));
    }

    let date = parse_local_date(&bytes[..10])?;

    match bytes[10] {
        b'T' | b't' | b' ' => {},
        other              => return Err(Error::MalformedSeparator(byte(other))),
    }

    let (time, rest) = parse_local_time(&bytes[11..])?;
    Ok((LocalDateTime::new(date, time), rest))
}

fn nothing_left(rest: &[u8]) -> Result<(), Error> {
    if rest.is_empty() {
        Ok(())
    }
    else {
        Err(Error::TrailingCharacters(text(rest)))
    }
}


impl FromStr for LocalDate {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_local_date(input.as_bytes())
    }
}

impl FromStr for LocalTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (time, rest) = parse_local_time(input.as_bytes())?;
        nothing_left(rest)?;
        Ok(time)
    }
}

impl FromStr for LocalDateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (datetime, rest) = parse_local_date_time(input.as_bytes())?;
        nothing_left(rest)?;
        Ok(datetime)
    }
}
