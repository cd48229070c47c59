//! Dates, times, datetimes, months, and weekdays.

use std::cmp::Ordering;
use std::error::Error as ErrorTrait;
use std::fmt;
use std::ops::{Add, Sub};

use crate::cal::{DatePiece, TimePiece};
use crate::cal::offset::Offset;
use crate::cal::table;
use crate::duration::Duration;
use crate::instant::Instant;
use crate::util::RangeExt;

use self::Month::*;
use self::Weekday::*;


/// A single year.
///
/// This is just a wrapper around `i64` that performs year-related tests.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Year(pub i64);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civiltime::Year;
    ///
    /// assert_eq!(Year(2000).is_leap_year(), true);
    /// assert_eq!(Year(1900).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(self) -> bool {
        table::is_leap(self.0)
    }

    /// Performs two related calculations for leap years, returning the
    /// results as a two-part tuple:
    ///
    /// 1. The number of leap years that have elapsed prior to this year;
    /// 2. Whether this year is a leap year or not.
    fn leap_year_calculations(self) -> (i64, bool) {
        let year = self.0 - 2000;

        // This calculation is the reverse of LocalDate::from_days_since_epoch.
        let (num_400y_cycles, mut remainder) = split_cycles(year, 400);

        // Standard leap-year calculations, performed on the remainder
        let currently_leap_year = remainder == 0 || (remainder % 100 != 0 && remainder % 4 == 0);

        let num_100y_cycles = remainder / 100;
        remainder -= num_100y_cycles * 100;

        let leap_years_elapsed = remainder / 4
            + 97 * num_400y_cycles  // There are 97 leap years in 400 years
            + 24 * num_100y_cycles  // There are 24 leap years in 100 years
            - if currently_leap_year { 1 } else { 0 };

        (leap_years_elapsed, currently_leap_year)
    }
}


static MONTHS: &[Month] = &[
    January,  February,  March,
    April,    May,       June,
    July,     August,    September,
    October,  November,  December,
];


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y:   i64 = 365 *   4 +  1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// The earliest year a date can be built with.
pub const MIN_YEAR: i64 = -9_999_999;

/// The latest year a date can be built with.
pub const MAX_YEAR: i64 = 9_999_999;

/// Number of seconds in a day. Leap seconds are ignored.
pub(crate) const SECONDS_IN_DAY: i64 = 86400;


/// Number of days between **1st January, 1970** and **1st March, 2000**.
///
/// Having the reference point immediately after a possible leap day, at
/// the start of a 400-year cycle, reduces the day/month/year calculations
/// to simple division. It is never exposed: instants count from 1970.
const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                            + 7          // plus seven days for leap years...
                            + 31 + 29;   // plus all the days in January and February in 2000.


/// The number of days elapsed at the end of each month, starting at the
/// beginning of March (the first month after the EPOCH above), going
/// backwards, ignoring February.
const TIME_TRIANGLE: &[i64; 11] =
    &[31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31 + 31,  // January
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,  // December
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,  // November
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,  // October
      31 + 30 + 31 + 30 + 31 + 31 + 30,  // September
      31 + 30 + 31 + 30 + 31 + 31,  // August
      31 + 30 + 31 + 30 + 31,  // July
      31 + 30 + 31 + 30,  // June
      31 + 30 + 31,  // May
      31 + 30,  // April
      31]; // March



/// A **local date** is a day-long span on the timeline, *without a time
/// zone*.
///
/// A `LocalDate` always names a real day of the proleptic Gregorian
/// calendar: every constructor checks its fields, and every arithmetic
/// method normalises its result.
#[derive(Eq, Clone, Copy)]
pub struct LocalDate {
    ymd:     YMD,
    yearday: i16,
    weekday: Weekday,
}

/// A **local time** is a time on the timeline that recurs once a day,
/// *without a time zone*.
///
/// Besides the time itself, it remembers how many fractional-second digits
/// it should be written out with. Two times that differ only in precision
/// are not `==`, but they do `compare` as equal.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct LocalTime {
    hour:   i8,
    minute: i8,
    second: i8,
    nanosecond: i32,
    precision:  u8,
}

/// A **local date-time** is an exact instant on the timeline, *without a
/// time zone*.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}


impl LocalDate {

    /// Creates a new local date instance from the given year, month, and day
    /// fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use civiltime::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::ymd(1969, Month::July, 20).unwrap();
    /// assert_eq!(date.year(), 1969);
    /// assert_eq!(date.month(), Month::July);
    /// assert_eq!(date.day(), 20);
    ///
    /// assert!(LocalDate::ymd(2100, Month::February, 29).is_err());
    /// ```
    pub fn ymd(year: i64, month: Month, day: i8) -> Result<Self, Error> {
        YMD { year, month, day }
            .to_days_since_epoch()
            .map(|days| Self::from_days_since_epoch(days - EPOCH_DIFFERENCE))
    }

    /// Creates a new local date from plain year, month, and day numbers,
    /// with January as month 1.
    ///
    /// Numbers that do not name a real day fail with
    /// `Error::ImpossibleDate`.
    pub fn from_ymd(year: i64, month: i8, day: i8) -> Result<Self, Error> {
        if !table::is_valid_date(year, month as i64, day as i64) {
            return Err(Error::ImpossibleDate(format!("{:04}-{:02}-{:02}", year, month, day)));
        }

        Self::ymd(year, MONTHS[month as usize - 1], day)
    }

    /// Creates a new local date instance from the given year and day-of-year
    /// values.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use civiltime::{LocalDate, Month, DatePiece};
    ///
    /// let date = LocalDate::yd(2015, 0x100).unwrap();
    /// assert_eq!(date.year(), 2015);
    /// assert_eq!(date.month(), Month::September);
    /// assert_eq!(date.day(), 13);
    /// ```
    pub fn yd(year: i64, yearday: i64) -> Result<Self, Error> {
        let days_in_year = if Year(year).is_leap_year() { 366 } else { 365 };

        if yearday.is_within(1 .. days_in_year + 1) {
            let jan_1 = YMD { year, month: January, day: 1 };
            let days = jan_1.to_days_since_epoch()?;
            Ok(Self::from_days_since_epoch(days + yearday - 1 - EPOCH_DIFFERENCE))
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Creates a new local date instance from the given year, week-of-year,
    /// and weekday values.
    ///
    /// According to ISO-8601, the year changes when working with dates
    /// early in week 1, or late in week 53:
    ///
    /// ```rust
    /// use civiltime::{LocalDate, Weekday, Month, DatePiece};
    ///
    /// let date = LocalDate::ywd(2009, 1, Weekday::Monday).unwrap();
    /// assert_eq!(date.year(), 2008);
    /// assert_eq!(date.month(), Month::December);
    /// assert_eq!(date.day(), 29);
    /// ```
    pub fn ywd(year: i64, week: i64, weekday: Weekday) -> Result<Self, Error> {
        let jan_4 = YMD { year, month: January, day: 4 };
        let correction = days_to_weekday(jan_4.to_days_since_epoch()? - EPOCH_DIFFERENCE).days_from_monday_as_one() as i64 + 3;

        let yearday = week.checked_mul(7).ok_or(Error::OutOfRange)?
                    + weekday.days_from_monday_as_one() as i64 - correction;

        if yearday <= 0 {
            let days_in_year = if Year(year - 1).is_leap_year() { 366 } else { 365 };
            Self::yd(year - 1, days_in_year + yearday)
        }
        else {
            let days_in_year = if Year(year).is_leap_year() { 366 } else { 365 };

            if yearday > days_in_year {
                Self::yd(year + 1, yearday - days_in_year)
            }
            else {
                Self::yd(year, yearday)
            }
        }
    }

    /// Returns the date of the given instant, as seen at the given offset.
    pub fn from_instant(instant: Instant, offset: Offset) -> Self {
        LocalDateTime::from_instant(instant, offset).date
    }

    /// Returns today’s date, as seen at the given offset.
    pub fn now(offset: Offset) -> Self {
        Self::from_instant(Instant::now(), offset)
    }

    /// Returns the instant at which this date starts, midnight, at the
    /// given offset.
    pub fn to_instant(&self, offset: Offset) -> Instant {
        LocalDateTime::new(*self, LocalTime::midnight()).to_instant(offset)
    }

    /// Computes a LocalDate - year, month, day, weekday, and yearday -
    /// given the number of days that have passed since the EPOCH.
    ///
    /// This is used by all the other constructor functions.
    fn from_days_since_epoch(days: i64) -> Self {

        // The Gregorian calendar works in 400-year cycles, which repeat
        // themselves ever after.
        //
        // This calculation works by finding the number of 400-year,
        // 100-year, and 4-year cycles, then constantly subtracting the
        // number of leftover days.
        let (num_400y_cycles, mut remainder) = split_cycles(days, DAYS_IN_400Y);

        // The last day of a 400-year cycle is a leap day, which would
        // otherwise count as a fifth 100-year cycle.
        let num_100y_cycles = std::cmp::min(remainder / DAYS_IN_100Y, 3);
        remainder -= num_100y_cycles * DAYS_IN_100Y;  // remainder is now days left in this 100-year cycle

        let num_4y_cycles = remainder / DAYS_IN_4Y;
        remainder -= num_4y_cycles * DAYS_IN_4Y;  // remainder is now days left in this 4-year cycle

        let mut years = std::cmp::min(remainder / 365, 3);
        remainder -= years * 365;  // remainder is now days left in this year

        // The cycle counts above already say whether this is a leap year:
        // the first year of a 4-year cycle is one, unless it also starts a
        // 100-year cycle that isn’t the start of a 400-year one.
        let days_this_year =
            if years == 0 && !(num_4y_cycles == 0 && num_100y_cycles != 0) { 366 }
                                                                      else { 365 };

        // The 306 here refers to the number of days in a year excluding
        // January and February (which are excluded because of the EPOCH)
        let mut day_of_year = remainder + days_this_year - 306;
        if day_of_year >= days_this_year {
            day_of_year -= days_this_year;  // wrap around for January and February
        }

        years +=   4 * num_4y_cycles
               + 100 * num_100y_cycles
               + 400 * num_400y_cycles;

        // Scan the time triangle for the month that has the correct number
        // of days elapsed at the end of it.
        // (it’s “11 - index” below because the triangle goes backwards)
        let result = TIME_TRIANGLE.iter()
                                  .enumerate()
                                  .find(|&(_, days)| *days <= remainder);

        let (mut month, month_days) = match result {
            Some((index, days)) => (11 - index, remainder - *days),
            None => (0, remainder),  // No month found? Then it’s February.
        };

        // Add 2 to compensate for the EPOCH being in March.
        month += 2;

        if month >= 12 {
            years += 1;   // wrap around for January and February
            month -= 12;  // (yes, again)
        }

        Self {
            yearday: (day_of_year + 1) as i16,
            weekday: days_to_weekday(days),
            ymd: YMD {
                year:  years + 2000,
                month: MONTHS[month],
                day:   (month_days + 1) as i8,
            },
        }
    }

    /// The number of days between the Unix epoch and this date.
    pub(crate) fn days_since_unix_epoch(&self) -> i64 {
        self.ymd.days_since_epoch_unchecked()
    }

    /// Shifts this date by the given numbers of years, months, and days,
    /// letting any day past the end of a month spill over into the next one
    /// rather than clamping it.
    ///
    /// Fails with `Error::OutOfRange` when the result would fall outside
    /// `MIN_YEAR ..= MAX_YEAR`.
    fn add_calendar(&self, years: i64, months: i64, days: i64) -> Result<Self, Error> {
        let months_since_year_zero = years.checked_mul(12)
            .and_then(|m| m.checked_add(months))
            .and_then(|m| m.checked_add(self.ymd.year.checked_mul(12)?))
            .and_then(|m| m.checked_add(self.ymd.month.months_from_january() as i64))
            .ok_or(Error::OutOfRange)?;

        let (year, month_index) = split_cycles(months_since_year_zero, 12);
        if !is_supported_year(year) {
            return Err(Error::OutOfRange);
        }

        let first_of_month = YMD { year, month: MONTHS[month_index as usize], day: 1 };
        let day_count = first_of_month.days_since_epoch_unchecked()
            .checked_add((self.ymd.day - 1) as i64)
            .and_then(|d| d.checked_add(days))
            .and_then(|d| d.checked_sub(EPOCH_DIFFERENCE))
            .ok_or(Error::OutOfRange)?;

        let shifted = Self::from_days_since_epoch(day_count);
        if !is_supported_year(shifted.ymd.year) {
            return Err(Error::OutOfRange);
        }

        trace!("shifted {:?} by {}y {}m {}d to {:?}", self, years, months, days, shifted);
        Ok(shifted)
    }

    /// Returns this date shifted by the given number of years. The 29th of
    /// February on a non-leap year becomes the 1st of March.
    pub fn plus_years(&self, years: i64) -> Result<Self, Error> {
        self.add_calendar(years, 0, 0)
    }

    /// Returns this date shifted by the given number of months. Days past
    /// the end of the target month spill over, so the 31st of January plus
    /// one month is the 3rd of March (or the 2nd, in leap years).
    pub fn plus_months(&self, months: i64) -> Result<Self, Error> {
        self.add_calendar(0, months, 0)
    }

    /// Returns this date shifted by the given number of weeks.
    pub fn plus_weeks(&self, weeks: i64) -> Result<Self, Error> {
        self.add_calendar(0, 0, weeks.checked_mul(7).ok_or(Error::OutOfRange)?)
    }

    /// Returns this date shifted by the given number of days.
    pub fn plus_days(&self, days: i64) -> Result<Self, Error> {
        self.add_calendar(0, 0, days)
    }

    /// Returns the number of whole days from `other` to this date, which is
    /// negative when `other` is the later one.
    ///
    /// ```rust
    /// use civiltime::LocalDate;
    ///
    /// let first = LocalDate::from_ymd(2025, 4, 1).unwrap();
    /// let fifth = LocalDate::from_ymd(2025, 4, 5).unwrap();
    /// assert_eq!(fifth.pass_days(&first), 4);
    /// assert_eq!(first.pass_days(&fifth), -4);
    /// ```
    pub fn pass_days(&self, other: &Self) -> i64 {
        self.days_since_unix_epoch() - other.days_since_unix_epoch()
    }

    /// Compares two dates by their position on the calendar.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.ymd.cmp(&other.ymd)
    }

    /// Returns whether this date comes before the other one.
    pub fn before(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Returns whether this date comes after the other one.
    pub fn after(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Returns whether the two dates are the same day.
    pub fn equal(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    /// Returns the first day of this date’s month.
    pub fn start_of_month(&self) -> Self {
        self.shift_within_month(1)
    }

    /// Returns the last day of this date’s month.
    pub fn end_of_month(&self) -> Self {
        self.shift_within_month(table::days_in(self.ymd.month as i8, self.ymd.year))
    }

    fn shift_within_month(&self, day: i8) -> Self {
        let days = self.days_since_unix_epoch() + (day - self.ymd.day) as i64;
        Self::from_days_since_epoch(days - EPOCH_DIFFERENCE)
    }

    /// Returns the same month and day in another year. Fails with
    /// `Error::ImpossibleDate` when that day doesn’t exist there, as with
    /// the 29th of February in a non-leap year.
    pub fn copy_year(&self, year: i64) -> Result<Self, Error> {
        Self::from_ymd(year, self.ymd.month as i8, self.ymd.day)
    }

    /// Returns the number of whole years between this date and `today`,
    /// counting a year only once its anniversary has been reached.
    pub fn age_on(&self, today: &Self) -> i64 {
        let years = today.ymd.year - self.ymd.year;

        if (today.ymd.month, today.ymd.day) < (self.ymd.month, self.ymd.day) {
            years - 1
        }
        else {
            years
        }
    }

    /// Returns the number of whole years between this date and today, as
    /// seen at the given offset.
    pub fn age(&self, offset: Offset) -> i64 {
        self.age_on(&Self::now(offset))
    }
}

impl DatePiece for LocalDate {
    fn year(&self) -> i64 { self.ymd.year }
    fn month(&self) -> Month { self.ymd.month }
    fn day(&self) -> i8 { self.ymd.day }
    fn yearday(&self) -> i16 { self.yearday }
    fn weekday(&self) -> Weekday { self.weekday }
}

impl PartialEq for LocalDate {
    fn eq(&self, other: &Self) -> bool {
        self.ymd == other.ymd
    }
}

impl PartialOrd for LocalDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocalDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ymd.cmp(&other.ymd)
    }
}

impl std::hash::Hash for LocalDate {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.ymd.hash(state)
    }
}


impl LocalTime {

    /// Computes the number of hours, minutes, and seconds, based on the
    /// number of seconds that have elapsed since midnight. Whole days are
    /// dropped, and negative counts go back from the next midnight.
    pub fn from_seconds_since_midnight(seconds: i64) -> Self {
        Self::from_seconds_and_nanoseconds_since_midnight(seconds, 0)
    }

    /// Computes the number of hours, minutes, and seconds, based on the
    /// number of seconds that have elapsed since midnight, along with the
    /// nanosecond of the second. Nanoseconds past a whole second carry
    /// into the seconds.
    pub fn from_seconds_and_nanoseconds_since_midnight(seconds: i64, nanosecond_of_second: i32) -> Self {
        let (seconds, nanosecond_of_second) = Duration::of_ns(seconds, i64::from(nanosecond_of_second)).lengths();
        let seconds = seconds.rem_euclid(SECONDS_IN_DAY);

        Self {
            hour:   (seconds / 60 / 60) as i8,
            minute: (seconds / 60 % 60) as i8,
            second: (seconds % 60) as i8,
            nanosecond: nanosecond_of_second,
            precision: 0,
        }
    }

    /// Returns the time at midnight, with all fields initialised to 0.
    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0, nanosecond: 0, precision: 0 }
    }

    /// Returns the time at midnight, with all fields initialised to 0.
    pub fn zero() -> Self {
        Self::midnight()
    }

    /// Creates a new timestamp instance with the given hour and minute
    /// fields. The second and nanosecond fields are set to 0.
    pub fn hm(hour: i8, minute: i8) -> Result<Self, Error> {
        Self::hms_ns(hour, minute, 0, 0)
    }

    /// Creates a new timestamp instance with the given hour, minute, and
    /// second fields. The nanosecond field is set to 0.
    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        Self::hms_ns(hour, minute, second, 0)
    }

    /// Creates a new timestamp instance with the given hour, minute,
    /// second, and nanosecond fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`. A second value
    /// of 60 is allowed, so that leap seconds can be written down, but it
    /// is not checked against any table of real leap seconds.
    pub fn hms_ns(hour: i8, minute: i8, second: i8, nanosecond: i32) -> Result<Self, Error> {
        if hour.is_within(0..24)   && minute.is_within(0..60)
        && second.is_within(0..61) && nanosecond.is_within(0..1_000_000_000)
        {
            Ok(Self { hour, minute, second, nanosecond, precision: 0 })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Returns this time with the given number of fractional-second digits
    /// to display, from 0 (as few as needed) to 9.
    pub fn with_precision(self, precision: u8) -> Result<Self, Error> {
        if precision <= 9 {
            Ok(Self { precision, ..self })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Returns the time of the given instant, as seen at the given offset.
    pub fn from_instant(instant: Instant, offset: Offset) -> Self {
        LocalDateTime::from_instant(instant, offset).time
    }

    /// Returns the current time, as seen at the given offset.
    pub fn now(offset: Offset) -> Self {
        Self::from_instant(Instant::now(), offset)
    }

    /// Calculate the number of seconds since midnight this time is at,
    /// ignoring nanoseconds.
    pub fn to_seconds(self) -> i64 {
        self.hour as i64 * 3600
            + self.minute as i64 * 60
            + self.second as i64
    }

    /// Returns a copy with only the hour, minute, and second replaced.
    pub(crate) fn with_hms_of(self, other: Self) -> Self {
        Self { hour: other.hour, minute: other.minute, second: other.second, ..self }
    }

    fn sort_key(self) -> (i64, i32) {
        (self.to_seconds(), self.nanosecond)
    }
}

impl TimePiece for LocalTime {
    fn hour(&self) -> i8 { self.hour }
    fn minute(&self) -> i8 { self.minute }
    fn second(&self) -> i8 { self.second }
    fn nanosecond(&self) -> i32 { self.nanosecond }
    fn precision(&self) -> u8 { self.precision }
}


impl LocalDateTime {

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**, setting the
    /// number of nanoseconds to 0.
    pub fn at(seconds_since_1970_epoch: i64) -> Self {
        Self::at_ns(seconds_since_1970_epoch, 0)
    }

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**, and the
    /// nanosecond of that second. Nanoseconds past a whole second carry
    /// into the seconds.
    pub fn at_ns(seconds_since_1970_epoch: i64, nanosecond_of_second: i32) -> Self {
        let (seconds, nanosecond_of_second) = Duration::of_ns(seconds_since_1970_epoch, i64::from(nanosecond_of_second)).lengths();

        // Just split the input value into days and seconds, and let
        // LocalDate and LocalTime do all the hard work.
        let (days, secs) = split_cycles(seconds, SECONDS_IN_DAY);

        Self {
            date: LocalDate::from_days_since_epoch(days - EPOCH_DIFFERENCE),
            time: LocalTime::from_seconds_and_nanoseconds_since_midnight(secs, nanosecond_of_second),
        }
    }

    /// Computes the date-time that the given instant has on the clocks
    /// at the given offset.
    pub fn from_instant(instant: Instant, offset: Offset) -> Self {
        Self::at_ns(instant.seconds() + offset.total_seconds(), instant.nanoseconds())
    }

    /// Creates a new local date time from a local date and a local time.
    pub fn new(date: LocalDate, time: LocalTime) -> Self {
        Self {
            date,
            time,
        }
    }

    /// Returns the date portion of this date-time stamp.
    pub fn date(&self) -> LocalDate {
        self.date
    }

    /// Returns the time portion of this date-time stamp.
    pub fn time(&self) -> LocalTime {
        self.time
    }

    /// Creates a new date-time stamp set to the current time, as seen at
    /// the given offset.
    pub fn now(offset: Offset) -> Self {
        Self::from_instant(Instant::now(), offset)
    }

    /// Returns the instant this date-time names when read at the given
    /// offset.
    pub fn to_instant(&self, offset: Offset) -> Instant {
        let seconds = self.date.days_since_unix_epoch() * SECONDS_IN_DAY
                    + self.time.to_seconds()
                    - offset.total_seconds();
        Instant::at_ns(seconds, self.time.nanosecond as i64)
    }

    /// Returns midnight at the start of this date-time’s day.
    pub fn start_of_today(&self) -> Self {
        Self::new(self.date, LocalTime::zero())
    }

    /// Shifts the date by the given number of years, keeping the time.
    pub fn plus_years(&self, years: i64) -> Result<Self, Error> {
        Ok(Self::new(self.date.plus_years(years)?, self.time))
    }

    /// Shifts the date by the given number of months, keeping the time.
    pub fn plus_months(&self, months: i64) -> Result<Self, Error> {
        Ok(Self::new(self.date.plus_months(months)?, self.time))
    }

    /// Shifts the date by the given number of weeks, keeping the time.
    pub fn plus_weeks(&self, weeks: i64) -> Result<Self, Error> {
        Ok(Self::new(self.date.plus_weeks(weeks)?, self.time))
    }

    /// Shifts the date by the given number of days, keeping the time.
    pub fn plus_days(&self, days: i64) -> Result<Self, Error> {
        Ok(Self::new(self.date.plus_days(days)?, self.time))
    }

    fn since(&self, other: &Self) -> Duration {
        self.to_instant(Offset::utc()) - other.to_instant(Offset::utc())
    }

    /// Returns the number of whole 24-hour days from `other` to this
    /// date-time, truncated toward zero.
    pub fn pass_days(&self, other: &Self) -> i64 {
        self.since(other).whole_days()
    }

    /// Returns the number of whole hours from `other` to this date-time,
    /// truncated toward zero.
    pub fn pass_hours(&self, other: &Self) -> i64 {
        self.since(other).whole_hours()
    }

    /// Returns the number of whole minutes from `other` to this date-time,
    /// truncated toward zero.
    pub fn pass_minutes(&self, other: &Self) -> i64 {
        self.since(other).whole_minutes()
    }

    /// Returns the number of whole seconds from `other` to this date-time,
    /// truncated toward zero.
    pub fn pass_seconds(&self, other: &Self) -> i64 {
        self.since(other).whole_seconds()
    }

    /// Compares two date-times by the instant they name. Unlike `cmp`,
    /// this ignores the display precision of the time.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.date.compare(&other.date)
            .then(self.time.sort_key().cmp(&other.time.sort_key()))
    }

    /// Returns whether this date-time comes before the other one.
    pub fn before(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Returns whether this date-time comes after the other one.
    pub fn after(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Returns whether the two date-times name the same instant.
    pub fn equal(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl DatePiece for LocalDateTime {
    fn year(&self) -> i64 { self.date.ymd.year }
    fn month(&self) -> Month { self.date.ymd.month }
    fn day(&self) -> i8 { self.date.ymd.day }
    fn yearday(&self) -> i16 { self.date.yearday }
    fn weekday(&self) -> Weekday { self.date.weekday }
}

impl TimePiece for LocalDateTime {
    fn hour(&self) -> i8 { self.time.hour }
    fn minute(&self) -> i8 { self.time.minute }
    fn second(&self) -> i8 { self.time.second }
    fn nanosecond(&self) -> i32 { self.time.nanosecond }
    fn precision(&self) -> u8 { self.time.precision }
}

impl Add<Duration> for LocalDateTime {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        let moved = Self::from_instant(self.to_instant(Offset::utc()) + duration, Offset::utc());
        Self::new(moved.date, LocalTime { precision: self.time.precision, ..moved.time })
    }
}

impl Sub<Duration> for LocalDateTime {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        self + -duration
    }
}


/// A **YMD** is an implementation detail of `LocalDate`. It provides
/// helper methods relating to the construction of `LocalDate` instances.
///
/// While all `LocalDate` values get checked for validity before they are
/// used, there is no such check for `YMD`, so it is not exposed.
#[derive(PartialEq, PartialOrd, Eq, Ord, Hash, Clone, Debug, Copy)]
struct YMD {
    year:    i64,
    month:   Month,
    day:     i8,
}

impl YMD {

    /// Calculates the number of days that have elapsed since the 1st
    /// January, 1970. Returns the number of days if this datestamp is
    /// valid; an error otherwise.
    fn to_days_since_epoch(&self) -> Result<i64, Error> {
        if !is_supported_year(self.year) || !self.is_valid(Year(self.year).is_leap_year()) {
            return Err(Error::OutOfRange);
        }

        Ok(self.days_since_epoch_unchecked())
    }

    /// Calculates the number of days since the 1st January, 1970 without
    /// checking the day against the month. Days past the end of the month
    /// simply count on into the following ones.
    fn days_since_epoch_unchecked(&self) -> i64 {
        let years = self.year - 2000;
        let (leap_days_elapsed, is_leap_year) = Year(self.year).leap_year_calculations();

        // Work out the number of days from the start of 1970 to now,
        // which is a multiple of the number of years...
        years * 365

            // Plus the number of days between the start of 2000 and the
            // start of 1970, to make up the difference because our
            // dates start at 2000 and instants start at 1970...
            + 10958

            // Plus the number of leap years that have elapsed between
            // now and the start of 2000...
            + leap_days_elapsed

            // Plus the number of days in all the months leading up to
            // the current month...
            + self.month.days_before_start() as i64

            // Plus an extra leap day for *this* year...
            + if is_leap_year && self.month >= March { 1 } else { 0 }

            // Plus the number of days in the month so far! (Days are
            // 1-indexed, so we make them 0-indexed here)
            + (self.day - 1) as i64
    }

    /// Returns whether this datestamp is valid, which basically means
    /// whether the day is in the range allowed by the month.
    fn is_valid(&self, is_leap_year: bool) -> bool {
        self.day >= 1 && self.day <= self.month.days_in_month(is_leap_year)
    }
}

fn is_supported_year(year: i64) -> bool {
    year.is_within(MIN_YEAR .. MAX_YEAR + 1)
}

/// Computes the weekday, given the number of days that have passed
/// since the EPOCH.
fn days_to_weekday(days: i64) -> Weekday {
    // March 1st, 2000 was a Wednesday, so add 3 to the number of days.
    let weekday = (days + 3).rem_euclid(7);
    WEEKDAYS[weekday as usize]
}

/// Split a number of years into a number of year-cycles, and the number
/// of years left over that don’t fit into a cycle. This is also used
/// for day-cycles.
///
/// This is essentially a division operation with the result and the
/// remainder, with the difference that a negative value gets ‘wrapped
/// around’ to be a positive value, owing to the way the modulo operator
/// works for negative values.
fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    let mut cycles    = number_of_periods / cycle_length;
    let mut remainder = number_of_periods % cycle_length;

    if remainder < 0 {
        remainder += cycle_length;
        cycles    -= 1;
    }

    (cycles, remainder)
}


/// Everything that can go wrong when building, reading, or scanning a
/// civil date or time. Variants that come from reading text carry the
/// piece of text that was at fault.
#[derive(PartialEq, Debug, Clone)]
pub enum Error {

    /// A field given to a constructor was out of range.
    OutOfRange,

    /// A byte where a digit was expected was not one.
    InvalidDigit(String),

    /// Date text was not exactly `YYYY-MM-DD`.
    MalformedDate(String),

    /// Date text was well-formed, but names a day that doesn’t exist.
    ImpossibleDate(String),

    /// Time text was too short, or lacked its colons.
    MalformedTime(String),

    /// The hour was greater than 23.
    InvalidHour(String),

    /// The minute was greater than 59.
    InvalidMinute(String),

    /// The second was greater than 60.
    InvalidSecond(String),

    /// Date-time text was too short to hold both a date and a time.
    MalformedDateTime(String),

    /// A fraction point wasn’t followed by any digits.
    MalformedFraction(String),

    /// The byte between the date and the time wasn’t `T`, `t`, or a space.
    MalformedSeparator(String),

    /// Text was left over after a whole value had been read.
    TrailingCharacters(String),

    /// A database value of the wrong type was scanned.
    UnsupportedScanType { found: &'static str, into: &'static str },

    /// Text did not match a custom layout.
    #[cfg(feature="format")]
    Layout(crate::cal::fmt::custom::ReadError),

    /// The lenient ISO-8601 parser rejected the text.
    #[cfg(feature="parse")]
    Iso(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OutOfRange                 => write!(f, "datetime field out of range"),
            Error::InvalidDigit(s)            => write!(f, "{:?}: expected digit (0-9)", s),
            Error::MalformedDate(s)           => write!(f, "{:?}: dates are expected to have the format YYYY-MM-DD", s),
            Error::ImpossibleDate(s)          => write!(f, "{:?}: impossible date", s),
            Error::MalformedTime(s)           => write!(f, "{:?}: times are expected to have the format HH:MM:SS[.NNNNNNNNN]", s),
            Error::InvalidHour(s)             => write!(f, "{:?}: hour cannot be greater than 23", s),
            Error::InvalidMinute(s)           => write!(f, "{:?}: minute cannot be greater than 59", s),
            Error::InvalidSecond(s)           => write!(f, "{:?}: second cannot be greater than 60", s),
            Error::MalformedDateTime(s)       => write!(f, "{:?}: local datetimes are expected to have the format YYYY-MM-DDTHH:MM:SS[.NNNNNNNNN]", s),
            Error::MalformedFraction(s)       => write!(f, "{:?}: need at least one digit after the fraction point", s),
            Error::MalformedSeparator(s)      => write!(f, "{:?}: datetime separator is expected to be T or a space", s),
            Error::TrailingCharacters(s)      => write!(f, "{:?}: extra characters", s),
            Error::UnsupportedScanType { found, into }
                                              => write!(f, "cannot scan type {} into {}", found, into),
            #[cfg(feature="format")]
            Error::Layout(e)                  => write!(f, "{}", e),
            #[cfg(feature="parse")]
            Error::Iso(s)                     => write!(f, "parse error: {}", s),
        }
    }
}

impl ErrorTrait for Error {
    fn source(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        match self {
            #[cfg(feature="format")]
            Error::Layout(e) => Some(e),
            _                => None,
        }
    }
}


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
/// In this case, it’s 1-indexed, to have January become 1 when you use
/// `as i32` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Month {
    January =  1, February =  2, March     =  3,
    April   =  4, May      =  5, June      =  6,
    July    =  7, August   =  8, September =  9,
    October = 10, November = 11, December  = 12,
}

impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            February  => if leap_year { 29 } else { 28 },
            other     => table::days_in(other as i8, 2001),
        }
    }

    /// Returns the number of days that have elapsed in a year *before* this
    /// month begins, with no leap year check.
    fn days_before_start(self) -> i16 {
        table::days_before(self as i8)
    }

    pub fn months_from_january(self) -> usize {
        self as usize - 1
    }

    /// Returns the month based on a number, with January as **Month 1**,
    /// February as **Month 2**, and so on.
    ///
    /// ```rust
    /// use civiltime::Month;
    /// assert_eq!(Month::from_one(5), Ok(Month::May));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Self, Error> {
        if month.is_within(1..13) {
            Ok(MONTHS[month as usize - 1])
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Returns the month based on a number, with January as **Month 0**,
    /// February as **Month 1**, and so on.
    pub fn from_zero(month: i8) -> Result<Self, Error> {
        Self::from_one(month + 1)
    }
}


/// A named day of the week.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

// Sunday is Day 0. There’s no Ord instance, as there’s no real standard
// as to whether Sunday should come before Monday, or the other way around.

static WEEKDAYS: &[Weekday] = &[
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
];

impl Weekday {
    fn days_from_monday_as_one(self) -> i8 {
        match self {
            Sunday => 7,
            other  => other as i8,
        }
    }

    /// Return the weekday based on a number, with Sunday as Day 0, Monday as
    /// Day 1, and so on.
    ///
    /// ```rust
    /// use civiltime::Weekday;
    /// assert_eq!(Weekday::from_zero(4), Ok(Weekday::Thursday));
    /// assert!(Weekday::from_zero(7).is_err());
    /// ```
    pub fn from_zero(weekday: i8) -> Result<Self, Error> {
        if weekday.is_within(0..7) {
            Ok(WEEKDAYS[weekday as usize])
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// Return the weekday based on a number, with Monday as Day 1 and
    /// Sunday as Day 7, as in ISO-8601.
    pub fn from_one(weekday: i8) -> Result<Self, Error> {
        match weekday {
            7 => Ok(Sunday),
            0 => Err(Error::OutOfRange),
            _ => Self::from_zero(weekday),
        }
    }
}


#[cfg(test)]
impl quickcheck::Arbitrary for LocalDate {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        use quickcheck::Arbitrary;

        // Any day from 0001-01-01 to 9999-12-31, picked field by field so
        // that leap days come up as often as any other day.
        let year = i64::from(u16::arbitrary(g) % 9999) + 1;
        let month = (u8::arbitrary(g) % 12) as i8 + 1;
        let day = (u8::arbitrary(g) % table::days_in(month, year) as u8) as i8 + 1;
        Self::from_ymd(year, month, day).unwrap()
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for LocalTime {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        use quickcheck::Arbitrary;

        let seconds = i64::from(u32::arbitrary(g) % 86_400);
        let nanosecond = (u32::arbitrary(g) % 1_000_000_000) as i32;
        let precision = u8::arbitrary(g) % 10;
        Self { precision, ..Self::from_seconds_and_nanoseconds_since_midnight(seconds, nanosecond) }
    }
}
