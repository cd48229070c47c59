//! Converting between the Gregorian and the Chinese lunisolar calendars.
//!
//! The astronomy lives elsewhere: callers hand in something that implements
//! `LunarCalendar`, and this module only carries year, month, and day
//! numbers through it.

use crate::cal::DatePiece;
use crate::cal::datetime::{LocalDate, LocalDateTime, Error};


/// Something that can convert year, month, and day numbers between the
/// solar (Gregorian) calendar and a lunar one.
///
/// Months and days are counted from 1 on both sides. A lunar date is
/// held in a plain `LocalDate`, which has nowhere to keep a leap-month
/// flag: a calendar that signals a leap month with a negative month
/// number gets `Error::ImpossibleDate` back from the conversion.
pub trait LunarCalendar {

    /// Converts a solar date to the lunar date of the same day.
    fn to_lunar(&self, year: i64, month: i8, day: i8) -> (i64, i8, i8);

    /// Converts a lunar date to the solar date of the same day.
    fn to_solar(&self, year: i64, month: i8, day: i8) -> (i64, i8, i8);
}

impl<'a, C: LunarCalendar + ?Sized> LunarCalendar for &'a C {
    fn to_lunar(&self, year: i64, month: i8, day: i8) -> (i64, i8, i8) {
        (**self).to_lunar(year, month, day)
    }

    fn to_solar(&self, year: i64, month: i8, day: i8) -> (i64, i8, i8) {
        (**self).to_solar(year, month, day)
    }
}


#[cfg_attr(not(feature="logging"), allow(unused_variables))]
fn rebuild(direction: &str, (year, month, day): (i64, i8, i8)) -> Result<LocalDate, Error> {
    let result = LocalDate::from_ymd(year, month, day);

    match &result {
        Ok(date) => { trace!("{} conversion gave {:?}", direction, date); },
        Err(e)   => { warn!("{} conversion gave a day the civil calendar lacks: {}", direction, e); },
    }

    result
}

impl LocalDate {

    /// Reads this date as a lunar one and returns the solar date of the
    /// same day.
    ///
    /// Fails with `Error::ImpossibleDate` if the calendar hands back
    /// numbers that don’t make a real Gregorian date.
    pub fn to_solar<C: LunarCalendar + ?Sized>(&self, calendar: &C) -> Result<Self, Error> {
        rebuild("solar", calendar.to_solar(self.year(), self.month() as i8, self.day()))
    }

    /// Returns the lunar date of the same day as this solar one, stored in
    /// a `LocalDate`.
    ///
    /// Lunar months can have a 30th day where the Gregorian month of the
    /// same number doesn’t, and those fail with `Error::ImpossibleDate`.
    pub fn to_lunar<C: LunarCalendar + ?Sized>(&self, calendar: &C) -> Result<Self, Error> {
        rebuild("lunar", calendar.to_lunar(self.year(), self.month() as i8, self.day()))
    }
}

impl LocalDateTime {

    /// Converts the date as `LocalDate::to_solar` does, keeping the time.
    pub fn to_solar<C: LunarCalendar + ?Sized>(&self, calendar: &C) -> Result<Self, Error> {
        Ok(Self::new(self.date().to_solar(calendar)?, self.time()))
    }

    /// Converts the date as `LocalDate::to_lunar` does, keeping the time.
    pub fn to_lunar<C: LunarCalendar + ?Sized>(&self, calendar: &C) -> Result<Self, Error> {
        Ok(Self::new(self.date().to_lunar(calendar)?, self.time()))
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::datetime::LocalTime;

    /// Knows exactly one pair of days.
    struct OneDay;

    impl LunarCalendar for OneDay {
        fn to_lunar(&self, year: i64, month: i8, day: i8) -> (i64, i8, i8) {
            match (year, month, day) {
                (2024, 10, 24) => (2024, 9, 22),
                (2024,  3, 10) => (2024, 2, 30),
                other          => other,
            }
        }

        fn to_solar(&self, year: i64, month: i8, day: i8) -> (i64, i8, i8) {
            match (year, month, day) {
                (2024, 9, 22) => (2024, 10, 24),
                other         => other,
            }
        }
    }

    #[test]
    fn solar() {
        let lunar = LocalDate::from_ymd(2024, 9, 22).unwrap();
        assert_eq!(lunar.to_solar(&OneDay), LocalDate::from_ymd(2024, 10, 24));
    }

    #[test]
    fn lunar() {
        let solar = LocalDate::from_ymd(2024, 10, 24).unwrap();
        assert_eq!(solar.to_lunar(&OneDay), LocalDate::from_ymd(2024, 9, 22));
    }

    #[test]
    fn thirtieth_of_the_second_month() {
        let solar = LocalDate::from_ymd(2024, 3, 10).unwrap();
        assert_eq!(solar.to_lunar(&OneDay), Err(Error::ImpossibleDate("2024-02-30".into())));
    }

    #[test]
    fn datetimes_keep_their_time() {
        let time = LocalTime::hms(18, 30, 0).unwrap();
        let lunar = LocalDateTime::new(LocalDate::from_ymd(2024, 9, 22).unwrap(), time);
        let solar = lunar.to_solar(&OneDay).unwrap();
        assert_eq!(solar.date(), LocalDate::from_ymd(2024, 10, 24).unwrap());
        assert_eq!(solar.time(), time);
    }

    #[test]
    fn leap_months_are_refused() {
        struct LeapMonth;

        impl LunarCalendar for LeapMonth {
            fn to_lunar(&self, year: i64, _: i8, day: i8) -> (i64, i8, i8) { (year, -4, day) }
            fn to_solar(&self, year: i64, month: i8, day: i8) -> (i64, i8, i8) { (year, month, day) }
        }

        let solar = LocalDate::from_ymd(2023, 6, 10).unwrap();
        assert_eq!(solar.to_lunar(&LeapMonth), Err(Error::ImpossibleDate("2023--4-10".into())));
    }

    #[test]
    fn through_a_trait_object() {
        let calendar: &dyn LunarCalendar = &OneDay;
        let lunar = LocalDate::from_ymd(2024, 9, 22).unwrap();
        assert_eq!(lunar.to_solar(&calendar), LocalDate::from_ymd(2024, 10, 24));
    }
}
