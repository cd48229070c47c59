//! Fixed offsets from UTC, used to pin civil values to the timeline.

use std::error::Error as ErrorTrait;
use std::fmt;

use crate::util::RangeExt;


/// A fixed distance from UTC, used wherever a civil value meets an
/// instant: reading the clock, converting to and from instants, and
/// working out today’s date.
#[derive(PartialEq, Eq, Hash, Copy, Clone)]
pub struct Offset {
    offset_seconds: Option<i32>,
}

impl Offset {

    /// The offset of UTC itself.
    pub fn utc() -> Self {
        Self { offset_seconds: None }
    }

    /// An offset of the given number of seconds east of UTC, up to a whole
    /// day either way.
    pub fn of_seconds(seconds: i32) -> Result<Self, Error> {
        if seconds.is_within(-86400..86401) {
            Ok(Self { offset_seconds: Some(seconds) })
        }
        else {
            Err(Error::OutOfRange)
        }
    }

    /// An offset of the given hours and minutes east of UTC. Both parts
    /// must have the same sign.
    pub fn of_hours_and_minutes(hours: i8, minutes: i8) -> Result<Self, Error> {
        if (hours.is_positive() && minutes.is_negative())
        || (hours.is_negative() && minutes.is_positive()) {
            Err(Error::SignMismatch)
        }
        else if hours <= -24 || hours >= 24 || minutes <= -60 || minutes >= 60 {
            Err(Error::OutOfRange)
        }
        else {
            let hours = hours as i32;
            let minutes = minutes as i32;
            Self::of_seconds(hours * (60 * 60) + minutes * 60)
        }
    }

    pub fn is_utc(self) -> bool {
        self.offset_seconds.is_none()
    }

    pub fn is_negative(self) -> bool {
        self.total_seconds() < 0
    }

    /// The whole offset in seconds, to be added to a UTC clock reading to
    /// get the local one.
    pub fn total_seconds(self) -> i64 {
        self.offset_seconds.unwrap_or(0) as i64
    }

    pub fn hours(self) -> i8 {
        match self.offset_seconds {
            Some(s) => (s / 60 / 60) as i8,
            None => 0,
        }
    }

    pub fn minutes(self) -> i8 {
        match self.offset_seconds {
            Some(s) => (s / 60 % 60) as i8,
            None => 0,
        }
    }

    pub fn seconds(self) -> i8 {
        match self.offset_seconds {
            Some(s) => (s % 60) as i8,
            None => 0,
        }
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_utc() {
            return write!(f, "Z");
        }

        let sign = if self.is_negative() { '-' } else { '+' };
        write!(f, "{}{:02}", sign, self.hours().abs())?;

        if self.minutes() != 0 || self.seconds() != 0 {
            write!(f, ":{:02}", self.minutes().abs())?;
        }

        if self.seconds() != 0 {
            write!(f, ":{:02}", self.seconds().abs())?;
        }

        Ok(())
    }
}

impl fmt::Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Offset({})", self)
    }
}


#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {
    OutOfRange,
    SignMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::OutOfRange    => write!(f, "offset field out of range"),
            Error::SignMismatch  => write!(f, "sign mismatch"),
        }
    }
}

impl ErrorTrait for Error {}


#[cfg(test)]
mod test {
    use super::Offset;

    #[test]
    fn fixed_seconds() {
        assert!(Offset::of_seconds(1234).is_ok());
    }

    #[test]
    fn fixed_seconds_out_of_range() {
        assert!(Offset::of_seconds(100_000).is_err());
    }

    #[test]
    fn fixed_hm() {
        assert_eq!(Offset::of_hours_and_minutes(5, 30).unwrap().total_seconds(), 19_800);
    }

    #[test]
    fn fixed_hm_negative() {
        assert_eq!(Offset::of_hours_and_minutes(-3, -45).unwrap().total_seconds(), -13_500);
    }

    #[test]
    fn fixed_hm_err() {
        assert!(Offset::of_hours_and_minutes(8, 60).is_err());
    }

    #[test]
    fn fixed_hm_signs() {
        assert!(Offset::of_hours_and_minutes(-4, 30).is_err());
    }

    #[test]
    fn fixed_hm_signs_zero() {
        assert!(Offset::of_hours_and_minutes(4, 0).is_ok());
    }

    #[test]
    fn utc_is_zero() {
        assert_eq!(Offset::utc().total_seconds(), 0);
        assert_eq!(Offset::default(), Offset::utc());
    }

    #[test]
    fn debug_zulu() {
        let offset = Offset::utc();
        let debugged = format!("{:?}", offset);
        assert_eq!(debugged, "Offset(Z)");
    }

    #[test]
    fn debug_offset() {
        let offset = Offset::of_seconds(-25 * 60 - 21).unwrap();
        let debugged = format!("{:?}", offset);
        assert_eq!(debugged, "Offset(-00:25:21)");
    }

    #[test]
    fn display_trims_zero_parts() {
        assert_eq!(Offset::of_hours_and_minutes(1, 0).unwrap().to_string(), "+01");
        assert_eq!(Offset::of_hours_and_minutes(-9, -30).unwrap().to_string(), "-09:30");
    }
}
