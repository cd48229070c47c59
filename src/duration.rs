//! Lengths of time on the timeline.

use std::ops::{Add, Sub, Mul, Neg};


const NANOS_IN_SECOND: i64 = 1_000_000_000;


/// A **duration** is a length of time on the timeline, irrespective of
/// time zone or calendar format, with nanosecond precision.
///
/// The nanosecond portion is always kept within `0 .. 1_000_000_000`, so a
/// negative duration of half a second is stored as minus one second plus
/// half a billion nanoseconds.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Copy)]
pub struct Duration {
    seconds: i64,
    nanoseconds: i32,
}

impl Duration {

    /// Create a new zero-length duration.
    pub fn zero() -> Self {
        Self { seconds: 0, nanoseconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds long.
    pub fn of(seconds: i64) -> Self {
        Self { seconds, nanoseconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds and
    /// nanoseconds long. Nanoseconds outside of a single second carry over
    /// into the seconds.
    pub fn of_ns(seconds: i64, nanoseconds: i64) -> Self {
        let carry = nanoseconds.div_euclid(NANOS_IN_SECOND);
        Self {
            seconds: seconds + carry,
            nanoseconds: nanoseconds.rem_euclid(NANOS_IN_SECOND) as i32,
        }
    }

    /// Return the seconds and nanoseconds portions of the duration as
    /// a 2-element tuple.
    pub fn lengths(&self) -> (i64, i32) {
        (self.seconds, self.nanoseconds)
    }

    // As with `lengths`, there is no `nanoseconds()` accessor on its own:
    // it would be too easy to mistake it for the *total* length.

    /// The total length in nanoseconds.
    pub fn total_nanoseconds(&self) -> i128 {
        i128::from(self.seconds) * i128::from(NANOS_IN_SECOND) + i128::from(self.nanoseconds)
    }

    /// The number of whole seconds in this duration, truncated toward zero.
    pub fn whole_seconds(&self) -> i64 {
        self.truncated(1)
    }

    /// The number of whole minutes in this duration, truncated toward zero.
    pub fn whole_minutes(&self) -> i64 {
        self.truncated(60)
    }

    /// The number of whole hours in this duration, truncated toward zero.
    pub fn whole_hours(&self) -> i64 {
        self.truncated(60 * 60)
    }

    /// The number of whole 24-hour days in this duration, truncated toward
    /// zero, so minus four and a bit days is minus four days.
    pub fn whole_days(&self) -> i64 {
        self.truncated(24 * 60 * 60)
    }

    fn truncated(&self, unit_seconds: i64) -> i64 {
        let unit = i128::from(unit_seconds) * i128::from(NANOS_IN_SECOND);
        (self.total_nanoseconds() / unit) as i64
    }
}

impl Add<Duration> for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::of_ns(self.seconds + rhs.seconds, i64::from(self.nanoseconds) + i64::from(rhs.nanoseconds))
    }
}

impl Sub<Duration> for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::of_ns(self.seconds - rhs.seconds, i64::from(self.nanoseconds) - i64::from(rhs.nanoseconds))
    }
}

impl Mul<i64> for Duration {
    type Output = Self;

    fn mul(self, amount: i64) -> Self {
        Self::of_ns(self.seconds * amount, i64::from(self.nanoseconds) * amount)
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        Self::zero() - self
    }
}
