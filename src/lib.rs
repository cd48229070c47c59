#![crate_name = "civiltime"]
#![crate_type = "rlib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Civil dates and times: calendar dates and wall-clock times that carry no
//! time zone until they are pinned to an `Offset`.
//!
//! The text forms are the RFC 3339 ones, read by a strict byte-level parser:
//!
//! ```
//! use civiltime::{LocalDate, LocalTime, LocalDateTime};
//!
//! let date: LocalDate = "2024-02-29".parse().unwrap();
//! let time: LocalTime = "12:34:56.789".parse().unwrap();
//! let both: LocalDateTime = "2024-02-29 12:34:56.789".parse().unwrap();
//!
//! assert_eq!(both.date(), date);
//! assert_eq!(both.time(), time);
//! assert_eq!(both.to_string(), "2024-02-29T12:34:56.789");
//! ```
//!
//! Calendar arithmetic normalises out-of-range days the way a wall calendar
//! overflows into the next month:
//!
//! ```
//! use civiltime::LocalDate;
//!
//! let date = LocalDate::from_ymd(2023, 1, 31).unwrap();
//! assert_eq!(date.plus_months(1).unwrap().to_string(), "2023-03-03");
//! ```

#[macro_use]
mod logging;

mod cal;
pub use crate::cal::{DatePiece, TimePiece};
pub use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday, Year, Error, MIN_YEAR, MAX_YEAR};
pub use crate::cal::offset::{Offset, Error as OffsetError};
pub use crate::cal::lunar::LunarCalendar;
pub use crate::cal::table::{days_in, is_leap};
pub use crate::cal::sql::{SqlValue, ToSql, Scan};

/// The strict, fixed-grammar byte parsers behind the `FromStr` impls.
pub mod parse {
    pub use crate::cal::parse::{parse_decimal_digits, parse_local_date, parse_local_time, parse_local_date_time};
}

#[cfg(feature="format")]
pub use crate::cal::fmt::custom as fmt;

mod duration;
pub use crate::duration::Duration;

mod instant;
pub use crate::instant::Instant;

mod system;
mod util;
