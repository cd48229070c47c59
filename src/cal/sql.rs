//! Moving civil values in and out of database columns.
//!
//! Drivers differ in how they hand values over, so this module speaks a
//! small neutral `SqlValue` type. Dates and date-times travel as UTC
//! timestamps, and times travel as `HH:MM:SS` text.

use crate::cal::TimePiece;
use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Error};
use crate::cal::offset::Offset;
use crate::instant::Instant;


/// A value as a database driver sees it.
#[derive(PartialEq, Debug, Clone)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Timestamp(Instant),
}

impl SqlValue {

    /// The name of this value’s type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Null          => "null",
            SqlValue::Bool(_)       => "bool",
            SqlValue::Integer(_)    => "integer",
            SqlValue::Float(_)      => "float",
            SqlValue::Text(_)       => "text",
            SqlValue::Bytes(_)      => "bytes",
            SqlValue::Timestamp(_)  => "timestamp",
        }
    }
}


/// Converting a value into something a driver can bind.
pub trait ToSql {
    fn to_sql(&self) -> Result<SqlValue, Error>;
}

/// Overwriting a value with one a driver read out of a column.
///
/// A `Null` leaves the receiver as it was.
pub trait Scan {
    fn scan(&mut self, value: SqlValue) -> Result<(), Error>;
}


fn unsupported(value: &SqlValue, into: &'static str) -> Error {
    debug!("refusing to scan {:?} into {}", value, into);
    Error::UnsupportedScanType { found: value.type_name(), into }
}


impl ToSql for LocalDate {

    /// Midnight at the start of the date, in UTC.
    fn to_sql(&self) -> Result<SqlValue, Error> {
        Ok(SqlValue::Timestamp(self.to_instant(Offset::utc())))
    }
}

impl Scan for LocalDate {
    fn scan(&mut self, value: SqlValue) -> Result<(), Error> {
        match value {
            SqlValue::Null          => Ok(()),
            SqlValue::Timestamp(i)  => { *self = Self::from_instant(i, Offset::utc()); Ok(()) },
            other                   => Err(unsupported(&other, "LocalDate")),
        }
    }
}


impl ToSql for LocalTime {

    /// Whole seconds only, as `HH:MM:SS`.
    fn to_sql(&self) -> Result<SqlValue, Error> {
        Ok(SqlValue::Text(format!("{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())))
    }
}

impl Scan for LocalTime {

    /// Takes the hour, minute, and second from a UTC timestamp or from
    /// strict time text, keeping the current fraction of a second.
    fn scan(&mut self, value: SqlValue) -> Result<(), Error> {
        let read = match value {
            SqlValue::Null          => return Ok(()),
            SqlValue::Timestamp(i)  => Self::from_instant(i, Offset::utc()),
            SqlValue::Text(s)       => s.parse()?,
            other                   => return Err(unsupported(&other, "LocalTime")),
        };

        *self = self.with_hms_of(read);
        Ok(())
    }
}


impl ToSql for LocalDateTime {

    /// The UTC timestamp of the date-time, with the fraction of a second
    /// dropped.
    fn to_sql(&self) -> Result<SqlValue, Error> {
        let instant = self.to_instant(Offset::utc());
        Ok(SqlValue::Timestamp(Instant::at(instant.seconds())))
    }
}

impl Scan for LocalDateTime {

    /// Takes everything down to the second from a UTC timestamp, keeping
    /// the current fraction of a second.
    fn scan(&mut self, value: SqlValue) -> Result<(), Error> {
        match value {
            SqlValue::Null          => Ok(()),
            SqlValue::Timestamp(i)  => {
                let read = Self::from_instant(i, Offset::utc());
                *self = Self::new(read.date(), self.time().with_hms_of(read.time()));
                Ok(())
            },
            other                   => Err(unsupported(&other, "LocalDateTime")),
        }
    }
}
