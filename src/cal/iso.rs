//! Lenient ISO 8601 reading, for text that the strict readers turn away:
//! basic format without separators, week dates, and ordinal dates.

use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday, Error};


impl LocalDate {

    /// Reads any date form the `iso8601` crate understands.
    ///
    /// ```
    /// use civiltime::LocalDate;
    ///
    /// let date = LocalDate::from_iso("2015-W01-1").unwrap();
    /// assert_eq!(date.to_string(), "2014-12-29");
    /// ```
    pub fn from_iso(input: &str) -> Result<Self, Error> {
        let fields = iso8601::date(input).map_err(Error::Iso)?;
        fields_to_date(fields)
    }
}

impl LocalTime {

    /// Reads any time form the `iso8601` crate understands. Fractions are
    /// only kept to the millisecond, and any zone suffix is dropped.
    pub fn from_iso(input: &str) -> Result<Self, Error> {
        let fields = iso8601::time(input).map_err(Error::Iso)?;
        fields_to_time(fields)
    }
}

impl LocalDateTime {

    /// Reads any date-time form the `iso8601` crate understands. Any zone
    /// suffix is dropped.
    pub fn from_iso(input: &str) -> Result<Self, Error> {
        let fields = iso8601::datetime(input).map_err(Error::Iso)?;

        let date = fields_to_date(fields.date)?;
        let time = fields_to_time(fields.time)?;
        Ok(Self::new(date, time))
    }
}


fn fields_to_date(fields: iso8601::Date) -> Result<LocalDate, Error> {
    match fields {
        iso8601::Date::YMD { year, month, day } => {
            let month_variant = Month::from_one(month as i8)?;
            LocalDate::ymd(year as i64, month_variant, day as i8)
        },
        iso8601::Date::Week { year, ww, d } => {
            let weekday_variant = Weekday::from_one(d as i8)?;
            LocalDate::ywd(year as i64, ww as i64, weekday_variant)
        },
        iso8601::Date::Ordinal { year, ddd } => {
            LocalDate::yd(year as i64, ddd as i64)
        },
    }
}

fn fields_to_time(fields: iso8601::Time) -> Result<LocalTime, Error> {
    let h  = fields.hour as i8;
    let m  = fields.minute as i8;
    let s  = fields.second as i8;
    let ns = fields.millisecond as i32 * 1_000_000;

    LocalTime::hms_ns(h, m, s, ns)
}
