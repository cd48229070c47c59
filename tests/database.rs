use civiltime::{LocalDate, LocalTime, LocalDateTime, Instant, Error};
use civiltime::{SqlValue, ToSql, Scan};


#[test]
fn date_survives_a_column() {
    let date = LocalDate::from_ymd(2012, 2, 29).unwrap();
    let mut read = LocalDate::from_ymd(1970, 1, 1).unwrap();
    read.scan(date.to_sql().unwrap()).unwrap();
    assert_eq!(read, date);
}

#[test]
fn time_survives_a_column() {
    let time = LocalTime::hms(6, 7, 8).unwrap();
    let mut read = LocalTime::midnight();
    read.scan(time.to_sql().unwrap()).unwrap();
    assert_eq!(read, time);
}

#[test]
fn datetime_loses_only_its_fraction() {
    let dt: LocalDateTime = "2038-01-19T03:14:07.75".parse().unwrap();
    let mut read: LocalDateTime = "1970-01-01T00:00:00".parse().unwrap();
    read.scan(dt.to_sql().unwrap()).unwrap();
    assert_eq!(read.to_string(), "2038-01-19T03:14:07");
}

#[test]
fn datetime_timestamp() {
    let dt: LocalDateTime = "2038-01-19T03:14:07".parse().unwrap();
    assert_eq!(dt.to_sql(), Ok(SqlValue::Timestamp(Instant::at(2_147_483_647))));
}

#[test]
fn nulls_change_nothing() {
    let mut dt: LocalDateTime = "2001-09-09T01:46:40".parse().unwrap();
    dt.scan(SqlValue::Null).unwrap();
    assert_eq!(dt.to_string(), "2001-09-09T01:46:40");

    let mut time = LocalTime::hms(1, 2, 3).unwrap();
    time.scan(SqlValue::Null).unwrap();
    assert_eq!(time, LocalTime::hms(1, 2, 3).unwrap());
}

#[test]
fn wrong_types() {
    let mut date = LocalDate::from_ymd(2000, 1, 1).unwrap();
    assert_eq!(date.scan(SqlValue::Float(1.5)),
               Err(Error::UnsupportedScanType { found: "float", into: "LocalDate" }));

    let mut time = LocalTime::midnight();
    assert_eq!(time.scan(SqlValue::Bool(true)),
               Err(Error::UnsupportedScanType { found: "bool", into: "LocalTime" }));

    let mut dt: LocalDateTime = "2000-01-01T00:00:00".parse().unwrap();
    assert_eq!(dt.scan(SqlValue::Text("2000-01-01T00:00:00".into())),
               Err(Error::UnsupportedScanType { found: "text", into: "LocalDateTime" }));
}
