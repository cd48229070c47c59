use civiltime::{LocalDate, Month, Error, days_in, MIN_YEAR, MAX_YEAR};
use civiltime::DatePiece;


#[test]
fn the_distant_past() {
    let date = LocalDate::ymd(7, Month::April, 1).unwrap();

    assert_eq!(date.year(),  7);
    assert_eq!(date.month(), Month::April);
    assert_eq!(date.day(),   1);
}


#[test]
fn the_distant_present() {
    let date = LocalDate::from_ymd(2015, 1, 16).unwrap();

    assert_eq!(date.year(),  2015);
    assert_eq!(date.month(), Month::January);
    assert_eq!(date.day(),   16);
}


#[test]
fn the_distant_future() {
    let date = LocalDate::ymd(1048576, Month::October, 13).unwrap();

    assert_eq!(date.year(), 1048576);
    assert_eq!(date.month(), Month::October);
    assert_eq!(date.day(), 13);
}


#[test]
fn numeric_months_must_exist() {
    assert_eq!(LocalDate::from_ymd(2015, 0, 1), Err(Error::ImpossibleDate("2015-00-01".into())));
    assert_eq!(LocalDate::from_ymd(2015, 13, 1), Err(Error::ImpossibleDate("2015-13-01".into())));
}


#[test]
fn days_must_exist() {
    assert!(LocalDate::from_ymd(2015, 4, 31).is_err());
    assert!(LocalDate::from_ymd(2015, 4, 0).is_err());
    assert!(LocalDate::ymd(2015, Month::April, 31).is_err());
}


#[test]
fn every_day_survives_text() {
    for year in 1599 ..= 2401 {
        for month in 1 ..= 12 {
            for day in 1 ..= days_in(month, year) {
                let date = LocalDate::from_ymd(year, month, day).unwrap();
                let read: LocalDate = date.to_string().parse().unwrap();

                assert_eq!((read.year(), read.month() as i8, read.day()), (year, month, day),
                           "{:04}-{:02}-{:02}", year, month, day);
            }
        }
    }
}

#[test]
fn leap_days_of_the_400_year_cycle() {
    for &year in &[-400, 0, 400, 1600, 2000, 2400] {
        let date = LocalDate::from_ymd(year, 2, 29).unwrap();
        assert_eq!(date.month(), Month::February);
        assert_eq!(date.day(), 29);
        assert_eq!(date.yearday(), 60);
        assert!(date.before(&LocalDate::from_ymd(year, 3, 1).unwrap()));
    }
}


#[test]
fn years_out_of_range() {
    assert_eq!(LocalDate::from_ymd(99_999_999_999_999_999, 1, 1), Err(Error::OutOfRange));
    assert_eq!(LocalDate::ymd(MAX_YEAR + 1, Month::January, 1), Err(Error::OutOfRange));
    assert_eq!(LocalDate::ymd(MIN_YEAR - 1, Month::December, 31), Err(Error::OutOfRange));
    assert!(LocalDate::ymd(MAX_YEAR, Month::December, 31).is_ok());
    assert!(LocalDate::ymd(MIN_YEAR, Month::January, 1).is_ok());
}
