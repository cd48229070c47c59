use civiltime::{LocalDate, LocalTime, LocalDateTime, LunarCalendar, Error};


/// Shifts every date by a fixed number of months, which is enough to watch
/// values travel through the trait.
struct MonthsBehind(i8);

impl LunarCalendar for MonthsBehind {
    fn to_lunar(&self, year: i64, month: i8, day: i8) -> (i64, i8, i8) {
        let zero_based = (month - 1 - self.0) as i64;
        (year + zero_based.div_euclid(12), (zero_based.rem_euclid(12) + 1) as i8, day)
    }

    fn to_solar(&self, year: i64, month: i8, day: i8) -> (i64, i8, i8) {
        let zero_based = (month - 1 + self.0) as i64;
        (year + zero_based.div_euclid(12), (zero_based.rem_euclid(12) + 1) as i8, day)
    }
}


#[test]
fn there_and_back() {
    let calendar = MonthsBehind(1);
    let solar = LocalDate::from_ymd(2024, 2, 10).unwrap();

    let lunar = solar.to_lunar(&calendar).unwrap();
    assert_eq!(lunar, LocalDate::from_ymd(2024, 1, 10).unwrap());
    assert_eq!(lunar.to_solar(&calendar), Ok(solar));
}

#[test]
fn across_a_year() {
    let lunar = LocalDate::from_ymd(2023, 12, 1).unwrap().to_solar(&MonthsBehind(1));
    assert_eq!(lunar, LocalDate::from_ymd(2024, 1, 1));
}

#[test]
fn days_the_other_calendar_lacks() {
    let solar = LocalDate::from_ymd(2023, 3, 29).unwrap();
    assert_eq!(solar.to_lunar(&MonthsBehind(1)), Err(Error::ImpossibleDate("2023-02-29".into())));
}

#[test]
fn datetimes() {
    let dt = LocalDateTime::new(LocalDate::from_ymd(2024, 5, 5).unwrap(),
                                LocalTime::hms_ns(8, 0, 0, 1).unwrap());

    let lunar = dt.to_lunar(&MonthsBehind(2)).unwrap();
    assert_eq!(lunar.to_string(), "2024-03-05T08:00:00.000000001");

    let boxed: Box<dyn LunarCalendar> = Box::new(MonthsBehind(2));
    assert_eq!(lunar.to_solar(&*boxed), Ok(dt));
}
