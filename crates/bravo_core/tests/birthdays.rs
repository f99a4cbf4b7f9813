use bravo_core::{
    birthday_board, Birthday, BirthdayService, BirthdayServiceError, Dashboard,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn save_and_delete_birthday() {
    let mut state = Dashboard::new();
    let mut birthday = Birthday::new("Ana Torres", date(1980, 11, 20));
    birthday.nickname = "Anita".to_string();
    let id = birthday.id;

    BirthdayService::new(&mut state).save_birthday(birthday.clone()).unwrap();
    assert_eq!(state.birthdays.len(), 1);

    birthday.nickname = "Ana".to_string();
    BirthdayService::new(&mut state).save_birthday(birthday).unwrap();
    assert_eq!(state.birthdays.len(), 1);
    assert_eq!(state.birthdays[0].nickname, "Ana");

    BirthdayService::new(&mut state).delete_birthday(id).unwrap();
    assert!(state.birthdays.is_empty());

    let err = BirthdayService::new(&mut state).delete_birthday(id).unwrap_err();
    assert!(matches!(err, BirthdayServiceError::BirthdayNotFound(missing) if missing == id));
}

#[test]
fn todays_birthday_is_not_listed_as_upcoming() {
    let today = date(2026, 8, 23);
    let birthdays = vec![
        Birthday::new("Hoy", date(1990, 8, 23)),
        Birthday::new("Luego", date(1990, 9, 1)),
    ];

    let board = birthday_board(&birthdays, today);
    assert_eq!(board.today.len(), 1);
    assert_eq!(board.today[0].name, "Hoy");
    assert_eq!(board.upcoming.len(), 1);
    assert_eq!(board.upcoming[0].birthday.name, "Luego");
}

#[test]
fn passed_birthday_wraps_to_next_year() {
    let today = date(2026, 8, 23);
    let birthdays = vec![Birthday::new("Pasado", date(1990, 3, 2))];

    let board = birthday_board(&birthdays, today);
    assert_eq!(board.upcoming[0].next_occurrence, date(2027, 3, 2));
}

#[test]
fn upcoming_is_ordered_by_nearest_occurrence() {
    let today = date(2026, 8, 23);
    let birthdays = vec![
        Birthday::new("Marzo", date(1990, 3, 10)),
        Birthday::new("Septiembre", date(1990, 9, 1)),
        Birthday::new("Diciembre", date(1990, 12, 25)),
    ];

    let board = birthday_board(&birthdays, today);
    let names: Vec<&str> = board
        .upcoming
        .iter()
        .map(|u| u.birthday.name.as_str())
        .collect();
    assert_eq!(names, vec!["Septiembre", "Diciembre", "Marzo"]);
}

#[test]
fn same_day_upcoming_ties_break_by_name() {
    let today = date(2026, 8, 23);
    let birthdays = vec![
        Birthday::new("Zoe", date(1990, 9, 1)),
        Birthday::new("Alba", date(1992, 9, 1)),
    ];

    let board = birthday_board(&birthdays, today);
    assert_eq!(board.upcoming[0].birthday.name, "Alba");
    assert_eq!(board.upcoming[1].birthday.name, "Zoe");
}
