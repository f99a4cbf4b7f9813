//! Birthday reminder use-case service and derived reminder board.
//!
//! # Invariants
//! - A birthday matching today's month/day appears only in the today list.
//! - Upcoming entries are ordered by nearest next occurrence, then name.

use crate::collection::{remove, upsert};
use crate::model::birthday::Birthday;
use crate::model::RecordId;
use crate::service::normalize_name;
use crate::store::Dashboard;
use chrono::NaiveDate;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum BirthdayServiceError {
    BlankName,
    BirthdayNotFound(RecordId),
}

impl Display for BirthdayServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "name must not be blank"),
            Self::BirthdayNotFound(id) => write!(f, "birthday not found: {id}"),
        }
    }
}

impl Error for BirthdayServiceError {}

pub struct BirthdayService<'a> {
    state: &'a mut Dashboard,
}

impl<'a> BirthdayService<'a> {
    pub fn new(state: &'a mut Dashboard) -> Self {
        Self { state }
    }

    pub fn save_birthday(&mut self, mut birthday: Birthday) -> Result<(), BirthdayServiceError> {
        birthday.name = normalize_name(&birthday.name).ok_or(BirthdayServiceError::BlankName)?;
        upsert(&mut self.state.birthdays, birthday);
        Ok(())
    }

    pub fn delete_birthday(&mut self, birthday_id: RecordId) -> Result<(), BirthdayServiceError> {
        if !remove(&mut self.state.birthdays, birthday_id) {
            return Err(BirthdayServiceError::BirthdayNotFound(birthday_id));
        }
        Ok(())
    }
}

/// Upcoming birthday annotated with its computed next occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingBirthday {
    pub birthday: Birthday,
    pub next_occurrence: NaiveDate,
}

/// Reminder board partition rendered by the birthdays tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthdayBoard {
    /// Birthdays falling on `today`'s month/day.
    pub today: Vec<Birthday>,
    /// Everyone else, nearest next occurrence first.
    pub upcoming: Vec<UpcomingBirthday>,
}

/// Partitions birthdays into today's and upcoming relative to `today`.
///
/// `today` is passed in rather than read from the clock so callers (and
/// tests) control the reference day.
pub fn birthday_board(birthdays: &[Birthday], today: NaiveDate) -> BirthdayBoard {
    let mut todays = Vec::new();
    let mut upcoming = Vec::new();

    for birthday in birthdays {
        if birthday.falls_on(today) {
            todays.push(birthday.clone());
        } else {
            upcoming.push(UpcomingBirthday {
                next_occurrence: birthday.next_occurrence(today),
                birthday: birthday.clone(),
            });
        }
    }

    upcoming.sort_by(|a, b| {
        a.next_occurrence
            .cmp(&b.next_occurrence)
            .then_with(|| a.birthday.name.cmp(&b.birthday.name))
    });

    BirthdayBoard {
        today: todays,
        upcoming,
    }
}
