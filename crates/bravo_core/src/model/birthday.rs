//! Birthday reminder model.

use crate::collection::Identified;
use crate::model::{new_record_id, RecordId};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Tracked birthday of a campaign contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Birthday {
    pub id: RecordId,
    pub name: String,
    pub nickname: String,
    /// Stored as a full date; only month/day drive the reminders.
    pub birthdate: NaiveDate,
}

impl Birthday {
    pub fn new(name: impl Into<String>, birthdate: NaiveDate) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            nickname: String::new(),
            birthdate,
        }
    }

    /// Whether this birthday falls on the given calendar day.
    pub fn falls_on(&self, day: NaiveDate) -> bool {
        self.birthdate.month() == day.month() && self.birthdate.day() == day.day()
    }

    /// Next occurrence on or after `today`.
    ///
    /// A Feb 29 birthdate is observed on Mar 1 in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = observed_on(today.year(), self.birthdate);
        if this_year >= today {
            this_year
        } else {
            observed_on(today.year() + 1, self.birthdate)
        }
    }
}

fn observed_on(year: i32, birthdate: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthdate.month(), birthdate.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("march 1st always exists"))
}

impl Identified for Birthday {
    fn record_id(&self) -> RecordId {
        self.id
    }
}
