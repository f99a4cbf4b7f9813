//! Activity planning model: own activities, competitor activities and
//! scheduled events.

use crate::collection::Identified;
use crate::model::{new_record_id, RecordId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Activity carried out by the own campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyActivity {
    pub id: RecordId,
    pub description: String,
    pub date: NaiveDate,
    pub link: String,
}

impl MyActivity {
    pub fn new(description: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: new_record_id(),
            description: description.into(),
            date,
            link: String::new(),
        }
    }
}

impl Identified for MyActivity {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// Observed activity of a rival party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorActivity {
    pub id: RecordId,
    /// Rival party this activity belongs to.
    pub party_id: RecordId,
    pub description: String,
    pub link: String,
}

impl CompetitorActivity {
    pub fn new(party_id: RecordId, description: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            party_id,
            description: description.into(),
            link: String::new(),
        }
    }
}

impl Identified for CompetitorActivity {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// Planned campaign event on the activity planner tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedEvent {
    pub id: RecordId,
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
    pub location: String,
    pub link: String,
}

impl PlannedEvent {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: new_record_id(),
            title: title.into(),
            date,
            description: String::new(),
            location: String::new(),
            link: String::new(),
        }
    }
}

impl Identified for PlannedEvent {
    fn record_id(&self) -> RecordId {
        self.id
    }
}
