//! Media sentiment tracking model.

use crate::collection::Identified;
use crate::model::{new_record_id, RecordId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Editorial stance of a press mention towards the campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Tracked press or social-media mention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPost {
    pub id: RecordId,
    pub title: String,
    pub publication_date: NaiveDate,
    pub sentiment: Sentiment,
    pub summary: String,
    pub link: String,
}

impl MediaPost {
    pub fn new(
        title: impl Into<String>,
        publication_date: NaiveDate,
        sentiment: Sentiment,
    ) -> Self {
        Self {
            id: new_record_id(),
            title: title.into(),
            publication_date,
            sentiment,
            summary: String::new(),
            link: String::new(),
        }
    }
}

impl Identified for MediaPost {
    fn record_id(&self) -> RecordId {
        self.id
    }
}
