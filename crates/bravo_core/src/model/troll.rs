//! Troll-account tracking model: adversarial or supportive social accounts
//! grouped by campaign objective.

use crate::collection::Identified;
use crate::model::{new_record_id, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Facebook,
    Tiktok,
}

/// Tracked social-media account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrollAccount {
    pub id: RecordId,
    pub name: String,
    pub platform: Platform,
    pub description: String,
    pub link: String,
}

impl TrollAccount {
    pub fn new(name: impl Into<String>, platform: Platform) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            platform,
            description: String::new(),
            link: String::new(),
        }
    }
}

impl Identified for TrollAccount {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// Campaign objective grouping a set of tracked accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrollTarget {
    pub id: RecordId,
    pub name: String,
    pub trolls: Vec<TrollAccount>,
}

impl TrollTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            trolls: Vec::new(),
        }
    }
}

impl Identified for TrollTarget {
    fn record_id(&self) -> RecordId {
        self.id
    }
}
