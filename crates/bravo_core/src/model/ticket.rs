//! National-ticket tracker model: presidential candidates with their
//! congressional slates.
//!
//! # Invariants
//! - A presidential candidate carries at most one senator.
//! - The deputy list never grows beyond `MAX_DEPUTIES`.

use crate::collection::Identified;
use crate::model::{new_record_id, RecordId};
use serde::{Deserialize, Serialize};

/// Hard cap on deputies per presidential slate.
pub const MAX_DEPUTIES: usize = 5;

/// Senator or deputy on a presidential slate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CongressionalMember {
    pub id: RecordId,
    pub name: String,
    pub photo_url: String,
    pub facebook_url: String,
    pub tiktok_url: String,
}

impl CongressionalMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            photo_url: String::new(),
            facebook_url: String::new(),
            tiktok_url: String::new(),
        }
    }
}

impl Identified for CongressionalMember {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// Presidential candidate with polling rank and congressional slate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresidentialCandidate {
    pub id: RecordId,
    /// Polling rank; the ticket tab renders ascending by this value.
    pub rank: u32,
    pub candidate_name: String,
    pub candidate_description: String,
    pub party_name: String,
    pub party_symbol_url: String,
    pub senator: Option<CongressionalMember>,
    pub deputies: Vec<CongressionalMember>,
}

impl PresidentialCandidate {
    pub fn new(candidate_name: impl Into<String>, party_name: impl Into<String>, rank: u32) -> Self {
        Self {
            id: new_record_id(),
            rank,
            candidate_name: candidate_name.into(),
            candidate_description: String::new(),
            party_name: party_name.into(),
            party_symbol_url: String::new(),
            senator: None,
            deputies: Vec::new(),
        }
    }
}

impl Identified for PresidentialCandidate {
    fn record_id(&self) -> RecordId {
        self.id
    }
}
