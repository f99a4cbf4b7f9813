//! Party tracking model: parties, provinces, districts and candidates.
//!
//! # Responsibility
//! - Define the party hierarchy rendered by the situational-status tab.
//! - Tag candidates with the office they run for.
//!
//! # Invariants
//! - A party holds at most one governor candidate.
//! - Provinces own their districts; districts own their mayors. Deleting a
//!   parent drops the whole branch by structural containment.
//! - `Candidate::party_id` always references the owning party.

use crate::collection::Identified;
use crate::model::{new_record_id, RecordId};
use serde::{Deserialize, Serialize};

/// Elected office a candidate runs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regional governor slate head.
    Governor,
    /// Province-level mayor.
    ProvincialMayor,
    /// District-level mayor.
    DistrictMayor,
}

/// Tracked candidate for any of the three offices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: RecordId,
    /// Owning party reference.
    pub party_id: RecordId,
    pub role: Role,
    pub name: String,
    pub photo_url: String,
    pub dni: String,
    pub nickname: String,
    pub is_affiliated: bool,
    pub facebook_url: String,
    pub tiktok_url: String,
    /// Polling rank among rivals for the same seat.
    pub rank: u32,
}

impl Candidate {
    /// Creates a candidate with a generated stable id and empty display
    /// fields.
    pub fn new(party_id: RecordId, role: Role, name: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            party_id,
            role,
            name: name.into(),
            photo_url: String::new(),
            dni: String::new(),
            nickname: String::new(),
            is_affiliated: false,
            facebook_url: String::new(),
            tiktok_url: String::new(),
            rank: 0,
        }
    }
}

impl Identified for Candidate {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// Administrative district inside a province.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub id: RecordId,
    pub name: String,
    /// Registered voter count used for display ordering.
    pub voters: u32,
    pub mayors: Vec<Candidate>,
}

impl District {
    pub fn new(name: impl Into<String>, voters: u32) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            voters,
            mayors: Vec::new(),
        }
    }
}

impl Identified for District {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// Administrative province scoping mayors and districts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Province {
    pub id: RecordId,
    pub name: String,
    pub voters: u32,
    pub mayors: Vec<Candidate>,
    pub districts: Vec<District>,
}

impl Province {
    pub fn new(name: impl Into<String>, voters: u32) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            voters,
            mayors: Vec::new(),
            districts: Vec::new(),
        }
    }
}

impl Identified for Province {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// Political organization fielding candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub logo_url: String,
    /// Slate head. `None` until a governor candidate is registered.
    pub governor: Option<Candidate>,
    pub provinces: Vec<Province>,
}

impl Party {
    /// Creates a party with no governor and no provinces.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            description: description.into(),
            logo_url: String::new(),
            governor: None,
            provinces: Vec::new(),
        }
    }
}

impl Identified for Party {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::{Party, Role};

    #[test]
    fn party_serializes_with_camel_case_keys() {
        let party = Party::new("Fuerza Andina", "desc");
        let json = serde_json::to_string(&party).expect("party should serialize");
        assert!(json.contains("\"logoUrl\""));
        assert!(json.contains("\"governor\":null"));
    }

    #[test]
    fn role_serializes_snake_case() {
        let json = serde_json::to_string(&Role::ProvincialMayor).expect("role should serialize");
        assert_eq!(json, "\"provincial_mayor\"");
    }
}
