//! Regional-body roster model for one governing term.
//!
//! # Responsibility
//! - Define the slate of regional officials, councilors and the provincial
//!   and district candidate lists.
//!
//! # Invariants
//! - The body always holds exactly one governor and one vice-governor slot.
//! - Councilors inside a list are displayed ordered by ballot `number`.

use crate::collection::Identified;
use crate::model::{new_record_id, RecordId};
use serde::{Deserialize, Serialize};

/// Slot a regional official occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionalRole {
    Governor,
    ViceGovernor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// Governor or vice-governor of the regional body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalOfficial {
    pub id: RecordId,
    pub name: String,
    pub dni: String,
    pub role: RegionalRole,
}

impl RegionalOfficial {
    pub fn new(role: RegionalRole, name: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            dni: String::new(),
            role,
        }
    }
}

impl Identified for RegionalOfficial {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// Councilor entry on a regional, provincial or district list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Councilor {
    pub id: RecordId,
    pub name: String,
    pub dni: String,
    pub facebook_url: String,
    pub tiktok_url: String,
    pub gender: Gender,
    /// Fills the indigenous-community quota seat.
    pub is_community_quota: bool,
    pub is_affiliated: bool,
    /// Titular seat as opposed to alternate.
    pub is_primary: bool,
    pub phone: String,
    pub province: String,
    pub profession: String,
    /// Ballot position; lists render ascending by this value.
    pub number: u32,
}

impl Councilor {
    pub fn new(name: impl Into<String>, gender: Gender, number: u32) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            dni: String::new(),
            facebook_url: String::new(),
            tiktok_url: String::new(),
            gender,
            is_community_quota: false,
            is_affiliated: false,
            is_primary: true,
            phone: String::new(),
            province: String::new(),
            profession: String::new(),
            number,
        }
    }
}

impl Identified for Councilor {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// Mayor candidate attached to a provincial or district list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMayor {
    pub id: RecordId,
    pub name: String,
    pub nickname: String,
    pub dni: String,
    pub facebook_url: String,
    pub tiktok_url: String,
    pub is_affiliated: bool,
    pub gender: Gender,
    pub phone: String,
}

impl ListMayor {
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            nickname: String::new(),
            dni: String::new(),
            facebook_url: String::new(),
            tiktok_url: String::new(),
            is_affiliated: false,
            gender,
            phone: String::new(),
        }
    }
}

impl Identified for ListMayor {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// District-level candidate list nested inside a provincial list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictList {
    pub id: RecordId,
    pub district_name: String,
    pub voters: u32,
    pub mayor: Option<ListMayor>,
    pub councilors: Vec<Councilor>,
}

impl DistrictList {
    pub fn new(district_name: impl Into<String>, voters: u32) -> Self {
        Self {
            id: new_record_id(),
            district_name: district_name.into(),
            voters,
            mayor: None,
            councilors: Vec::new(),
        }
    }
}

impl Identified for DistrictList {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// Province-level candidate list with nested district lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvincialList {
    pub id: RecordId,
    pub province_name: String,
    pub voters: u32,
    pub mayor: Option<ListMayor>,
    pub councilors: Vec<Councilor>,
    pub district_lists: Vec<DistrictList>,
}

impl ProvincialList {
    pub fn new(province_name: impl Into<String>, voters: u32) -> Self {
        Self {
            id: new_record_id(),
            province_name: province_name.into(),
            voters,
            mayor: None,
            councilors: Vec::new(),
            district_lists: Vec::new(),
        }
    }
}

impl Identified for ProvincialList {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// Singleton roster for the whole governing term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalBody {
    pub governor: RegionalOfficial,
    pub vice_governor: RegionalOfficial,
    pub regional_councilors: Vec<Councilor>,
    pub provincial_lists: Vec<ProvincialList>,
}

impl RegionalBody {
    /// Creates an empty roster with placeholder officials.
    pub fn empty() -> Self {
        Self {
            governor: RegionalOfficial::new(RegionalRole::Governor, ""),
            vice_governor: RegionalOfficial::new(RegionalRole::ViceGovernor, ""),
            regional_councilors: Vec::new(),
            provincial_lists: Vec::new(),
        }
    }
}
