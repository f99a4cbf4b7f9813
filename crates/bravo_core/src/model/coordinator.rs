//! Grassroots coordinator directory: province -> district -> coordinator.

use crate::collection::Identified;
use crate::model::{new_record_id, RecordId};
use crate::phone::whatsapp_link;
use serde::{Deserialize, Serialize};

/// Grassroots contact person for one district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinator {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub phone: String,
}

impl Coordinator {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            description: String::new(),
            phone: phone.into(),
        }
    }

    /// WhatsApp deep link for the stored phone, if it contains digits.
    pub fn whatsapp_link(&self) -> Option<String> {
        whatsapp_link(&self.phone)
    }
}

impl Identified for Coordinator {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatorDistrict {
    pub id: RecordId,
    pub name: String,
    pub coordinators: Vec<Coordinator>,
}

impl CoordinatorDistrict {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            coordinators: Vec::new(),
        }
    }
}

impl Identified for CoordinatorDistrict {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatorProvince {
    pub id: RecordId,
    pub name: String,
    pub districts: Vec<CoordinatorDistrict>,
}

impl CoordinatorProvince {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            districts: Vec::new(),
        }
    }
}

impl Identified for CoordinatorProvince {
    fn record_id(&self) -> RecordId {
        self.id
    }
}
