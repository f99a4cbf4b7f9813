//! Propaganda logistics: placement records per province/district plus the
//! flat catalog of downloadable designs.

use crate::collection::Identified;
use crate::model::{new_record_id, RecordId};
use crate::phone::whatsapp_link;
use serde::{Deserialize, Serialize};

/// Physical campaign-material placement record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropagandaItem {
    pub id: RecordId,
    pub description: String,
    /// Contact phone of the placement owner.
    pub phone: String,
    pub external_link: String,
}

impl PropagandaItem {
    pub fn new(description: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            description: description.into(),
            phone: phone.into(),
            external_link: String::new(),
        }
    }

    /// WhatsApp deep link for the stored phone, if it contains digits.
    pub fn whatsapp_link(&self) -> Option<String> {
        whatsapp_link(&self.phone)
    }
}

impl Identified for PropagandaItem {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropagandaDistrict {
    pub id: RecordId,
    pub name: String,
    pub items: Vec<PropagandaItem>,
}

impl PropagandaDistrict {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            items: Vec::new(),
        }
    }
}

impl Identified for PropagandaDistrict {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropagandaProvince {
    pub id: RecordId,
    pub name: String,
    pub districts: Vec<PropagandaDistrict>,
}

impl PropagandaProvince {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            name: name.into(),
            districts: Vec::new(),
        }
    }
}

impl Identified for PropagandaProvince {
    fn record_id(&self) -> RecordId {
        self.id
    }
}

/// Reusable downloadable artwork asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub id: RecordId,
    pub title: String,
    pub preview_image_url: String,
    /// Physical dimensions, free text (for example "3m x 2m").
    pub dimensions: String,
    /// Artwork category, free text (banner, flyer, mural).
    pub kind: String,
    pub featured_people: String,
    pub download_link: String,
}

impl Design {
    pub fn new(title: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            title: title.into(),
            preview_image_url: String::new(),
            dimensions: String::new(),
            kind: kind.into(),
            featured_people: String::new(),
            download_link: String::new(),
        }
    }
}

impl Identified for Design {
    fn record_id(&self) -> RecordId {
        self.id
    }
}
