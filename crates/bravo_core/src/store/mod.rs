//! In-memory dashboard state.
//!
//! # Responsibility
//! - Own every top-level collection the nine tabs render.
//! - Provide the empty and seeded startup states.
//!
//! # Invariants
//! - State is transient process memory; there is no persistence layer.
//! - Mutation goes through the service layer's save/delete contract only.

mod seed;

use crate::model::activity::{CompetitorActivity, MyActivity, PlannedEvent};
use crate::model::birthday::Birthday;
use crate::model::coordinator::CoordinatorProvince;
use crate::model::media::MediaPost;
use crate::model::party::Party;
use crate::model::propaganda::{Design, PropagandaProvince};
use crate::model::regional::RegionalBody;
use crate::model::ticket::PresidentialCandidate;
use crate::model::troll::TrollTarget;
use serde::{Deserialize, Serialize};

/// Root state container behind all dashboard tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub parties: Vec<Party>,
    pub my_activities: Vec<MyActivity>,
    pub competitor_activities: Vec<CompetitorActivity>,
    pub planned_events: Vec<PlannedEvent>,
    pub birthdays: Vec<Birthday>,
    pub media_posts: Vec<MediaPost>,
    pub troll_targets: Vec<TrollTarget>,
    pub regional_body: RegionalBody,
    pub presidential_candidates: Vec<PresidentialCandidate>,
    pub coordinator_provinces: Vec<CoordinatorProvince>,
    pub propaganda_provinces: Vec<PropagandaProvince>,
    pub designs: Vec<Design>,
}

impl Dashboard {
    /// Creates the empty dashboard state.
    pub fn new() -> Self {
        Self {
            parties: Vec::new(),
            my_activities: Vec::new(),
            competitor_activities: Vec::new(),
            planned_events: Vec::new(),
            birthdays: Vec::new(),
            media_posts: Vec::new(),
            troll_targets: Vec::new(),
            regional_body: RegionalBody::empty(),
            presidential_candidates: Vec::new(),
            coordinator_provinces: Vec::new(),
            propaganda_provinces: Vec::new(),
            designs: Vec::new(),
        }
    }

    /// Creates the dashboard pre-filled with the fictitious sample content
    /// the UI boots from.
    pub fn seeded() -> Self {
        seed::seeded_dashboard()
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
