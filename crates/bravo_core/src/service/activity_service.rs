//! Activity planning use-case service.
//!
//! # Responsibility
//! - Track own activities, observed competitor activities and planned
//!   events.
//!
//! # Invariants
//! - A competitor activity must reference an existing party.
//! - The planner renders events ascending by date.

use crate::collection::{contains, remove, upsert};
use crate::model::activity::{CompetitorActivity, MyActivity, PlannedEvent};
use crate::model::RecordId;
use crate::service::normalize_name;
use crate::store::Dashboard;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ActivityServiceError {
    BlankDescription,
    ActivityNotFound(RecordId),
    EventNotFound(RecordId),
    /// Competitor activity references a party that does not exist.
    UnknownParty(RecordId),
}

impl Display for ActivityServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankDescription => write!(f, "description must not be blank"),
            Self::ActivityNotFound(id) => write!(f, "activity not found: {id}"),
            Self::EventNotFound(id) => write!(f, "planned event not found: {id}"),
            Self::UnknownParty(id) => write!(f, "activity references unknown party: {id}"),
        }
    }
}

impl Error for ActivityServiceError {}

pub struct ActivityService<'a> {
    state: &'a mut Dashboard,
}

impl<'a> ActivityService<'a> {
    pub fn new(state: &'a mut Dashboard) -> Self {
        Self { state }
    }

    pub fn save_my_activity(&mut self, mut activity: MyActivity) -> Result<(), ActivityServiceError> {
        activity.description =
            normalize_name(&activity.description).ok_or(ActivityServiceError::BlankDescription)?;
        upsert(&mut self.state.my_activities, activity);
        Ok(())
    }

    pub fn delete_my_activity(&mut self, activity_id: RecordId) -> Result<(), ActivityServiceError> {
        if !remove(&mut self.state.my_activities, activity_id) {
            return Err(ActivityServiceError::ActivityNotFound(activity_id));
        }
        Ok(())
    }

    pub fn save_competitor_activity(
        &mut self,
        mut activity: CompetitorActivity,
    ) -> Result<(), ActivityServiceError> {
        activity.description =
            normalize_name(&activity.description).ok_or(ActivityServiceError::BlankDescription)?;
        if !contains(&self.state.parties, activity.party_id) {
            return Err(ActivityServiceError::UnknownParty(activity.party_id));
        }
        upsert(&mut self.state.competitor_activities, activity);
        Ok(())
    }

    pub fn delete_competitor_activity(
        &mut self,
        activity_id: RecordId,
    ) -> Result<(), ActivityServiceError> {
        if !remove(&mut self.state.competitor_activities, activity_id) {
            return Err(ActivityServiceError::ActivityNotFound(activity_id));
        }
        Ok(())
    }

    pub fn save_event(&mut self, mut event: PlannedEvent) -> Result<(), ActivityServiceError> {
        event.title =
            normalize_name(&event.title).ok_or(ActivityServiceError::BlankDescription)?;
        upsert(&mut self.state.planned_events, event);
        Ok(())
    }

    pub fn delete_event(&mut self, event_id: RecordId) -> Result<(), ActivityServiceError> {
        if !remove(&mut self.state.planned_events, event_id) {
            return Err(ActivityServiceError::EventNotFound(event_id));
        }
        Ok(())
    }
}

/// Planned events ordered ascending by date for the planner view.
pub fn events_by_date(events: &[PlannedEvent]) -> Vec<&PlannedEvent> {
    let mut ordered: Vec<&PlannedEvent> = events.iter().collect();
    ordered.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.title.cmp(&b.title)));
    ordered
}
