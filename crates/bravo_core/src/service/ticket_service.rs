//! National-ticket use-case service.
//!
//! # Responsibility
//! - Maintain presidential candidates and their congressional slates.
//!
//! # Invariants
//! - At most one senator per slate; at most `MAX_DEPUTIES` deputies.
//! - The ticket renders ascending by polling rank.

use crate::collection::{find_mut, remove, upsert};
use crate::model::ticket::{CongressionalMember, PresidentialCandidate, MAX_DEPUTIES};
use crate::model::RecordId;
use crate::service::normalize_name;
use crate::store::Dashboard;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum TicketServiceError {
    BlankName,
    CandidateNotFound(RecordId),
    MemberNotFound(RecordId),
    /// The slate already holds `MAX_DEPUTIES` deputies.
    DeputyListFull(RecordId),
}

impl Display for TicketServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "name must not be blank"),
            Self::CandidateNotFound(id) => write!(f, "presidential candidate not found: {id}"),
            Self::MemberNotFound(id) => write!(f, "congressional member not found: {id}"),
            Self::DeputyListFull(id) => write!(
                f,
                "deputy list for candidate {id} already holds {MAX_DEPUTIES} members"
            ),
        }
    }
}

impl Error for TicketServiceError {}

pub struct TicketService<'a> {
    state: &'a mut Dashboard,
}

impl<'a> TicketService<'a> {
    pub fn new(state: &'a mut Dashboard) -> Self {
        Self { state }
    }

    pub fn save_candidate(
        &mut self,
        mut candidate: PresidentialCandidate,
    ) -> Result<(), TicketServiceError> {
        candidate.candidate_name =
            normalize_name(&candidate.candidate_name).ok_or(TicketServiceError::BlankName)?;
        upsert(&mut self.state.presidential_candidates, candidate);
        Ok(())
    }

    /// Deletes a presidential candidate together with its slate.
    pub fn delete_candidate(&mut self, candidate_id: RecordId) -> Result<(), TicketServiceError> {
        if !remove(&mut self.state.presidential_candidates, candidate_id) {
            return Err(TicketServiceError::CandidateNotFound(candidate_id));
        }
        Ok(())
    }

    pub fn set_senator(
        &mut self,
        candidate_id: RecordId,
        mut senator: CongressionalMember,
    ) -> Result<(), TicketServiceError> {
        senator.name = normalize_name(&senator.name).ok_or(TicketServiceError::BlankName)?;
        let candidate = self.candidate_mut(candidate_id)?;
        candidate.senator = Some(senator);
        Ok(())
    }

    pub fn clear_senator(&mut self, candidate_id: RecordId) -> Result<(), TicketServiceError> {
        let candidate = self.candidate_mut(candidate_id)?;
        match candidate.senator.take() {
            Some(_) => Ok(()),
            None => Err(TicketServiceError::MemberNotFound(candidate_id)),
        }
    }

    /// Upserts a deputy, rejecting additions past the slate cap.
    pub fn save_deputy(
        &mut self,
        candidate_id: RecordId,
        mut deputy: CongressionalMember,
    ) -> Result<(), TicketServiceError> {
        deputy.name = normalize_name(&deputy.name).ok_or(TicketServiceError::BlankName)?;
        let candidate = self.candidate_mut(candidate_id)?;

        let is_update = candidate.deputies.iter().any(|d| d.id == deputy.id);
        if !is_update && candidate.deputies.len() >= MAX_DEPUTIES {
            return Err(TicketServiceError::DeputyListFull(candidate_id));
        }
        upsert(&mut candidate.deputies, deputy);
        Ok(())
    }

    pub fn delete_deputy(
        &mut self,
        candidate_id: RecordId,
        deputy_id: RecordId,
    ) -> Result<(), TicketServiceError> {
        let candidate = self.candidate_mut(candidate_id)?;
        if !remove(&mut candidate.deputies, deputy_id) {
            return Err(TicketServiceError::MemberNotFound(deputy_id));
        }
        Ok(())
    }

    fn candidate_mut(
        &mut self,
        candidate_id: RecordId,
    ) -> Result<&mut PresidentialCandidate, TicketServiceError> {
        find_mut(&mut self.state.presidential_candidates, candidate_id)
            .ok_or(TicketServiceError::CandidateNotFound(candidate_id))
    }
}

/// Presidential candidates ordered ascending by polling rank for display.
pub fn ticket_by_rank(candidates: &[PresidentialCandidate]) -> Vec<&PresidentialCandidate> {
    let mut ticket: Vec<&PresidentialCandidate> = candidates.iter().collect();
    ticket.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.candidate_name.cmp(&b.candidate_name)));
    ticket
}
