//! Party tracking use-case service.
//!
//! # Responsibility
//! - Maintain the party -> province -> district -> candidate tree.
//! - Place candidates by role: governor at the party slot, mayors inside
//!   the province or district they run in.
//!
//! # Invariants
//! - A candidate id appearing anywhere inside its party is replaced in
//!   place on save, wherever it currently lives.
//! - Deleting a province drops its districts and mayors with it.

use crate::collection::{contains, find_mut, remove, upsert};
use crate::model::party::{Candidate, District, Party, Province, Role};
use crate::model::RecordId;
use crate::service::normalize_name;
use crate::store::Dashboard;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from party tracking operations.
#[derive(Debug)]
pub enum PartyServiceError {
    /// Display name is blank after trim.
    BlankName,
    PartyNotFound(RecordId),
    ProvinceNotFound(RecordId),
    DistrictNotFound(RecordId),
    CandidateNotFound(RecordId),
    /// A new mayor candidate needs a province or district to be placed in.
    MissingLocation(Role),
}

impl Display for PartyServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "name must not be blank"),
            Self::PartyNotFound(id) => write!(f, "party not found: {id}"),
            Self::ProvinceNotFound(id) => write!(f, "province not found: {id}"),
            Self::DistrictNotFound(id) => write!(f, "district not found: {id}"),
            Self::CandidateNotFound(id) => write!(f, "candidate not found: {id}"),
            Self::MissingLocation(role) => {
                write!(f, "candidate role {role:?} requires a location id")
            }
        }
    }
}

impl Error for PartyServiceError {}

/// Service facade over the party collection.
pub struct PartyService<'a> {
    state: &'a mut Dashboard,
}

impl<'a> PartyService<'a> {
    pub fn new(state: &'a mut Dashboard) -> Self {
        Self { state }
    }

    /// Saves a party: replaces an existing record by id or appends it.
    pub fn save_party(&mut self, mut party: Party) -> Result<(), PartyServiceError> {
        party.name = normalize_name(&party.name).ok_or(PartyServiceError::BlankName)?;
        upsert(&mut self.state.parties, party);
        Ok(())
    }

    /// Deletes a party and, structurally, its whole candidate tree.
    pub fn delete_party(&mut self, party_id: RecordId) -> Result<(), PartyServiceError> {
        if !remove(&mut self.state.parties, party_id) {
            return Err(PartyServiceError::PartyNotFound(party_id));
        }
        Ok(())
    }

    /// Saves a province inside a party.
    pub fn save_province(
        &mut self,
        party_id: RecordId,
        mut province: Province,
    ) -> Result<(), PartyServiceError> {
        province.name = normalize_name(&province.name).ok_or(PartyServiceError::BlankName)?;
        let party = self.party_mut(party_id)?;
        upsert(&mut party.provinces, province);
        Ok(())
    }

    /// Deletes a province; its districts and mayors go with it.
    pub fn delete_province(
        &mut self,
        party_id: RecordId,
        province_id: RecordId,
    ) -> Result<(), PartyServiceError> {
        let party = self.party_mut(party_id)?;
        if !remove(&mut party.provinces, province_id) {
            return Err(PartyServiceError::ProvinceNotFound(province_id));
        }
        Ok(())
    }

    /// Saves a district inside a province.
    pub fn save_district(
        &mut self,
        party_id: RecordId,
        province_id: RecordId,
        mut district: District,
    ) -> Result<(), PartyServiceError> {
        district.name = normalize_name(&district.name).ok_or(PartyServiceError::BlankName)?;
        let party = self.party_mut(party_id)?;
        let province = find_mut(&mut party.provinces, province_id)
            .ok_or(PartyServiceError::ProvinceNotFound(province_id))?;
        upsert(&mut province.districts, district);
        Ok(())
    }

    /// Deletes a district and its mayors.
    pub fn delete_district(
        &mut self,
        party_id: RecordId,
        province_id: RecordId,
        district_id: RecordId,
    ) -> Result<(), PartyServiceError> {
        let party = self.party_mut(party_id)?;
        let province = find_mut(&mut party.provinces, province_id)
            .ok_or(PartyServiceError::ProvinceNotFound(province_id))?;
        if !remove(&mut province.districts, district_id) {
            return Err(PartyServiceError::DistrictNotFound(district_id));
        }
        Ok(())
    }

    /// Saves a candidate into its party, placing it by role.
    ///
    /// An existing candidate id is replaced wherever it currently lives.
    /// A new mayor needs `location_id`: the province id for a provincial
    /// mayor, the district id for a district mayor. Governors always go to
    /// the party's governor slot.
    pub fn save_candidate(
        &mut self,
        mut candidate: Candidate,
        location_id: Option<RecordId>,
    ) -> Result<(), PartyServiceError> {
        candidate.name = normalize_name(&candidate.name).ok_or(PartyServiceError::BlankName)?;
        let party_id = candidate.party_id;
        let party = self.party_mut(party_id)?;

        if candidate.role == Role::Governor {
            party.governor = Some(candidate);
            return Ok(());
        }

        if replace_mayor_in_place(party, &candidate) {
            return Ok(());
        }

        let location_id =
            location_id.ok_or(PartyServiceError::MissingLocation(candidate.role))?;
        match candidate.role {
            Role::ProvincialMayor => {
                let province = find_mut(&mut party.provinces, location_id)
                    .ok_or(PartyServiceError::ProvinceNotFound(location_id))?;
                province.mayors.push(candidate);
            }
            Role::DistrictMayor => {
                let district = party
                    .provinces
                    .iter_mut()
                    .find_map(|province| find_mut(&mut province.districts, location_id))
                    .ok_or(PartyServiceError::DistrictNotFound(location_id))?;
                district.mayors.push(candidate);
            }
            Role::Governor => unreachable!("governor handled above"),
        }
        Ok(())
    }

    /// Deletes a candidate from wherever it lives inside the party.
    pub fn delete_candidate(
        &mut self,
        party_id: RecordId,
        candidate_id: RecordId,
    ) -> Result<(), PartyServiceError> {
        let party = self.party_mut(party_id)?;

        if party
            .governor
            .as_ref()
            .is_some_and(|governor| governor.id == candidate_id)
        {
            party.governor = None;
            return Ok(());
        }

        for province in &mut party.provinces {
            if remove(&mut province.mayors, candidate_id) {
                return Ok(());
            }
            for district in &mut province.districts {
                if remove(&mut district.mayors, candidate_id) {
                    return Ok(());
                }
            }
        }

        Err(PartyServiceError::CandidateNotFound(candidate_id))
    }

    fn party_mut(&mut self, party_id: RecordId) -> Result<&mut Party, PartyServiceError> {
        find_mut(&mut self.state.parties, party_id)
            .ok_or(PartyServiceError::PartyNotFound(party_id))
    }
}

/// Replaces a mayor in place when its id already exists inside the party.
fn replace_mayor_in_place(party: &mut Party, candidate: &Candidate) -> bool {
    for province in &mut party.provinces {
        if contains(&province.mayors, candidate.id) {
            upsert(&mut province.mayors, candidate.clone());
            return true;
        }
        for district in &mut province.districts {
            if contains(&district.mayors, candidate.id) {
                upsert(&mut district.mayors, candidate.clone());
                return true;
            }
        }
    }
    false
}

/// Provinces ordered by descending voter count for display.
///
/// Render-time ordering only; the stored order is never mutated.
pub fn provinces_by_voters(party: &Party) -> Vec<&Province> {
    let mut provinces: Vec<&Province> = party.provinces.iter().collect();
    provinces.sort_by(|a, b| b.voters.cmp(&a.voters).then_with(|| a.name.cmp(&b.name)));
    provinces
}

/// Districts ordered by descending voter count for display.
pub fn districts_by_voters(province: &Province) -> Vec<&District> {
    let mut districts: Vec<&District> = province.districts.iter().collect();
    districts.sort_by(|a, b| b.voters.cmp(&a.voters).then_with(|| a.name.cmp(&b.name)));
    districts
}
