//! Regional-body roster use-case service.
//!
//! # Responsibility
//! - Maintain the singleton roster: officials, regional councilors and the
//!   provincial/district candidate lists.
//!
//! # Invariants
//! - The governor slot only accepts `RegionalRole::Governor`, the vice slot
//!   only `RegionalRole::ViceGovernor`.
//! - District lists always live inside a provincial list.

use crate::collection::{find_mut, remove, upsert};
use crate::model::regional::{
    Councilor, DistrictList, ListMayor, ProvincialList, RegionalBody, RegionalOfficial,
    RegionalRole,
};
use crate::model::RecordId;
use crate::service::normalize_name;
use crate::store::Dashboard;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum RegionalServiceError {
    BlankName,
    /// An official was submitted for the wrong slot.
    RoleMismatch {
        expected: RegionalRole,
        actual: RegionalRole,
    },
    ProvincialListNotFound(RecordId),
    DistrictListNotFound(RecordId),
    CouncilorNotFound(RecordId),
}

impl Display for RegionalServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "name must not be blank"),
            Self::RoleMismatch { expected, actual } => {
                write!(f, "official slot expects {expected:?}, got {actual:?}")
            }
            Self::ProvincialListNotFound(id) => write!(f, "provincial list not found: {id}"),
            Self::DistrictListNotFound(id) => write!(f, "district list not found: {id}"),
            Self::CouncilorNotFound(id) => write!(f, "councilor not found: {id}"),
        }
    }
}

impl Error for RegionalServiceError {}

/// Service facade over the singleton regional roster.
pub struct RegionalService<'a> {
    state: &'a mut Dashboard,
}

impl<'a> RegionalService<'a> {
    pub fn new(state: &'a mut Dashboard) -> Self {
        Self { state }
    }

    /// Replaces the whole roster after validating the official slots.
    pub fn replace_body(&mut self, body: RegionalBody) -> Result<(), RegionalServiceError> {
        expect_role(&body.governor, RegionalRole::Governor)?;
        expect_role(&body.vice_governor, RegionalRole::ViceGovernor)?;
        self.state.regional_body = body;
        Ok(())
    }

    /// Saves an official into the slot its role selects.
    pub fn save_official(
        &mut self,
        mut official: RegionalOfficial,
    ) -> Result<(), RegionalServiceError> {
        official.name = normalize_name(&official.name).ok_or(RegionalServiceError::BlankName)?;
        match official.role {
            RegionalRole::Governor => self.state.regional_body.governor = official,
            RegionalRole::ViceGovernor => self.state.regional_body.vice_governor = official,
        }
        Ok(())
    }

    pub fn save_regional_councilor(
        &mut self,
        mut councilor: Councilor,
    ) -> Result<(), RegionalServiceError> {
        councilor.name = normalize_name(&councilor.name).ok_or(RegionalServiceError::BlankName)?;
        upsert(&mut self.state.regional_body.regional_councilors, councilor);
        Ok(())
    }

    pub fn delete_regional_councilor(
        &mut self,
        councilor_id: RecordId,
    ) -> Result<(), RegionalServiceError> {
        if !remove(&mut self.state.regional_body.regional_councilors, councilor_id) {
            return Err(RegionalServiceError::CouncilorNotFound(councilor_id));
        }
        Ok(())
    }

    pub fn save_provincial_list(
        &mut self,
        mut list: ProvincialList,
    ) -> Result<(), RegionalServiceError> {
        list.province_name =
            normalize_name(&list.province_name).ok_or(RegionalServiceError::BlankName)?;
        upsert(&mut self.state.regional_body.provincial_lists, list);
        Ok(())
    }

    /// Deletes a provincial list and its nested district lists.
    pub fn delete_provincial_list(&mut self, list_id: RecordId) -> Result<(), RegionalServiceError> {
        if !remove(&mut self.state.regional_body.provincial_lists, list_id) {
            return Err(RegionalServiceError::ProvincialListNotFound(list_id));
        }
        Ok(())
    }

    pub fn save_district_list(
        &mut self,
        provincial_list_id: RecordId,
        mut list: DistrictList,
    ) -> Result<(), RegionalServiceError> {
        list.district_name =
            normalize_name(&list.district_name).ok_or(RegionalServiceError::BlankName)?;
        let provincial = self.provincial_list_mut(provincial_list_id)?;
        upsert(&mut provincial.district_lists, list);
        Ok(())
    }

    pub fn delete_district_list(
        &mut self,
        provincial_list_id: RecordId,
        district_list_id: RecordId,
    ) -> Result<(), RegionalServiceError> {
        let provincial = self.provincial_list_mut(provincial_list_id)?;
        if !remove(&mut provincial.district_lists, district_list_id) {
            return Err(RegionalServiceError::DistrictListNotFound(district_list_id));
        }
        Ok(())
    }

    /// Saves a councilor on a provincial list, or on one of its district
    /// lists when `district_list_id` is given.
    pub fn save_list_councilor(
        &mut self,
        provincial_list_id: RecordId,
        district_list_id: Option<RecordId>,
        mut councilor: Councilor,
    ) -> Result<(), RegionalServiceError> {
        councilor.name = normalize_name(&councilor.name).ok_or(RegionalServiceError::BlankName)?;
        let councilors =
            self.list_councilors_mut(provincial_list_id, district_list_id)?;
        upsert(councilors, councilor);
        Ok(())
    }

    pub fn delete_list_councilor(
        &mut self,
        provincial_list_id: RecordId,
        district_list_id: Option<RecordId>,
        councilor_id: RecordId,
    ) -> Result<(), RegionalServiceError> {
        let councilors =
            self.list_councilors_mut(provincial_list_id, district_list_id)?;
        if !remove(councilors, councilor_id) {
            return Err(RegionalServiceError::CouncilorNotFound(councilor_id));
        }
        Ok(())
    }

    /// Sets or clears the mayor of a provincial or district list.
    pub fn set_list_mayor(
        &mut self,
        provincial_list_id: RecordId,
        district_list_id: Option<RecordId>,
        mayor: Option<ListMayor>,
    ) -> Result<(), RegionalServiceError> {
        if let Some(mayor) = &mayor {
            normalize_name(&mayor.name).ok_or(RegionalServiceError::BlankName)?;
        }
        let provincial = self.provincial_list_mut(provincial_list_id)?;
        match district_list_id {
            None => provincial.mayor = mayor,
            Some(district_list_id) => {
                let district = find_mut(&mut provincial.district_lists, district_list_id)
                    .ok_or(RegionalServiceError::DistrictListNotFound(district_list_id))?;
                district.mayor = mayor;
            }
        }
        Ok(())
    }

    fn provincial_list_mut(
        &mut self,
        list_id: RecordId,
    ) -> Result<&mut ProvincialList, RegionalServiceError> {
        find_mut(&mut self.state.regional_body.provincial_lists, list_id)
            .ok_or(RegionalServiceError::ProvincialListNotFound(list_id))
    }

    fn list_councilors_mut(
        &mut self,
        provincial_list_id: RecordId,
        district_list_id: Option<RecordId>,
    ) -> Result<&mut Vec<Councilor>, RegionalServiceError> {
        let provincial = self.provincial_list_mut(provincial_list_id)?;
        match district_list_id {
            None => Ok(&mut provincial.councilors),
            Some(district_list_id) => {
                let district = find_mut(&mut provincial.district_lists, district_list_id)
                    .ok_or(RegionalServiceError::DistrictListNotFound(district_list_id))?;
                Ok(&mut district.councilors)
            }
        }
    }
}

fn expect_role(
    official: &RegionalOfficial,
    expected: RegionalRole,
) -> Result<(), RegionalServiceError> {
    if official.role != expected {
        return Err(RegionalServiceError::RoleMismatch {
            expected,
            actual: official.role,
        });
    }
    Ok(())
}

/// Councilors ordered ascending by ballot number for display.
pub fn councilors_by_number(councilors: &[Councilor]) -> Vec<&Councilor> {
    let mut ordered: Vec<&Councilor> = councilors.iter().collect();
    ordered.sort_by(|a, b| a.number.cmp(&b.number).then_with(|| a.name.cmp(&b.name)));
    ordered
}
