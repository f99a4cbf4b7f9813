//! Coordinator directory use-case service.
//!
//! # Responsibility
//! - Maintain the province -> district -> coordinator directory.
//!
//! # Invariants
//! - Parent path segments are resolved before any mutation happens.
//! - Deleting a province or district drops its coordinators with it.

use crate::collection::{find_mut, remove, upsert};
use crate::model::coordinator::{Coordinator, CoordinatorDistrict, CoordinatorProvince};
use crate::model::RecordId;
use crate::service::normalize_name;
use crate::store::Dashboard;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum CoordinatorServiceError {
    BlankName,
    ProvinceNotFound(RecordId),
    DistrictNotFound(RecordId),
    CoordinatorNotFound(RecordId),
}

impl Display for CoordinatorServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "name must not be blank"),
            Self::ProvinceNotFound(id) => write!(f, "coordinator province not found: {id}"),
            Self::DistrictNotFound(id) => write!(f, "coordinator district not found: {id}"),
            Self::CoordinatorNotFound(id) => write!(f, "coordinator not found: {id}"),
        }
    }
}

impl Error for CoordinatorServiceError {}

/// Service facade over the coordinator directory.
pub struct CoordinatorService<'a> {
    state: &'a mut Dashboard,
}

impl<'a> CoordinatorService<'a> {
    pub fn new(state: &'a mut Dashboard) -> Self {
        Self { state }
    }

    pub fn save_province(
        &mut self,
        mut province: CoordinatorProvince,
    ) -> Result<(), CoordinatorServiceError> {
        province.name =
            normalize_name(&province.name).ok_or(CoordinatorServiceError::BlankName)?;
        upsert(&mut self.state.coordinator_provinces, province);
        Ok(())
    }

    pub fn delete_province(&mut self, province_id: RecordId) -> Result<(), CoordinatorServiceError> {
        if !remove(&mut self.state.coordinator_provinces, province_id) {
            return Err(CoordinatorServiceError::ProvinceNotFound(province_id));
        }
        Ok(())
    }

    pub fn save_district(
        &mut self,
        province_id: RecordId,
        mut district: CoordinatorDistrict,
    ) -> Result<(), CoordinatorServiceError> {
        district.name =
            normalize_name(&district.name).ok_or(CoordinatorServiceError::BlankName)?;
        let province = self.province_mut(province_id)?;
        upsert(&mut province.districts, district);
        Ok(())
    }

    pub fn delete_district(
        &mut self,
        province_id: RecordId,
        district_id: RecordId,
    ) -> Result<(), CoordinatorServiceError> {
        let province = self.province_mut(province_id)?;
        if !remove(&mut province.districts, district_id) {
            return Err(CoordinatorServiceError::DistrictNotFound(district_id));
        }
        Ok(())
    }

    pub fn save_coordinator(
        &mut self,
        province_id: RecordId,
        district_id: RecordId,
        mut coordinator: Coordinator,
    ) -> Result<(), CoordinatorServiceError> {
        coordinator.name =
            normalize_name(&coordinator.name).ok_or(CoordinatorServiceError::BlankName)?;
        let district = self.district_mut(province_id, district_id)?;
        upsert(&mut district.coordinators, coordinator);
        Ok(())
    }

    pub fn delete_coordinator(
        &mut self,
        province_id: RecordId,
        district_id: RecordId,
        coordinator_id: RecordId,
    ) -> Result<(), CoordinatorServiceError> {
        let district = self.district_mut(province_id, district_id)?;
        if !remove(&mut district.coordinators, coordinator_id) {
            return Err(CoordinatorServiceError::CoordinatorNotFound(coordinator_id));
        }
        Ok(())
    }

    fn province_mut(
        &mut self,
        province_id: RecordId,
    ) -> Result<&mut CoordinatorProvince, CoordinatorServiceError> {
        find_mut(&mut self.state.coordinator_provinces, province_id)
            .ok_or(CoordinatorServiceError::ProvinceNotFound(province_id))
    }

    fn district_mut(
        &mut self,
        province_id: RecordId,
        district_id: RecordId,
    ) -> Result<&mut CoordinatorDistrict, CoordinatorServiceError> {
        let province = self.province_mut(province_id)?;
        find_mut(&mut province.districts, district_id)
            .ok_or(CoordinatorServiceError::DistrictNotFound(district_id))
    }
}
