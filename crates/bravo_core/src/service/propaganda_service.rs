//! Propaganda logistics use-case service.
//!
//! # Responsibility
//! - Maintain placement records along the province -> district -> item path.
//! - Maintain the flat design catalog.

use crate::collection::{find_mut, remove, upsert};
use crate::model::propaganda::{
    Design, PropagandaDistrict, PropagandaItem, PropagandaProvince,
};
use crate::model::RecordId;
use crate::service::normalize_name;
use crate::store::Dashboard;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum PropagandaServiceError {
    BlankName,
    ProvinceNotFound(RecordId),
    DistrictNotFound(RecordId),
    ItemNotFound(RecordId),
    DesignNotFound(RecordId),
}

impl Display for PropagandaServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "name must not be blank"),
            Self::ProvinceNotFound(id) => write!(f, "propaganda province not found: {id}"),
            Self::DistrictNotFound(id) => write!(f, "propaganda district not found: {id}"),
            Self::ItemNotFound(id) => write!(f, "propaganda item not found: {id}"),
            Self::DesignNotFound(id) => write!(f, "design not found: {id}"),
        }
    }
}

impl Error for PropagandaServiceError {}

/// Service facade over propaganda placements and the design catalog.
pub struct PropagandaService<'a> {
    state: &'a mut Dashboard,
}

impl<'a> PropagandaService<'a> {
    pub fn new(state: &'a mut Dashboard) -> Self {
        Self { state }
    }

    pub fn save_province(
        &mut self,
        mut province: PropagandaProvince,
    ) -> Result<(), PropagandaServiceError> {
        province.name =
            normalize_name(&province.name).ok_or(PropagandaServiceError::BlankName)?;
        upsert(&mut self.state.propaganda_provinces, province);
        Ok(())
    }

    pub fn delete_province(&mut self, province_id: RecordId) -> Result<(), PropagandaServiceError> {
        if !remove(&mut self.state.propaganda_provinces, province_id) {
            return Err(PropagandaServiceError::ProvinceNotFound(province_id));
        }
        Ok(())
    }

    pub fn save_district(
        &mut self,
        province_id: RecordId,
        mut district: PropagandaDistrict,
    ) -> Result<(), PropagandaServiceError> {
        district.name =
            normalize_name(&district.name).ok_or(PropagandaServiceError::BlankName)?;
        let province = self.province_mut(province_id)?;
        upsert(&mut province.districts, district);
        Ok(())
    }

    pub fn delete_district(
        &mut self,
        province_id: RecordId,
        district_id: RecordId,
    ) -> Result<(), PropagandaServiceError> {
        let province = self.province_mut(province_id)?;
        if !remove(&mut province.districts, district_id) {
            return Err(PropagandaServiceError::DistrictNotFound(district_id));
        }
        Ok(())
    }

    pub fn save_item(
        &mut self,
        province_id: RecordId,
        district_id: RecordId,
        mut item: PropagandaItem,
    ) -> Result<(), PropagandaServiceError> {
        item.description =
            normalize_name(&item.description).ok_or(PropagandaServiceError::BlankName)?;
        let district = self.district_mut(province_id, district_id)?;
        upsert(&mut district.items, item);
        Ok(())
    }

    pub fn delete_item(
        &mut self,
        province_id: RecordId,
        district_id: RecordId,
        item_id: RecordId,
    ) -> Result<(), PropagandaServiceError> {
        let district = self.district_mut(province_id, district_id)?;
        if !remove(&mut district.items, item_id) {
            return Err(PropagandaServiceError::ItemNotFound(item_id));
        }
        Ok(())
    }

    pub fn save_design(&mut self, mut design: Design) -> Result<(), PropagandaServiceError> {
        design.title = normalize_name(&design.title).ok_or(PropagandaServiceError::BlankName)?;
        upsert(&mut self.state.designs, design);
        Ok(())
    }

    pub fn delete_design(&mut self, design_id: RecordId) -> Result<(), PropagandaServiceError> {
        if !remove(&mut self.state.designs, design_id) {
            return Err(PropagandaServiceError::DesignNotFound(design_id));
        }
        Ok(())
    }

    fn province_mut(
        &mut self,
        province_id: RecordId,
    ) -> Result<&mut PropagandaProvince, PropagandaServiceError> {
        find_mut(&mut self.state.propaganda_provinces, province_id)
            .ok_or(PropagandaServiceError::ProvinceNotFound(province_id))
    }

    fn district_mut(
        &mut self,
        province_id: RecordId,
        district_id: RecordId,
    ) -> Result<&mut PropagandaDistrict, PropagandaServiceError> {
        let province = self.province_mut(province_id)?;
        find_mut(&mut province.districts, district_id)
            .ok_or(PropagandaServiceError::DistrictNotFound(district_id))
    }
}
