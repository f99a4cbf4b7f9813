//! Troll-account tracking use-case service.
//!
//! # Invariants
//! - Accounts always live inside a target; deleting the target drops them.

use crate::collection::{find_mut, remove, upsert};
use crate::model::troll::{TrollAccount, TrollTarget};
use crate::model::RecordId;
use crate::service::normalize_name;
use crate::store::Dashboard;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum TrollServiceError {
    BlankName,
    TargetNotFound(RecordId),
    AccountNotFound(RecordId),
}

impl Display for TrollServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "name must not be blank"),
            Self::TargetNotFound(id) => write!(f, "troll target not found: {id}"),
            Self::AccountNotFound(id) => write!(f, "troll account not found: {id}"),
        }
    }
}

impl Error for TrollServiceError {}

pub struct TrollService<'a> {
    state: &'a mut Dashboard,
}

impl<'a> TrollService<'a> {
    pub fn new(state: &'a mut Dashboard) -> Self {
        Self { state }
    }

    pub fn save_target(&mut self, mut target: TrollTarget) -> Result<(), TrollServiceError> {
        target.name = normalize_name(&target.name).ok_or(TrollServiceError::BlankName)?;
        upsert(&mut self.state.troll_targets, target);
        Ok(())
    }

    /// Deletes a target and every account tracked under it.
    pub fn delete_target(&mut self, target_id: RecordId) -> Result<(), TrollServiceError> {
        if !remove(&mut self.state.troll_targets, target_id) {
            return Err(TrollServiceError::TargetNotFound(target_id));
        }
        Ok(())
    }

    pub fn save_account(
        &mut self,
        target_id: RecordId,
        mut account: TrollAccount,
    ) -> Result<(), TrollServiceError> {
        account.name = normalize_name(&account.name).ok_or(TrollServiceError::BlankName)?;
        let target = self.target_mut(target_id)?;
        upsert(&mut target.trolls, account);
        Ok(())
    }

    pub fn delete_account(
        &mut self,
        target_id: RecordId,
        account_id: RecordId,
    ) -> Result<(), TrollServiceError> {
        let target = self.target_mut(target_id)?;
        if !remove(&mut target.trolls, account_id) {
            return Err(TrollServiceError::AccountNotFound(account_id));
        }
        Ok(())
    }

    fn target_mut(&mut self, target_id: RecordId) -> Result<&mut TrollTarget, TrollServiceError> {
        find_mut(&mut self.state.troll_targets, target_id)
            .ok_or(TrollServiceError::TargetNotFound(target_id))
    }
}
