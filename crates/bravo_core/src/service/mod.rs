//! Per-tab use-case services.
//!
//! # Responsibility
//! - Apply the uniform save/delete contract to the dashboard state tree.
//! - Keep the UI/FFI layers decoupled from state-tree navigation details.
//!
//! # Invariants
//! - Saving a record whose id exists replaces it in place; a new id appends
//!   exactly one record.
//! - Deleting removes exactly the addressed record; children cascade by
//!   structural containment.
//! - Display names are trimmed; blank names are rejected before mutation.

pub mod activity_service;
pub mod birthday_service;
pub mod coordinator_service;
pub mod media_service;
pub mod party_service;
pub mod propaganda_service;
pub mod regional_service;
pub mod ticket_service;
pub mod troll_service;

/// Trims a display name, rejecting blank input.
pub(crate) fn normalize_name(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
