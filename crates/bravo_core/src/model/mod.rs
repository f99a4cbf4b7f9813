//! Campaign domain model.
//!
//! # Responsibility
//! - Define the canonical record shapes behind every dashboard tab.
//! - Keep constructors responsible for stable id generation.
//!
//! # Invariants
//! - Every record carries a `RecordId` unique within its collection.
//! - Records are mutated by full replacement, never by partial field update.

pub mod activity;
pub mod birthday;
pub mod coordinator;
pub mod media;
pub mod party;
pub mod propaganda;
pub mod regional;
pub mod ticket;
pub mod troll;

use uuid::Uuid;

/// Stable identifier for every dashboard record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = Uuid;

/// Generates a fresh id for a newly created record.
pub fn new_record_id() -> RecordId {
    Uuid::new_v4()
}
