//! Core domain logic for the BRAVO campaign dashboard.
//! This crate is the single source of truth for business invariants.

pub mod collection;
pub mod logging;
pub mod model;
pub mod phone;
pub mod service;
pub mod store;

pub use collection::Identified;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::activity::{CompetitorActivity, MyActivity, PlannedEvent};
pub use model::birthday::Birthday;
pub use model::coordinator::{Coordinator, CoordinatorDistrict, CoordinatorProvince};
pub use model::media::{MediaPost, Sentiment};
pub use model::party::{Candidate, District, Party, Province, Role};
pub use model::propaganda::{Design, PropagandaDistrict, PropagandaItem, PropagandaProvince};
pub use model::regional::{
    Councilor, DistrictList, Gender, ListMayor, ProvincialList, RegionalBody, RegionalOfficial,
    RegionalRole,
};
pub use model::ticket::{CongressionalMember, PresidentialCandidate, MAX_DEPUTIES};
pub use model::troll::{Platform, TrollAccount, TrollTarget};
pub use model::{new_record_id, RecordId};
pub use service::activity_service::{events_by_date, ActivityService, ActivityServiceError};
pub use service::birthday_service::{
    birthday_board, BirthdayBoard, BirthdayService, BirthdayServiceError, UpcomingBirthday,
};
pub use service::coordinator_service::{CoordinatorService, CoordinatorServiceError};
pub use service::media_service::{posts_for_month, MediaService, MediaServiceError};
pub use service::party_service::{
    districts_by_voters, provinces_by_voters, PartyService, PartyServiceError,
};
pub use service::propaganda_service::{PropagandaService, PropagandaServiceError};
pub use service::regional_service::{
    councilors_by_number, RegionalService, RegionalServiceError,
};
pub use service::ticket_service::{ticket_by_rank, TicketService, TicketServiceError};
pub use service::troll_service::{TrollService, TrollServiceError};
pub use store::Dashboard;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
