//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level dashboard operations to Dart via FRB.
//! - Hold the process-global dashboard state behind a single mutex.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Record payloads cross the boundary as JSON in camelCase field names.
//! - Deletes require an explicit `confirmed` flag; unconfirmed deletes are
//!   refused so the UI owns the confirmation dialog.

use bravo_core::{
    birthday_board, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, posts_for_month, ticket_by_rank, ActivityService, Birthday,
    BirthdayService, Candidate, CompetitorActivity, CongressionalMember, Coordinator,
    CoordinatorDistrict, CoordinatorProvince, CoordinatorService, Dashboard, Design, DistrictList,
    ListMayor, MediaPost, MediaService, MyActivity, Party, PartyService, PlannedEvent,
    PresidentialCandidate, PropagandaDistrict, PropagandaItem, PropagandaProvince,
    PropagandaService, Province, ProvincialList, RecordId, RegionalBody, RegionalOfficial,
    RegionalService, TicketService, TrollAccount, TrollService, TrollTarget,
};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

static DASHBOARD: OnceLock<Mutex<Dashboard>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for dashboard command flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl DashboardActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Query response envelope carrying a JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardQueryResponse {
    /// Whether the query succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
    /// JSON document (empty string on failure).
    pub json: String,
}

impl DashboardQueryResponse {
    fn success(json: String) -> Self {
        Self {
            ok: true,
            message: String::new(),
            json,
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            json: String::new(),
        }
    }
}

/// Full dashboard state as JSON for tab rendering.
///
/// # FFI contract
/// - Sync call over the in-memory state; never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_json() -> DashboardQueryResponse {
    with_state(|state| to_json(state))
        .map_or_else(DashboardQueryResponse::failure, DashboardQueryResponse::success)
}

/// Resets the dashboard to the seeded sample or to an empty state.
#[flutter_rust_bridge::frb(sync)]
pub fn reset_dashboard(seeded: bool) -> DashboardActionResponse {
    let result = with_state(|state| {
        *state = if seeded {
            Dashboard::seeded()
        } else {
            Dashboard::new()
        };
        Ok(())
    });
    action(result, "Dashboard reset.")
}

// ---- Parties tab -----------------------------------------------------------

#[flutter_rust_bridge::frb(sync)]
pub fn save_party_json(json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let party: Party = parse_payload(&json, "party")?;
        PartyService::new(state).save_party(party).map_err(stringify)
    });
    action(result, "Party saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_party(party_id: String, confirmed: bool) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let party_id = parse_id(&party_id)?;
        PartyService::new(state).delete_party(party_id).map_err(stringify)
    });
    action(result, "Party deleted.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn save_party_province_json(party_id: String, json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let party_id = parse_id(&party_id)?;
        let province: Province = parse_payload(&json, "province")?;
        PartyService::new(state)
            .save_province(party_id, province)
            .map_err(stringify)
    });
    action(result, "Province saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_party_province(
    party_id: String,
    province_id: String,
    confirmed: bool,
) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let party_id = parse_id(&party_id)?;
        let province_id = parse_id(&province_id)?;
        PartyService::new(state)
            .delete_province(party_id, province_id)
            .map_err(stringify)
    });
    action(result, "Province deleted.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn save_party_district_json(
    party_id: String,
    province_id: String,
    json: String,
) -> DashboardActionResponse {
    let result = with_state(|state| {
        let party_id = parse_id(&party_id)?;
        let province_id = parse_id(&province_id)?;
        let district = parse_payload(&json, "district")?;
        PartyService::new(state)
            .save_district(party_id, province_id, district)
            .map_err(stringify)
    });
    action(result, "District saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_party_district(
    party_id: String,
    province_id: String,
    district_id: String,
    confirmed: bool,
) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let party_id = parse_id(&party_id)?;
        let province_id = parse_id(&province_id)?;
        let district_id = parse_id(&district_id)?;
        PartyService::new(state)
            .delete_district(party_id, province_id, district_id)
            .map_err(stringify)
    });
    action(result, "District deleted.")
}

/// Saves a candidate, routing it by role.
///
/// `location_id` carries the province id for a new provincial mayor or the
/// district id for a new district mayor; governors ignore it.
#[flutter_rust_bridge::frb(sync)]
pub fn save_candidate_json(json: String, location_id: Option<String>) -> DashboardActionResponse {
    let result = with_state(|state| {
        let candidate: Candidate = parse_payload(&json, "candidate")?;
        let location_id = parse_opt_id(location_id.as_deref())?;
        PartyService::new(state)
            .save_candidate(candidate, location_id)
            .map_err(stringify)
    });
    action(result, "Candidate saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_candidate(
    party_id: String,
    candidate_id: String,
    confirmed: bool,
) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let party_id = parse_id(&party_id)?;
        let candidate_id = parse_id(&candidate_id)?;
        PartyService::new(state)
            .delete_candidate(party_id, candidate_id)
            .map_err(stringify)
    });
    action(result, "Candidate deleted.")
}

// ---- Activities and planner tabs -------------------------------------------

#[flutter_rust_bridge::frb(sync)]
pub fn save_my_activity_json(json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let activity: MyActivity = parse_payload(&json, "activity")?;
        ActivityService::new(state)
            .save_my_activity(activity)
            .map_err(stringify)
    });
    action(result, "Activity saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_my_activity(activity_id: String, confirmed: bool) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let activity_id = parse_id(&activity_id)?;
        ActivityService::new(state)
            .delete_my_activity(activity_id)
            .map_err(stringify)
    });
    action(result, "Activity deleted.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn save_competitor_activity_json(json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let activity: CompetitorActivity = parse_payload(&json, "competitor activity")?;
        ActivityService::new(state)
            .save_competitor_activity(activity)
            .map_err(stringify)
    });
    action(result, "Competitor activity saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_competitor_activity(activity_id: String, confirmed: bool) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let activity_id = parse_id(&activity_id)?;
        ActivityService::new(state)
            .delete_competitor_activity(activity_id)
            .map_err(stringify)
    });
    action(result, "Competitor activity deleted.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn save_planned_event_json(json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let event: PlannedEvent = parse_payload(&json, "event")?;
        ActivityService::new(state).save_event(event).map_err(stringify)
    });
    action(result, "Event saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_planned_event(event_id: String, confirmed: bool) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let event_id = parse_id(&event_id)?;
        ActivityService::new(state).delete_event(event_id).map_err(stringify)
    });
    action(result, "Event deleted.")
}

// ---- Birthdays tab ----------------------------------------------------------

#[flutter_rust_bridge::frb(sync)]
pub fn save_birthday_json(json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let birthday: Birthday = parse_payload(&json, "birthday")?;
        BirthdayService::new(state)
            .save_birthday(birthday)
            .map_err(stringify)
    });
    action(result, "Birthday saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_birthday(birthday_id: String, confirmed: bool) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let birthday_id = parse_id(&birthday_id)?;
        BirthdayService::new(state)
            .delete_birthday(birthday_id)
            .map_err(stringify)
    });
    action(result, "Birthday deleted.")
}

/// Today/upcoming birthday board as JSON.
///
/// `today` is an ISO-8601 calendar date (`YYYY-MM-DD`).
#[flutter_rust_bridge::frb(sync)]
pub fn birthday_board_json(today: String) -> DashboardQueryResponse {
    let result = with_state(|state| {
        let today = parse_date(&today)?;
        to_json(&birthday_board(&state.birthdays, today))
    });
    result.map_or_else(DashboardQueryResponse::failure, DashboardQueryResponse::success)
}

// ---- Media tracking tab ------------------------------------------------------

#[flutter_rust_bridge::frb(sync)]
pub fn save_media_post_json(json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let post: MediaPost = parse_payload(&json, "media post")?;
        MediaService::new(state).save_post(post).map_err(stringify)
    });
    action(result, "Media post saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_media_post(post_id: String, confirmed: bool) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let post_id = parse_id(&post_id)?;
        MediaService::new(state).delete_post(post_id).map_err(stringify)
    });
    action(result, "Media post deleted.")
}

/// Media posts of one calendar month, newest first, as JSON.
#[flutter_rust_bridge::frb(sync)]
pub fn media_month_json(year: i32, month: u32) -> DashboardQueryResponse {
    let result = with_state(|state| to_json(&posts_for_month(&state.media_posts, year, month)));
    result.map_or_else(DashboardQueryResponse::failure, DashboardQueryResponse::success)
}

// ---- Troll center tab --------------------------------------------------------

#[flutter_rust_bridge::frb(sync)]
pub fn save_troll_target_json(json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let target: TrollTarget = parse_payload(&json, "troll target")?;
        TrollService::new(state).save_target(target).map_err(stringify)
    });
    action(result, "Troll target saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_troll_target(target_id: String, confirmed: bool) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let target_id = parse_id(&target_id)?;
        TrollService::new(state).delete_target(target_id).map_err(stringify)
    });
    action(result, "Troll target deleted.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn save_troll_account_json(target_id: String, json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let target_id = parse_id(&target_id)?;
        let account: TrollAccount = parse_payload(&json, "troll account")?;
        TrollService::new(state)
            .save_account(target_id, account)
            .map_err(stringify)
    });
    action(result, "Troll account saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_troll_account(
    target_id: String,
    account_id: String,
    confirmed: bool,
) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let target_id = parse_id(&target_id)?;
        let account_id = parse_id(&account_id)?;
        TrollService::new(state)
            .delete_account(target_id, account_id)
            .map_err(stringify)
    });
    action(result, "Troll account deleted.")
}

// ---- Coordinators tab ---------------------------------------------------------

#[flutter_rust_bridge::frb(sync)]
pub fn save_coordinator_province_json(json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let province: CoordinatorProvince = parse_payload(&json, "coordinator province")?;
        CoordinatorService::new(state)
            .save_province(province)
            .map_err(stringify)
    });
    action(result, "Province saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_coordinator_province(province_id: String, confirmed: bool) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let province_id = parse_id(&province_id)?;
        CoordinatorService::new(state)
            .delete_province(province_id)
            .map_err(stringify)
    });
    action(result, "Province deleted.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn save_coordinator_district_json(province_id: String, json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let province_id = parse_id(&province_id)?;
        let district: CoordinatorDistrict = parse_payload(&json, "coordinator district")?;
        CoordinatorService::new(state)
            .save_district(province_id, district)
            .map_err(stringify)
    });
    action(result, "District saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_coordinator_district(
    province_id: String,
    district_id: String,
    confirmed: bool,
) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let province_id = parse_id(&province_id)?;
        let district_id = parse_id(&district_id)?;
        CoordinatorService::new(state)
            .delete_district(province_id, district_id)
            .map_err(stringify)
    });
    action(result, "District deleted.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn save_coordinator_json(
    province_id: String,
    district_id: String,
    json: String,
) -> DashboardActionResponse {
    let result = with_state(|state| {
        let province_id = parse_id(&province_id)?;
        let district_id = parse_id(&district_id)?;
        let coordinator: Coordinator = parse_payload(&json, "coordinator")?;
        CoordinatorService::new(state)
            .save_coordinator(province_id, district_id, coordinator)
            .map_err(stringify)
    });
    action(result, "Coordinator saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_coordinator(
    province_id: String,
    district_id: String,
    coordinator_id: String,
    confirmed: bool,
) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let province_id = parse_id(&province_id)?;
        let district_id = parse_id(&district_id)?;
        let coordinator_id = parse_id(&coordinator_id)?;
        CoordinatorService::new(state)
            .delete_coordinator(province_id, district_id, coordinator_id)
            .map_err(stringify)
    });
    action(result, "Coordinator deleted.")
}

// ---- Propaganda tab -------------------------------------------------------------

#[flutter_rust_bridge::frb(sync)]
pub fn save_propaganda_province_json(json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let province: PropagandaProvince = parse_payload(&json, "propaganda province")?;
        PropagandaService::new(state)
            .save_province(province)
            .map_err(stringify)
    });
    action(result, "Province saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_propaganda_province(province_id: String, confirmed: bool) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let province_id = parse_id(&province_id)?;
        PropagandaService::new(state)
            .delete_province(province_id)
            .map_err(stringify)
    });
    action(result, "Province deleted.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn save_propaganda_district_json(province_id: String, json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let province_id = parse_id(&province_id)?;
        let district: PropagandaDistrict = parse_payload(&json, "propaganda district")?;
        PropagandaService::new(state)
            .save_district(province_id, district)
            .map_err(stringify)
    });
    action(result, "District saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_propaganda_district(
    province_id: String,
    district_id: String,
    confirmed: bool,
) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let province_id = parse_id(&province_id)?;
        let district_id = parse_id(&district_id)?;
        PropagandaService::new(state)
            .delete_district(province_id, district_id)
            .map_err(stringify)
    });
    action(result, "District deleted.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn save_propaganda_item_json(
    province_id: String,
    district_id: String,
    json: String,
) -> DashboardActionResponse {
    let result = with_state(|state| {
        let province_id = parse_id(&province_id)?;
        let district_id = parse_id(&district_id)?;
        let item: PropagandaItem = parse_payload(&json, "propaganda item")?;
        PropagandaService::new(state)
            .save_item(province_id, district_id, item)
            .map_err(stringify)
    });
    action(result, "Propaganda item saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_propaganda_item(
    province_id: String,
    district_id: String,
    item_id: String,
    confirmed: bool,
) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let province_id = parse_id(&province_id)?;
        let district_id = parse_id(&district_id)?;
        let item_id = parse_id(&item_id)?;
        PropagandaService::new(state)
            .delete_item(province_id, district_id, item_id)
            .map_err(stringify)
    });
    action(result, "Propaganda item deleted.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn save_design_json(json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let design: Design = parse_payload(&json, "design")?;
        PropagandaService::new(state).save_design(design).map_err(stringify)
    });
    action(result, "Design saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_design(design_id: String, confirmed: bool) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let design_id = parse_id(&design_id)?;
        PropagandaService::new(state)
            .delete_design(design_id)
            .map_err(stringify)
    });
    action(result, "Design deleted.")
}

// ---- Regional body tab ------------------------------------------------------------

#[flutter_rust_bridge::frb(sync)]
pub fn replace_regional_body_json(json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let body: RegionalBody = parse_payload(&json, "regional body")?;
        RegionalService::new(state).replace_body(body).map_err(stringify)
    });
    action(result, "Regional body replaced.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn save_regional_official_json(json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let official: RegionalOfficial = parse_payload(&json, "regional official")?;
        RegionalService::new(state)
            .save_official(official)
            .map_err(stringify)
    });
    action(result, "Official saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn save_regional_councilor_json(json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let councilor = parse_payload(&json, "councilor")?;
        RegionalService::new(state)
            .save_regional_councilor(councilor)
            .map_err(stringify)
    });
    action(result, "Councilor saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_regional_councilor(councilor_id: String, confirmed: bool) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let councilor_id = parse_id(&councilor_id)?;
        RegionalService::new(state)
            .delete_regional_councilor(councilor_id)
            .map_err(stringify)
    });
    action(result, "Councilor deleted.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn save_provincial_list_json(json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let list: ProvincialList = parse_payload(&json, "provincial list")?;
        RegionalService::new(state)
            .save_provincial_list(list)
            .map_err(stringify)
    });
    action(result, "Provincial list saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_provincial_list(list_id: String, confirmed: bool) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let list_id = parse_id(&list_id)?;
        RegionalService::new(state)
            .delete_provincial_list(list_id)
            .map_err(stringify)
    });
    action(result, "Provincial list deleted.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn save_district_list_json(provincial_list_id: String, json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let provincial_list_id = parse_id(&provincial_list_id)?;
        let list: DistrictList = parse_payload(&json, "district list")?;
        RegionalService::new(state)
            .save_district_list(provincial_list_id, list)
            .map_err(stringify)
    });
    action(result, "District list saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_district_list(
    provincial_list_id: String,
    district_list_id: String,
    confirmed: bool,
) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let provincial_list_id = parse_id(&provincial_list_id)?;
        let district_list_id = parse_id(&district_list_id)?;
        RegionalService::new(state)
            .delete_district_list(provincial_list_id, district_list_id)
            .map_err(stringify)
    });
    action(result, "District list deleted.")
}

/// Saves a councilor on a provincial list, or on one of its district lists
/// when `district_list_id` is given.
#[flutter_rust_bridge::frb(sync)]
pub fn save_list_councilor_json(
    provincial_list_id: String,
    district_list_id: Option<String>,
    json: String,
) -> DashboardActionResponse {
    let result = with_state(|state| {
        let provincial_list_id = parse_id(&provincial_list_id)?;
        let district_list_id = parse_opt_id(district_list_id.as_deref())?;
        let councilor = parse_payload(&json, "councilor")?;
        RegionalService::new(state)
            .save_list_councilor(provincial_list_id, district_list_id, councilor)
            .map_err(stringify)
    });
    action(result, "Councilor saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_list_councilor(
    provincial_list_id: String,
    district_list_id: Option<String>,
    councilor_id: String,
    confirmed: bool,
) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let provincial_list_id = parse_id(&provincial_list_id)?;
        let district_list_id = parse_opt_id(district_list_id.as_deref())?;
        let councilor_id = parse_id(&councilor_id)?;
        RegionalService::new(state)
            .delete_list_councilor(provincial_list_id, district_list_id, councilor_id)
            .map_err(stringify)
    });
    action(result, "Councilor deleted.")
}

/// Sets or clears (`mayor_json = None`) the mayor of a list.
#[flutter_rust_bridge::frb(sync)]
pub fn set_list_mayor_json(
    provincial_list_id: String,
    district_list_id: Option<String>,
    mayor_json: Option<String>,
) -> DashboardActionResponse {
    let result = with_state(|state| {
        let provincial_list_id = parse_id(&provincial_list_id)?;
        let district_list_id = parse_opt_id(district_list_id.as_deref())?;
        let mayor: Option<ListMayor> = match mayor_json {
            Some(json) => Some(parse_payload(&json, "list mayor")?),
            None => None,
        };
        RegionalService::new(state)
            .set_list_mayor(provincial_list_id, district_list_id, mayor)
            .map_err(stringify)
    });
    action(result, "List mayor updated.")
}

// ---- National ticket tab -------------------------------------------------------------

#[flutter_rust_bridge::frb(sync)]
pub fn save_presidential_candidate_json(json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let candidate: PresidentialCandidate = parse_payload(&json, "presidential candidate")?;
        TicketService::new(state)
            .save_candidate(candidate)
            .map_err(stringify)
    });
    action(result, "Candidate saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_presidential_candidate(
    candidate_id: String,
    confirmed: bool,
) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let candidate_id = parse_id(&candidate_id)?;
        TicketService::new(state)
            .delete_candidate(candidate_id)
            .map_err(stringify)
    });
    action(result, "Candidate deleted.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn set_senator_json(candidate_id: String, json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let candidate_id = parse_id(&candidate_id)?;
        let senator: CongressionalMember = parse_payload(&json, "senator")?;
        TicketService::new(state)
            .set_senator(candidate_id, senator)
            .map_err(stringify)
    });
    action(result, "Senator saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn clear_senator(candidate_id: String, confirmed: bool) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let candidate_id = parse_id(&candidate_id)?;
        TicketService::new(state)
            .clear_senator(candidate_id)
            .map_err(stringify)
    });
    action(result, "Senator cleared.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn save_deputy_json(candidate_id: String, json: String) -> DashboardActionResponse {
    let result = with_state(|state| {
        let candidate_id = parse_id(&candidate_id)?;
        let deputy: CongressionalMember = parse_payload(&json, "deputy")?;
        TicketService::new(state)
            .save_deputy(candidate_id, deputy)
            .map_err(stringify)
    });
    action(result, "Deputy saved.")
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_deputy(
    candidate_id: String,
    deputy_id: String,
    confirmed: bool,
) -> DashboardActionResponse {
    let result = with_state(|state| {
        require_confirmed(confirmed)?;
        let candidate_id = parse_id(&candidate_id)?;
        let deputy_id = parse_id(&deputy_id)?;
        TicketService::new(state)
            .delete_deputy(candidate_id, deputy_id)
            .map_err(stringify)
    });
    action(result, "Deputy deleted.")
}

/// Presidential ticket ordered by rank, as JSON.
#[flutter_rust_bridge::frb(sync)]
pub fn ticket_json() -> DashboardQueryResponse {
    let result = with_state(|state| to_json(&ticket_by_rank(&state.presidential_candidates)));
    result.map_or_else(DashboardQueryResponse::failure, DashboardQueryResponse::success)
}

// ---- Helpers ---------------------------------------------------------------

fn dashboard() -> &'static Mutex<Dashboard> {
    DASHBOARD.get_or_init(|| Mutex::new(Dashboard::seeded()))
}

fn with_state<T>(f: impl FnOnce(&mut Dashboard) -> Result<T, String>) -> Result<T, String> {
    // A poisoned lock still holds consistent data: every service call
    // validates before mutating, so recover instead of propagating panics.
    let mut guard = match dashboard().lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    f(&mut guard)
}

fn action(result: Result<(), String>, ok_message: &str) -> DashboardActionResponse {
    match result {
        Ok(()) => DashboardActionResponse::success(ok_message),
        Err(message) => {
            log::warn!("event=ffi_action status=failed message={message}");
            DashboardActionResponse::failure(message)
        }
    }
}

fn require_confirmed(confirmed: bool) -> Result<(), String> {
    if !confirmed {
        return Err("delete not confirmed".to_string());
    }
    Ok(())
}

fn parse_id(raw: &str) -> Result<RecordId, String> {
    Uuid::parse_str(raw.trim()).map_err(|err| format!("invalid record id {raw:?}: {err}"))
}

fn parse_opt_id(raw: Option<&str>) -> Result<Option<RecordId>, String> {
    raw.map(parse_id).transpose()
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("invalid date {raw:?}: {err}"))
}

fn parse_payload<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|err| format!("invalid {what} payload: {err}"))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|err| format!("serialization failed: {err}"))
}

fn stringify(err: impl std::error::Error) -> String {
    err.to_string()
}
