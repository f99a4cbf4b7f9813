use bravo_core::{
    events_by_date, ActivityService, ActivityServiceError, CompetitorActivity, Dashboard,
    MyActivity, Party, PartyService, PlannedEvent,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn my_activity_upsert_and_delete() {
    let mut state = Dashboard::new();
    let mut activity = MyActivity::new("Caravana por el norte", date(2026, 9, 4));
    let id = activity.id;
    ActivityService::new(&mut state).save_my_activity(activity.clone()).unwrap();

    activity.link = "https://example.com/caravana".to_string();
    ActivityService::new(&mut state).save_my_activity(activity).unwrap();
    assert_eq!(state.my_activities.len(), 1);
    assert_eq!(state.my_activities[0].link, "https://example.com/caravana");

    ActivityService::new(&mut state).delete_my_activity(id).unwrap();
    assert!(state.my_activities.is_empty());
}

#[test]
fn competitor_activity_requires_known_party() {
    let mut state = Dashboard::new();
    let ghost = bravo_core::new_record_id();
    let err = ActivityService::new(&mut state)
        .save_competitor_activity(CompetitorActivity::new(ghost, "Mitin"))
        .unwrap_err();
    assert!(matches!(err, ActivityServiceError::UnknownParty(id) if id == ghost));

    let party = Party::new("Rival", "desc");
    let party_id = party.id;
    PartyService::new(&mut state).save_party(party).unwrap();
    ActivityService::new(&mut state)
        .save_competitor_activity(CompetitorActivity::new(party_id, "Mitin"))
        .unwrap();
    assert_eq!(state.competitor_activities.len(), 1);
}

#[test]
fn planner_orders_events_by_date() {
    let mut state = Dashboard::new();
    ActivityService::new(&mut state)
        .save_event(PlannedEvent::new("Cierre", date(2026, 10, 1)))
        .unwrap();
    ActivityService::new(&mut state)
        .save_event(PlannedEvent::new("Apertura", date(2026, 9, 12)))
        .unwrap();

    let ordered = events_by_date(&state.planned_events);
    assert_eq!(ordered[0].title, "Apertura");
    assert_eq!(ordered[1].title, "Cierre");
}
