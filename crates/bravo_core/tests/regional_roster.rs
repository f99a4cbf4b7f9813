use bravo_core::{
    councilors_by_number, Councilor, Dashboard, DistrictList, Gender, ListMayor, ProvincialList,
    RegionalBody, RegionalOfficial, RegionalRole, RegionalService, RegionalServiceError,
};

#[test]
fn replace_body_validates_official_slots() {
    let mut state = Dashboard::new();
    let mut body = RegionalBody::empty();
    body.governor = RegionalOfficial::new(RegionalRole::Governor, "Alicia Nunez");
    body.vice_governor = RegionalOfficial::new(RegionalRole::ViceGovernor, "Pedro Salas");
    RegionalService::new(&mut state).replace_body(body.clone()).unwrap();
    assert_eq!(state.regional_body.governor.name, "Alicia Nunez");

    body.vice_governor = RegionalOfficial::new(RegionalRole::Governor, "Segundo Gobernador");
    let err = RegionalService::new(&mut state).replace_body(body).unwrap_err();
    assert!(matches!(
        err,
        RegionalServiceError::RoleMismatch {
            expected: RegionalRole::ViceGovernor,
            actual: RegionalRole::Governor,
        }
    ));
}

#[test]
fn save_official_routes_by_role() {
    let mut state = Dashboard::new();
    RegionalService::new(&mut state)
        .save_official(RegionalOfficial::new(RegionalRole::ViceGovernor, "Pedro Salas"))
        .unwrap();
    assert_eq!(state.regional_body.vice_governor.name, "Pedro Salas");

    let err = RegionalService::new(&mut state)
        .save_official(RegionalOfficial::new(RegionalRole::Governor, "   "))
        .unwrap_err();
    assert!(matches!(err, RegionalServiceError::BlankName));
}

#[test]
fn regional_councilor_crud() {
    let mut state = Dashboard::new();
    let mut councilor = Councilor::new("Marta Quispe", Gender::Female, 2);
    let councilor_id = councilor.id;
    RegionalService::new(&mut state)
        .save_regional_councilor(councilor.clone())
        .unwrap();

    councilor.profession = "Abogada".to_string();
    RegionalService::new(&mut state).save_regional_councilor(councilor).unwrap();
    assert_eq!(state.regional_body.regional_councilors.len(), 1);
    assert_eq!(state.regional_body.regional_councilors[0].profession, "Abogada");

    RegionalService::new(&mut state)
        .delete_regional_councilor(councilor_id)
        .unwrap();
    assert!(state.regional_body.regional_councilors.is_empty());
}

#[test]
fn list_councilors_live_on_the_selected_level() {
    let mut state = Dashboard::new();
    let provincial = ProvincialList::new("Santa", 120_000);
    let provincial_id = provincial.id;
    RegionalService::new(&mut state).save_provincial_list(provincial).unwrap();

    let district = DistrictList::new("Chimbote", 60_000);
    let district_id = district.id;
    RegionalService::new(&mut state)
        .save_district_list(provincial_id, district)
        .unwrap();

    RegionalService::new(&mut state)
        .save_list_councilor(provincial_id, None, Councilor::new("Provincial", Gender::Male, 1))
        .unwrap();
    RegionalService::new(&mut state)
        .save_list_councilor(
            provincial_id,
            Some(district_id),
            Councilor::new("Distrital", Gender::Female, 1),
        )
        .unwrap();

    let provincial = &state.regional_body.provincial_lists[0];
    assert_eq!(provincial.councilors.len(), 1);
    assert_eq!(provincial.district_lists[0].councilors.len(), 1);
    assert_eq!(provincial.district_lists[0].councilors[0].name, "Distrital");
}

#[test]
fn list_mayor_can_be_set_and_cleared() {
    let mut state = Dashboard::new();
    let provincial = ProvincialList::new("Santa", 120_000);
    let provincial_id = provincial.id;
    RegionalService::new(&mut state).save_provincial_list(provincial).unwrap();

    RegionalService::new(&mut state)
        .set_list_mayor(
            provincial_id,
            None,
            Some(ListMayor::new("Carla Moreno", Gender::Female)),
        )
        .unwrap();
    assert!(state.regional_body.provincial_lists[0].mayor.is_some());

    RegionalService::new(&mut state)
        .set_list_mayor(provincial_id, None, None)
        .unwrap();
    assert!(state.regional_body.provincial_lists[0].mayor.is_none());
}

#[test]
fn deleting_provincial_list_drops_district_lists() {
    let mut state = Dashboard::new();
    let provincial = ProvincialList::new("Santa", 120_000);
    let provincial_id = provincial.id;
    RegionalService::new(&mut state).save_provincial_list(provincial).unwrap();
    RegionalService::new(&mut state)
        .save_district_list(provincial_id, DistrictList::new("Chimbote", 60_000))
        .unwrap();

    RegionalService::new(&mut state)
        .delete_provincial_list(provincial_id)
        .unwrap();
    assert!(state.regional_body.provincial_lists.is_empty());
}

#[test]
fn councilors_render_by_ballot_number() {
    let councilors = vec![
        Councilor::new("Tercero", Gender::Male, 3),
        Councilor::new("Primero", Gender::Female, 1),
        Councilor::new("Segundo", Gender::Male, 2),
    ];

    let ordered = councilors_by_number(&councilors);
    let names: Vec<&str> = ordered.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Primero", "Segundo", "Tercero"]);
}
