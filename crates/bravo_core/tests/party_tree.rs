use bravo_core::{
    districts_by_voters, provinces_by_voters, Candidate, Dashboard, District, Party,
    PartyService, PartyServiceError, Province, Role,
};

fn setup() -> Dashboard {
    Dashboard::new()
}

#[test]
fn save_party_appends_then_replaces_in_place() {
    let mut state = setup();
    let party = Party::new("Fuerza Andina", "Partido tradicional");
    let party_id = party.id;

    PartyService::new(&mut state).save_party(party.clone()).unwrap();
    assert_eq!(state.parties.len(), 1);

    let other = Party::new("Renovacion Costera", "Movimiento regional");
    PartyService::new(&mut state).save_party(other.clone()).unwrap();

    let mut renamed = party;
    renamed.description = "Partido renovado".to_string();
    PartyService::new(&mut state).save_party(renamed).unwrap();

    assert_eq!(state.parties.len(), 2);
    assert_eq!(state.parties[0].id, party_id);
    assert_eq!(state.parties[0].description, "Partido renovado");
    assert_eq!(state.parties[1].id, other.id);
}

#[test]
fn save_party_rejects_blank_name() {
    let mut state = setup();
    let err = PartyService::new(&mut state)
        .save_party(Party::new("   ", "desc"))
        .unwrap_err();
    assert!(matches!(err, PartyServiceError::BlankName));
    assert!(state.parties.is_empty());
}

#[test]
fn empty_to_edited_governor_scenario() {
    // Start with zero parties; add party X; add governor; edit nickname.
    let mut state = setup();
    assert!(state.parties.is_empty());

    let party = Party::new("X", "test party");
    let party_id = party.id;
    PartyService::new(&mut state).save_party(party).unwrap();

    let mut governor = Candidate::new(party_id, Role::Governor, "Juan Perez");
    governor.nickname = "El Viejo".to_string();
    let governor_id = governor.id;
    PartyService::new(&mut state)
        .save_candidate(governor.clone(), None)
        .unwrap();

    governor.nickname = "El Constructor".to_string();
    PartyService::new(&mut state)
        .save_candidate(governor, None)
        .unwrap();

    let party = &state.parties[0];
    let saved = party.governor.as_ref().unwrap();
    assert_eq!(saved.id, governor_id);
    assert_eq!(saved.nickname, "El Constructor");
    assert!(party.provinces.is_empty());
}

#[test]
fn delete_province_cascades_to_districts_and_mayors() {
    let mut state = setup();
    let party = Party::new("X", "test party");
    let party_id = party.id;
    PartyService::new(&mut state).save_party(party).unwrap();

    let province = Province::new("P", 100);
    let province_id = province.id;
    PartyService::new(&mut state)
        .save_province(party_id, province)
        .unwrap();

    let district = District::new("D", 40);
    let district_id = district.id;
    PartyService::new(&mut state)
        .save_district(party_id, province_id, district)
        .unwrap();

    let mayor = Candidate::new(party_id, Role::DistrictMayor, "Carlos");
    PartyService::new(&mut state)
        .save_candidate(mayor, Some(district_id))
        .unwrap();

    PartyService::new(&mut state)
        .delete_province(party_id, province_id)
        .unwrap();

    let party = &state.parties[0];
    assert!(party.provinces.iter().all(|p| p.id != province_id));
    assert!(party
        .provinces
        .iter()
        .flat_map(|p| &p.districts)
        .all(|d| d.id != district_id));
}

#[test]
fn save_candidate_places_mayors_by_role_and_location() {
    let mut state = setup();
    let party = Party::new("X", "test party");
    let party_id = party.id;
    PartyService::new(&mut state).save_party(party).unwrap();

    let province = Province::new("Santa", 350_000);
    let province_id = province.id;
    PartyService::new(&mut state)
        .save_province(party_id, province)
        .unwrap();
    let district = District::new("Chimbote", 210_000);
    let district_id = district.id;
    PartyService::new(&mut state)
        .save_district(party_id, province_id, district)
        .unwrap();

    let provincial = Candidate::new(party_id, Role::ProvincialMayor, "Maria");
    PartyService::new(&mut state)
        .save_candidate(provincial.clone(), Some(province_id))
        .unwrap();

    let district_mayor = Candidate::new(party_id, Role::DistrictMayor, "Carlos");
    PartyService::new(&mut state)
        .save_candidate(district_mayor.clone(), Some(district_id))
        .unwrap();

    let province = &state.parties[0].provinces[0];
    assert_eq!(province.mayors.len(), 1);
    assert_eq!(province.mayors[0].id, provincial.id);
    assert_eq!(province.districts[0].mayors.len(), 1);
    assert_eq!(province.districts[0].mayors[0].id, district_mayor.id);
}

#[test]
fn save_candidate_with_existing_id_replaces_wherever_it_lives() {
    let mut state = setup();
    let party = Party::new("X", "test party");
    let party_id = party.id;
    PartyService::new(&mut state).save_party(party).unwrap();
    let province = Province::new("Santa", 350_000);
    let province_id = province.id;
    PartyService::new(&mut state)
        .save_province(party_id, province)
        .unwrap();

    let mut mayor = Candidate::new(party_id, Role::ProvincialMayor, "Maria");
    PartyService::new(&mut state)
        .save_candidate(mayor.clone(), Some(province_id))
        .unwrap();

    // Edit without a location id: the existing record is found in place.
    mayor.nickname = "La Dama de Hierro".to_string();
    PartyService::new(&mut state)
        .save_candidate(mayor.clone(), None)
        .unwrap();

    let mayors = &state.parties[0].provinces[0].mayors;
    assert_eq!(mayors.len(), 1);
    assert_eq!(mayors[0].nickname, "La Dama de Hierro");
}

#[test]
fn save_new_mayor_without_location_fails() {
    let mut state = setup();
    let party = Party::new("X", "test party");
    let party_id = party.id;
    PartyService::new(&mut state).save_party(party).unwrap();

    let mayor = Candidate::new(party_id, Role::ProvincialMayor, "Maria");
    let err = PartyService::new(&mut state)
        .save_candidate(mayor, None)
        .unwrap_err();
    assert!(matches!(err, PartyServiceError::MissingLocation(Role::ProvincialMayor)));
}

#[test]
fn delete_candidate_clears_governor_or_filters_mayors() {
    let mut state = setup();
    let party = Party::new("X", "test party");
    let party_id = party.id;
    PartyService::new(&mut state).save_party(party).unwrap();

    let governor = Candidate::new(party_id, Role::Governor, "Juan");
    let governor_id = governor.id;
    PartyService::new(&mut state)
        .save_candidate(governor, None)
        .unwrap();

    let province = Province::new("Santa", 10);
    let province_id = province.id;
    PartyService::new(&mut state)
        .save_province(party_id, province)
        .unwrap();
    let mayor = Candidate::new(party_id, Role::ProvincialMayor, "Maria");
    let mayor_id = mayor.id;
    PartyService::new(&mut state)
        .save_candidate(mayor, Some(province_id))
        .unwrap();

    PartyService::new(&mut state)
        .delete_candidate(party_id, governor_id)
        .unwrap();
    assert!(state.parties[0].governor.is_none());

    PartyService::new(&mut state)
        .delete_candidate(party_id, mayor_id)
        .unwrap();
    assert!(state.parties[0].provinces[0].mayors.is_empty());

    let err = PartyService::new(&mut state)
        .delete_candidate(party_id, mayor_id)
        .unwrap_err();
    assert!(matches!(err, PartyServiceError::CandidateNotFound(id) if id == mayor_id));
}

#[test]
fn voter_ordering_is_descending_and_non_mutating() {
    let mut state = setup();
    let party = Party::new("X", "test party");
    let party_id = party.id;
    PartyService::new(&mut state).save_party(party).unwrap();

    let small = Province::new("Small", 100);
    let big = Province::new("Big", 900);
    PartyService::new(&mut state)
        .save_province(party_id, small.clone())
        .unwrap();
    PartyService::new(&mut state)
        .save_province(party_id, big.clone())
        .unwrap();

    let party = &state.parties[0];
    let ordered = provinces_by_voters(party);
    assert_eq!(ordered[0].id, big.id);
    assert_eq!(ordered[1].id, small.id);
    // Stored order keeps insertion order.
    assert_eq!(party.provinces[0].id, small.id);

    let mut province = Province::new("P", 10);
    province.districts.push(District::new("Low", 40));
    province.districts.push(District::new("High", 400));
    let districts = districts_by_voters(&province);
    assert_eq!(districts[0].name, "High");
}
