use bravo_core::{
    ticket_by_rank, CongressionalMember, Dashboard, PresidentialCandidate, TicketService,
    TicketServiceError, MAX_DEPUTIES,
};

#[test]
fn candidate_upsert_and_delete() {
    let mut state = Dashboard::new();
    let mut candidate = PresidentialCandidate::new("Elena Rivas", "Union Nacional", 1);
    let candidate_id = candidate.id;
    TicketService::new(&mut state).save_candidate(candidate.clone()).unwrap();

    candidate.candidate_description = "Lidera encuestas".to_string();
    TicketService::new(&mut state).save_candidate(candidate).unwrap();
    assert_eq!(state.presidential_candidates.len(), 1);
    assert_eq!(
        state.presidential_candidates[0].candidate_description,
        "Lidera encuestas"
    );

    TicketService::new(&mut state).delete_candidate(candidate_id).unwrap();
    assert!(state.presidential_candidates.is_empty());
}

#[test]
fn senator_slot_sets_and_clears() {
    let mut state = Dashboard::new();
    let candidate = PresidentialCandidate::new("Elena Rivas", "Union Nacional", 1);
    let candidate_id = candidate.id;
    TicketService::new(&mut state).save_candidate(candidate).unwrap();

    TicketService::new(&mut state)
        .set_senator(candidate_id, CongressionalMember::new("Hector Palacios"))
        .unwrap();
    assert!(state.presidential_candidates[0].senator.is_some());

    TicketService::new(&mut state).clear_senator(candidate_id).unwrap();
    assert!(state.presidential_candidates[0].senator.is_none());

    let err = TicketService::new(&mut state).clear_senator(candidate_id).unwrap_err();
    assert!(matches!(err, TicketServiceError::MemberNotFound(_)));
}

#[test]
fn deputy_list_is_capped() {
    let mut state = Dashboard::new();
    let candidate = PresidentialCandidate::new("Elena Rivas", "Union Nacional", 1);
    let candidate_id = candidate.id;
    TicketService::new(&mut state).save_candidate(candidate).unwrap();

    for n in 0..MAX_DEPUTIES {
        TicketService::new(&mut state)
            .save_deputy(candidate_id, CongressionalMember::new(format!("Deputy {n}")))
            .unwrap();
    }
    assert_eq!(state.presidential_candidates[0].deputies.len(), MAX_DEPUTIES);

    let err = TicketService::new(&mut state)
        .save_deputy(candidate_id, CongressionalMember::new("One Too Many"))
        .unwrap_err();
    assert!(matches!(err, TicketServiceError::DeputyListFull(id) if id == candidate_id));

    // Editing an existing deputy is still allowed at the cap.
    let mut existing = state.presidential_candidates[0].deputies[0].clone();
    existing.facebook_url = "https://facebook.com/d0".to_string();
    TicketService::new(&mut state)
        .save_deputy(candidate_id, existing)
        .unwrap();
    assert_eq!(state.presidential_candidates[0].deputies.len(), MAX_DEPUTIES);
}

#[test]
fn deputy_delete_removes_exactly_one() {
    let mut state = Dashboard::new();
    let candidate = PresidentialCandidate::new("Elena Rivas", "Union Nacional", 1);
    let candidate_id = candidate.id;
    TicketService::new(&mut state).save_candidate(candidate).unwrap();

    let first = CongressionalMember::new("Ines Bravo");
    let second = CongressionalMember::new("Mario Leon");
    TicketService::new(&mut state).save_deputy(candidate_id, first.clone()).unwrap();
    TicketService::new(&mut state).save_deputy(candidate_id, second.clone()).unwrap();

    TicketService::new(&mut state).delete_deputy(candidate_id, first.id).unwrap();
    let deputies = &state.presidential_candidates[0].deputies;
    assert_eq!(deputies.len(), 1);
    assert_eq!(deputies[0].id, second.id);
}

#[test]
fn ticket_orders_by_rank_ascending() {
    let candidates = vec![
        PresidentialCandidate::new("Tercera", "P3", 3),
        PresidentialCandidate::new("Primera", "P1", 1),
        PresidentialCandidate::new("Segunda", "P2", 2),
    ];

    let ticket = ticket_by_rank(&candidates);
    let names: Vec<&str> = ticket.iter().map(|c| c.candidate_name.as_str()).collect();
    assert_eq!(names, vec!["Primera", "Segunda", "Tercera"]);
}
