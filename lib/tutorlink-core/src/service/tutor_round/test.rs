use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::TutorRoundService;
use super::aggregator::{group_into_rounds, toggle_select_all, toggle_selection, update_action};
use super::dto::SentTutorResponseDTO;
use crate::config::{ApiConfig, CoreConfig};
use crate::model::round::TutorActionEnum;
use crate::provider::device_storage::DeviceStorage;
use crate::provider::device_storage::in_memory::InMemoryStorage;
use crate::provider::http_client::reqwest_client::ReqwestClient;
use crate::service::error::{BusinessLogicError, ServiceError};
use crate::service::session::SessionService;
use crate::store::UserCache;

fn entries_fixture() -> Vec<SentTutorResponseDTO> {
    serde_json::from_value(json!([
        {"tutor_id": 1, "tutor_name": "Ramesh Kumar", "action": "pending",
         "created": "2025-01-01T10:00:00Z"},
        {"tutor_id": 2, "tutor_name": "Suresh Rao", "action": "accepted",
         "created": "2025-01-01T10:00:00Z"},
        {"tutor_id": 3, "tutor_name": "Anjali Sharma", "action": "pending",
         "created": "2025-01-02T11:30:00Z"},
        {"tutor_id": 4, "tutor_name": "Vikram Singh", "action": "pending",
         "created": "2025-01-02T11:30:00Z"},
        {"tutor_id": 5, "tutor_name": "Neha Patel", "action": "pending",
         "created": "2025-01-03T09:15:00Z"}
    ]))
    .unwrap()
}

#[test]
fn test_grouping_by_timestamp_buckets_in_chronological_order() {
    let rounds = group_into_rounds(&entries_fixture());

    assert_eq!(rounds.len(), 3);
    assert_eq!(
        rounds
            .iter()
            .map(|round| round.round_number)
            .collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(rounds[0].tutors.len(), 2);
    assert_eq!(rounds[1].tutors.len(), 2);
    assert_eq!(rounds[2].tutors.len(), 1);
    assert!(rounds[0].created_date < rounds[1].created_date);
}

#[test]
fn test_grouping_prefers_explicit_round_numbers() {
    let entries: Vec<SentTutorResponseDTO> = serde_json::from_value(json!([
        {"tutor_id": 1, "round_number": 2, "created": "2025-01-05T10:00:00Z"},
        {"tutor_id": 2, "round_number": 1, "created": "2025-01-01T10:00:00Z"},
        {"tutor_id": 3, "round_number": 1, "created": "2025-01-01T10:00:00Z"}
    ]))
    .unwrap();

    let rounds = group_into_rounds(&entries);

    assert_eq!(rounds.len(), 2);
    assert_eq!(rounds[0].tutors.len(), 2);
    assert_eq!(rounds[0].tutors[0].tutor_id, shared_types::TutorId::from(2));
    assert_eq!(rounds[1].tutors[0].tutor_id, shared_types::TutorId::from(1));
}

#[test]
fn test_grouping_is_deterministic() {
    let first = group_into_rounds(&entries_fixture());
    let second = group_into_rounds(&entries_fixture());

    assert_eq!(first, second);
}

#[test]
fn test_toggle_selection_skips_accepted_candidates() {
    let mut rounds = group_into_rounds(&entries_fixture());
    let round = &mut rounds[0];

    toggle_selection(round, 1.into());
    assert!(round.candidate(1.into()).unwrap().selected);
    toggle_selection(round, 1.into());
    assert!(!round.candidate(1.into()).unwrap().selected);

    // tutor 2 is accepted: toggling is a no-op
    toggle_selection(round, 2.into());
    assert!(!round.candidate(2.into()).unwrap().selected);
}

#[test]
fn test_toggle_select_all_flips_on_aggregate_state() {
    let mut rounds = group_into_rounds(&entries_fixture());
    let round = &mut rounds[0];

    // tutor 1 pending+unselected, tutor 2 accepted: not "all selected"
    toggle_select_all(round);
    assert!(round.candidate(1.into()).unwrap().selected);
    assert!(!round.candidate(2.into()).unwrap().selected);
    assert!(round.all_selected_or_accepted());

    // now everything is selected-or-accepted: the same control clears
    toggle_select_all(round);
    assert!(!round.candidate(1.into()).unwrap().selected);
}

#[test]
fn test_accepting_clears_selection_and_locks_the_entry() {
    let mut rounds = group_into_rounds(&entries_fixture());
    let round = &mut rounds[1];

    toggle_selection(round, 3.into());
    assert!(round.candidate(3.into()).unwrap().selected);

    update_action(round, 3.into(), TutorActionEnum::Accepted).unwrap();
    let candidate = round.candidate(3.into()).unwrap();
    assert_eq!(candidate.action, TutorActionEnum::Accepted);
    assert!(!candidate.selected);

    // immutable once accepted
    let result = update_action(round, 3.into(), TutorActionEnum::Rejected);
    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::TutorAlreadyAccepted(_)
        ))
    ));
    assert_eq!(
        round.candidate(3.into()).unwrap().action,
        TutorActionEnum::Accepted
    );

    toggle_selection(round, 3.into());
    assert!(!round.candidate(3.into()).unwrap().selected);
}

#[test]
fn test_next_round_hint_follows_accepted_candidates() {
    let rounds = group_into_rounds(&entries_fixture());

    assert!(rounds[0].has_triggered_next_round());
    assert!(!rounds[1].has_triggered_next_round());
}

#[tokio::test]
async fn test_get_rounds_fetches_and_groups() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/send-tutors"))
        .and(query_param("enquiry", "16"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"tutor_id": 1, "tutor_name": "Ramesh Kumar", "action": "pending",
             "created": "2025-01-01T10:00:00Z"},
            {"tutor_id": 3, "tutor_name": "Anjali Sharma", "action": "pending",
             "created": "2025-01-02T11:30:00Z"}
        ])))
        .mount(&server)
        .await;

    let config = Arc::new(CoreConfig {
        api: ApiConfig {
            base_url: server.uri(),
            request_timeout_secs: 5,
        },
        ..Default::default()
    });
    let storage = Arc::new(InMemoryStorage::new());
    storage.set("token", "access-123").await.unwrap();
    let session = Arc::new(SessionService::new(storage, Arc::new(UserCache::new())));
    let service = TutorRoundService::new(Arc::new(ReqwestClient::default()), session, config);

    let rounds = service.get_rounds(16.into()).await.unwrap();

    assert_eq!(rounds.len(), 2);
    assert_eq!(rounds[0].round_number, 1);
    assert_eq!(rounds[0].tutors[0].tutor_name, "Ramesh Kumar");
}
