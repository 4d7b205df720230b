use std::sync::Arc;

use serde_json::json;
use time::macros::datetime;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::DemoService;
use super::validator::throw_if_decision_not_available;
use crate::config::{ApiConfig, CoreConfig};
use crate::model::demo_request::{ApplicationDecisionEnum, DemoRequest};
use crate::provider::device_storage::DeviceStorage;
use crate::provider::device_storage::in_memory::InMemoryStorage;
use crate::provider::http_client::reqwest_client::ReqwestClient;
use crate::service::error::{BusinessLogicError, ServiceError};
use crate::service::session::SessionService;
use crate::store::UserCache;

async fn setup_service(base_url: &str) -> DemoService {
    let config = Arc::new(CoreConfig {
        api: ApiConfig {
            base_url: base_url.to_string(),
            request_timeout_secs: 5,
        },
        ..Default::default()
    });
    let storage = Arc::new(InMemoryStorage::new());
    storage.set("token", "access-123").await.unwrap();
    let session = Arc::new(SessionService::new(storage, Arc::new(UserCache::new())));
    DemoService::new(Arc::new(ReqwestClient::default()), session, config)
}

fn demo_at_ten() -> DemoRequest {
    let scheduled = datetime!(2025-01-01 10:00 UTC);
    DemoRequest {
        id: 5.into(),
        enquiry_id: 16.into(),
        tutor_id: 3.into(),
        demo_date: scheduled.date(),
        demo_time: scheduled.time(),
        message: None,
        user_application_accepted: ApplicationDecisionEnum::Pending,
        tutor_application_accepted: ApplicationDecisionEnum::Pending,
        created_date: datetime!(2024-12-30 08:00 UTC),
    }
}

#[test]
fn test_decision_guards_fire_in_order() {
    let before = datetime!(2025-01-01 9:59 UTC);
    let after = datetime!(2025-01-01 10:00 UTC);

    // not completed yet: even a finalized demo reports "not completed"
    let mut demo = demo_at_ten();
    demo.user_application_accepted = ApplicationDecisionEnum::Accepted;
    demo.tutor_application_accepted = ApplicationDecisionEnum::Accepted;
    assert!(matches!(
        throw_if_decision_not_available(&demo, before),
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::DemoNotCompleted(_)
        ))
    ));

    // completed + finalized
    assert!(matches!(
        throw_if_decision_not_available(&demo, after),
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::DemoAlreadyFinalized(_)
        ))
    ));

    // completed, not finalized, but the user already decided
    let mut demo = demo_at_ten();
    demo.user_application_accepted = ApplicationDecisionEnum::Rejected;
    assert!(matches!(
        throw_if_decision_not_available(&demo, after),
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::DecisionAlreadySubmitted(_)
        ))
    ));

    // all guards pass exactly at the scheduled time
    assert!(throw_if_decision_not_available(&demo_at_ten(), after).is_ok());
}

#[test]
fn test_schedule_action_is_hidden_once_a_demo_exists() {
    let existing = vec![demo_at_ten()];

    assert!(!DemoService::can_schedule_demo(&existing, 3.into()));
    assert!(DemoService::can_schedule_demo(&existing, 4.into()));
    assert!(DemoService::can_schedule_demo(&[], 3.into()));
}

#[tokio::test]
async fn test_schedule_demo_posts_after_precondition_check() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/enquiry-demo-requests"))
        .and(query_param("enquiry", "16"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/enquiry-demo-requests"))
        .and(body_partial_json(json!({
            "enquiry_id": 16,
            "tutor_id": 3,
            "demo_date": "2025-01-01",
            "demo_time": "10:00"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 5,
            "enquiry_id": 16,
            "tutor_id": 3,
            "demo_date": "2025-01-01",
            "demo_time": "10:00",
            "user_application_accepted": "pending",
            "tutor_application_accepted": "pending",
            "created": "2024-12-30T08:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = setup_service(&server.uri()).await;
    let demo = service
        .schedule_demo(
            16.into(),
            3.into(),
            time::macros::date!(2025 - 01 - 01),
            time::macros::time!(10:00),
            Some("  ".to_string()),
        )
        .await
        .unwrap();

    assert_eq!(demo.id, shared_types::DemoRequestId::from(5));
    assert!(!demo.is_application_finalized());
}

#[tokio::test]
async fn test_schedule_demo_rejects_a_duplicate_pair() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/enquiry-demo-requests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 5,
            "enquiry_id": 16,
            "tutor_id": 3,
            "demo_date": "2025-01-01",
            "demo_time": "10:00",
            "created": "2024-12-30T08:00:00Z"
        }])))
        .mount(&server)
        .await;

    let service = setup_service(&server.uri()).await;
    let result = service
        .schedule_demo(
            16.into(),
            3.into(),
            time::macros::date!(2025 - 02 - 01),
            time::macros::time!(11:00),
            None,
        )
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::BusinessLogic(
            BusinessLogicError::DemoAlreadyScheduled { .. }
        ))
    ));

    // only the precondition fetch went out
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}
