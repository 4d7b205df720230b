use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::BookingService;
use super::dto::BookDemoFormDTO;
use super::validator::validate_book_demo;
use crate::config::{ApiConfig, CoreConfig};
use crate::model::booking::BookingStatusEnum;
use crate::provider::device_storage::DeviceStorage;
use crate::provider::device_storage::in_memory::InMemoryStorage;
use crate::provider::http_client::reqwest_client::ReqwestClient;
use crate::service::error::{ServiceError, ValidationError};
use crate::service::session::SessionService;
use crate::store::UserCache;

async fn setup_service(base_url: &str) -> BookingService {
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
    BookingService::new(Arc::new(ReqwestClient::default()), session, config)
}

fn complete_form() -> BookDemoFormDTO {
    BookDemoFormDTO {
        contact_name: "Nikhil".to_string(),
        contact_email: "a@b.com".to_string(),
        contact_mobile: "9876543210".to_string(),
        demo_date: "2025-04-10".to_string(),
        demo_time: "18:00".to_string(),
        message: String::new(),
        address: "12 MG Road".to_string(),
    }
}

#[test]
fn test_booking_form_requires_date_and_time() {
    let mut form = complete_form();
    form.demo_date = String::new();
    form.demo_time = String::new();

    let errors = validate_book_demo(&form);
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors.get("demo_date").map(String::as_str),
        Some("Demo date is required")
    );
    assert_eq!(
        errors.get("demo_time").map(String::as_str),
        Some("Time is required")
    );
}

#[tokio::test]
async fn test_book_demo_posts_the_wire_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/demoapp"))
        .and(body_partial_json(json!({
            "tutor_id": 9,
            "contact_name": "Nikhil",
            "demo_date": "2025-04-10",
            "demo_time": "18:00",
            "address": "12 MG Road"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 31,
            "tutor_id": 9,
            "contact_name": "Nikhil",
            "contact_email": "a@b.com",
            "contact_mobile": "9876543210",
            "demo_date": "2025-04-10",
            "demo_time": "18:00",
            "address": "12 MG Road",
            "status": "pending",
            "created": "2025-04-01T08:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = setup_service(&server.uri()).await;
    let booking = service.book_demo(9.into(), &complete_form()).await.unwrap();

    assert_eq!(booking.id, shared_types::BookingId::from(31));
    assert_eq!(booking.status, BookingStatusEnum::Pending);
    // empty message is omitted from the payload entirely
    let request = &server.received_requests().await.unwrap()[0];
    let body: serde_json::Value = request.body_json().unwrap();
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn test_book_demo_rejects_invalid_form_without_request() {
    let server = MockServer::start().await;
    let service = setup_service(&server.uri()).await;

    let result = service.book_demo(9.into(), &BookDemoFormDTO::default()).await;

    assert!(matches!(
        result,
        Err(ServiceError::Validation(ValidationError::Fields(_)))
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_bookings_filters_by_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/demoapp"))
        .and(query_param("status", "accepted"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 31,
            "tutor_id": 9,
            "contact_name": "Nikhil",
            "contact_email": "a@b.com",
            "contact_mobile": "9876543210",
            "demo_date": "2025-04-10",
            "demo_time": "18:00",
            "status": "accepted",
            "created": "2025-04-01T08:00:00Z"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let service = setup_service(&server.uri()).await;
    let bookings = service
        .get_bookings(Some(BookingStatusEnum::Accepted))
        .await
        .unwrap();

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].status, BookingStatusEnum::Accepted);
}
