//! API client integration tests against a mocked backend: request tagging,
//! 401-driven credential clearing and the error taxonomy.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use azulu_admin::domain::DomainError;
use azulu_admin::infrastructure::api::{ADMIN_PASSWORD_HEADER, ApiClient};
use azulu_admin::infrastructure::session::{MemorySessionStore, SessionStore};

fn client(server: &MockServer, store: Arc<MemorySessionStore>) -> ApiClient {
    ApiClient::new(server.uri(), store)
}

fn event_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Azulu Rooftop",
        "venue_name": "Westerunie",
        "address": "Klonneplein 4-6, Amsterdam",
        "start_date": "2025-08-30",
        "start_time": "22:00",
        "end_time": "04:00",
        "time_zone": "Europe/Amsterdam",
        "ticket_status": "Available",
        "ticket_link": "https://tickets.example.com/azulu",
        "lineup": ["Nocturne", "Marea"],
        "genres": ["house", "afro"],
        "description": "Closing of the season.",
        "poster_url": "https://cdn.example.com/rooftop.jpg",
        "price": 27.5,
        "currency": "EUR"
    })
}

fn mailing_entry_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Ada",
        "email": "ada@example.com",
        "subscribed": true,
        "created_at": "2025-06-01T12:00:00Z"
    })
}

#[tokio::test]
async fn test_requests_carry_the_credential_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([event_json(1)])))
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::with_credential("secret1"));
    let client = client(&server, store);

    let events = client.list_events(0, 100, false).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "Azulu Rooftop");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let header = requests[0]
        .headers
        .get(ADMIN_PASSWORD_HEADER)
        .expect("request should be tagged");
    assert_eq!(header, "secret1");
}

#[tokio::test]
async fn test_requests_without_credential_omit_the_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client(&server, Arc::new(MemorySessionStore::new()));
    client.list_events(0, 100, false).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get(ADMIN_PASSWORD_HEADER).is_none());
}

#[tokio::test]
async fn test_unauthorized_response_clears_the_credential() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/djs"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "invalid admin password"})),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::with_credential("stale"));
    let client = client(&server, store.clone());

    let err = client.list_djs(0, 100).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(store.get().await, None);
}

#[tokio::test]
async fn test_application_error_carries_detail_and_keeps_credential() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/content"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({"detail": "Content with key 'hero' already exists"})),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::with_credential("secret1"));
    let client = client(&server, store.clone());

    let payload = azulu_admin::domain::ContentCreate {
        key: "hero".to_string(),
        string_collection: vec![],
        big_string: String::new(),
    };
    let err = client.create_content(&payload).await.unwrap_err();
    match err {
        DomainError::Api { status, detail } => {
            assert_eq!(status, 409);
            assert_eq!(detail, "Content with key 'hero' already exists");
        }
        other => panic!("expected an API error, got {other:?}"),
    }

    // Only an authorization failure clears the credential.
    assert_eq!(store.get().await.as_deref(), Some("secret1"));
}

#[tokio::test]
async fn test_unreachable_backend_is_a_network_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = ApiClient::new(uri, Arc::new(MemorySessionStore::new()));
    let err = client.list_events(0, 100, false).await.unwrap_err();
    assert!(matches!(err, DomainError::Network { .. }));
}

#[tokio::test]
async fn test_malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let client = client(&server, Arc::new(MemorySessionStore::new()));
    let err = client.get_event(3).await.unwrap_err();
    assert!(matches!(err, DomainError::Decode { .. }));
}

#[tokio::test]
async fn test_list_events_forwards_pagination_and_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .and(query_param("skip", "40"))
        .and(query_param("limit", "20"))
        .and(query_param("upcoming", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, Arc::new(MemorySessionStore::new()));
    client.list_events(40, 20, true).await.unwrap();
}

#[tokio::test]
async fn test_mailing_bare_array_normalises_to_a_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mailing-list"))
        .and(query_param("subscribed_only", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            mailing_entry_json(1),
            mailing_entry_json(2),
            mailing_entry_json(3)
        ])))
        .mount(&server)
        .await;

    let store = Arc::new(MemorySessionStore::with_credential("secret1"));
    let page = client(&server, store)
        .list_mailing(0, 20, true)
        .await
        .unwrap();
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.total, 3);
}

#[tokio::test]
async fn test_mailing_envelope_passes_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mailing-list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [mailing_entry_json(1)],
            "total": 57
        })))
        .mount(&server)
        .await;

    let page = client(&server, Arc::new(MemorySessionStore::new()))
        .list_mailing(0, 20, false)
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 57);
}

#[tokio::test]
async fn test_delete_returns_unit_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/mailing-list/12"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server, Arc::new(MemorySessionStore::with_credential("s")));
    client.delete_mailing_entry(12).await.unwrap();
}
