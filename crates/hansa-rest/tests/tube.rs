//! Mock-service tests for the tube client.
//!
//! These tests use wiremock to simulate the tube web-service and exercise
//! access-key authorization, the catalogue operations, and the recording
//! transfers without network access or a real deployment.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hansa_core::model::{AccessPlan, Group, Person};
use hansa_core::{AccessKey, Error, ServiceUrl, Upload};
use hansa_rest::{Paging, SeasonFilter, SeriesFilter, TubeClient};

const KEY: &str = "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

/// Helper to build a tube client against a mock server.
fn mock_tube(server: &MockServer) -> TubeClient {
    // HTTP is tolerated for loopback origins only
    let origin =
        ServiceUrl::new(&format!("http://127.0.0.1:{}", server.address().port())).unwrap();
    TubeClient::new(origin, AccessKey::new(KEY).unwrap())
}

// ============================================================================
// Authorization
// ============================================================================

#[tokio::test]
async fn test_every_request_carries_the_access_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/series"))
        .and(header("x-access-key", KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/services/flicks/3"))
        .and(header("x-access-key", KEY))
        .respond_with(ResponseTemplate::new(200).set_body_string("3"))
        .mount(&server)
        .await;

    let tube = mock_tube(&server);
    tube.query_series(&SeriesFilter::default()).await.unwrap();
    assert_eq!(tube.delete_flick(3).await.unwrap(), 3);
}

#[tokio::test]
async fn test_rejected_access_key_surfaces_as_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/series"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let tube = mock_tube(&server);
    let result = tube.query_series(&SeriesFilter::default()).await;

    match result {
        Err(Error::Protocol(protocol)) => assert!(protocol.is_auth_error()),
        other => panic!("expected protocol error, got {other:?}"),
    }
}

// ============================================================================
// People
// ============================================================================

#[tokio::test]
async fn test_find_person_sorts_phone_numbers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/people/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "identity": 7,
            "email": "carol@example.com",
            "phones": [
                { "number": "+49 30 9999" },
                { "number": "+49 30 1111" },
                { "number": "+49 30 5555" }
            ]
        })))
        .mount(&server)
        .await;

    let tube = mock_tube(&server);
    let person = tube.find_person(7).await.unwrap();

    let numbers: Vec<&str> = person.phones.iter().map(|p| p.number.as_str()).collect();
    assert_eq!(numbers, vec!["+49 30 1111", "+49 30 5555", "+49 30 9999"]);
}

#[tokio::test]
async fn test_update_person_requires_identity() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1"))
        .expect(0)
        .mount(&server)
        .await;

    let tube = mock_tube(&server);
    let person = Person {
        email: Some("dave@example.com".into()),
        ..Person::default()
    };
    let result = tube.update_person(&person, None).await;

    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[tokio::test]
async fn test_update_person_puts_to_the_identity_path() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/services/people/7"))
        .and(header("x-set-password", "renewed"))
        .respond_with(ResponseTemplate::new(200).set_body_string("7"))
        .mount(&server)
        .await;

    let tube = mock_tube(&server);
    let person = Person {
        identity: Some(7),
        email: Some("carol@example.com".into()),
        ..Person::default()
    };
    let identity = tube.update_person(&person, Some("renewed")).await.unwrap();

    assert_eq!(identity, 7);
}

// ============================================================================
// Access plans
// ============================================================================

#[tokio::test]
async fn test_access_plan_upsert_routes_through_the_tenant() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/people/7/access-plans"))
        .respond_with(ResponseTemplate::new(200).set_body_string("51"))
        .mount(&server)
        .await;

    let tube = mock_tube(&server);
    let plan: AccessPlan = serde_json::from_value(json!({
        "attributes": { "tenant-reference": 7 }
    }))
    .unwrap();
    let identity = tube.insert_or_update_access_plan(&plan).await.unwrap();

    assert_eq!(identity, 51);
}

#[tokio::test]
async fn test_access_plan_without_tenant_is_rejected_before_sending() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("51"))
        .expect(0)
        .mount(&server)
        .await;

    let tube = mock_tube(&server);
    let plan = AccessPlan::default();
    let result = tube.insert_or_update_access_plan(&plan).await;

    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

// ============================================================================
// Editable catalogue scoping
// ============================================================================

#[tokio::test]
async fn test_editable_series_for_admin_uses_the_top_level_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/series"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let tube = mock_tube(&server);
    let admin = Person {
        identity: Some(1),
        group: Some(Group::Admin),
        ..Person::default()
    };
    tube.query_editable_series(&admin, &Paging::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_editable_flicks_for_user_are_scoped_to_the_person() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/people/7/flicks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "identity": 3, "title": "Pilot", "ordinal": 1 }
        ])))
        .mount(&server)
        .await;

    let tube = mock_tube(&server);
    let editor = Person {
        identity: Some(7),
        group: Some(Group::User),
        ..Person::default()
    };
    let flicks = tube
        .query_editable_flicks(&editor, &Paging::default())
        .await
        .unwrap();

    assert_eq!(flicks.len(), 1);
    assert_eq!(flicks[0].title.as_deref(), Some("Pilot"));
}

// ============================================================================
// Catalogue traversal
// ============================================================================

#[tokio::test]
async fn test_query_seasons_uses_the_seasons_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/seasons"))
        .and(query_param("min-ordinal", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "identity": 21, "ordinal": 2, "attributes": { "series-reference": 9 } }
        ])))
        .mount(&server)
        .await;

    let tube = mock_tube(&server);
    let filter = SeasonFilter {
        min_ordinal: Some(2),
        ..SeasonFilter::default()
    };
    let seasons = tube.query_seasons(&filter).await.unwrap();

    assert_eq!(seasons[0].series_reference(), Some(9));
}

#[tokio::test]
async fn test_series_seasons_and_season_episodes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/series/9/seasons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "identity": 21, "ordinal": 1 },
            { "identity": 22, "ordinal": 2 }
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/seasons/21/episodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "identity": 3, "title": "Pilot", "ordinal": 1 }
        ])))
        .mount(&server)
        .await;

    let tube = mock_tube(&server);
    let seasons = tube.query_series_seasons(9, &Paging::default()).await.unwrap();
    assert_eq!(seasons.len(), 2);

    let episodes = tube
        .query_season_episodes(21, &Paging::default())
        .await
        .unwrap();
    assert_eq!(episodes[0].identity, Some(3));
}

// ============================================================================
// Recordings
// ============================================================================

#[tokio::test]
async fn test_find_recording_accepts_any_video_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/flicks/3/recording"))
        .and(header("accept", "video/*"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "video/mp4")
                .set_body_bytes(vec![0u8, 1, 2, 3]),
        )
        .mount(&server)
        .await;

    let tube = mock_tube(&server);
    let content = tube.find_flick_recording(3).await.unwrap();

    assert_eq!(content.len(), 4);
}

#[tokio::test]
async fn test_update_recording_sends_media_headers_and_returns_the_uri() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/services/flicks/3/recording"))
        .and(header("content-type", "video/mp4"))
        .and(header("x-content-description", "pilot.mp4"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("/media/recordings/3.mp4"),
        )
        .mount(&server)
        .await;

    let tube = mock_tube(&server);
    let upload = Upload::new("pilot.mp4", "video/mp4", vec![0u8; 16]);
    let uri = tube.update_flick_recording(3, &upload).await.unwrap();

    assert_eq!(uri, "/media/recordings/3.mp4");
}

#[tokio::test]
async fn test_delete_recording_returns_the_removed_uri() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/services/flicks/3/recording"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("/media/recordings/3.mp4"),
        )
        .mount(&server)
        .await;

    let tube = mock_tube(&server);
    let uri = tube.delete_flick_recording(3).await.unwrap();

    assert_eq!(uri, "/media/recordings/3.mp4");
}
