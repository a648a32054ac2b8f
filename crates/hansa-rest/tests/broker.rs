//! Mock-service tests for the broker client.
//!
//! These tests use wiremock to simulate the broker web-service and exercise
//! the client's wire behavior without network access or a real deployment.

use serde_json::json;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hansa_core::model::{Auction, AuctionStatus, Person};
use hansa_core::{Error, ServiceUrl, Upload};
use hansa_rest::{AuctionFilter, BrokerClient, OfferFilter, Paging};

/// Helper to build a service origin from a mock server.
fn mock_origin(server: &MockServer) -> ServiceUrl {
    // HTTP is tolerated for loopback origins only
    ServiceUrl::new(&format!("http://127.0.0.1:{}", server.address().port())).unwrap()
}

// ============================================================================
// Query encoding
// ============================================================================

#[tokio::test]
async fn test_query_auctions_single_parameter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/auctions"))
        .and(query_param("category", "ART"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "identity": 11, "category": "ART", "name": "Vase" }
        ])))
        .mount(&server)
        .await;

    let broker = BrokerClient::new(mock_origin(&server));
    let filter = AuctionFilter {
        category: Some("ART".into()),
        ..AuctionFilter::default()
    };
    let auctions = broker.query_auctions(&filter).await.unwrap();

    assert_eq!(auctions.len(), 1);
    assert_eq!(auctions[0].identity, Some(11));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("category=ART"));
}

#[tokio::test]
async fn test_query_auctions_empty_filter_has_no_query_string() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/auctions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let broker = BrokerClient::new(mock_origin(&server));
    broker
        .query_auctions(&AuctionFilter::default())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
    assert_eq!(requests[0].url.path(), "/services/auctions");
}

#[tokio::test]
async fn test_query_auctions_status_list_comma_joined() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/auctions"))
        .and(query_param("status", "OPEN,SEALED"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let broker = BrokerClient::new(mock_origin(&server));
    let filter = AuctionFilter {
        states: vec![AuctionStatus::Open, AuctionStatus::Sealed],
        ..AuctionFilter::default()
    };
    broker.query_auctions(&filter).await.unwrap();
}

#[tokio::test]
async fn test_query_offers_paging_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/offers"))
        .and(query_param("paging-offset", "20"))
        .and(query_param("paging-limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let broker = BrokerClient::new(mock_origin(&server));
    let filter = OfferFilter {
        paging: Paging::new(20, 10),
        ..OfferFilter::default()
    };
    broker.query_offers(&filter).await.unwrap();
}

#[tokio::test]
async fn test_find_auction_requests_detail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/auctions/42"))
        .and(query_param("detailed", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "identity": 42,
            "name": "Grandfather clock",
            "askingPrice": 120000,
            "attributes": { "seller-reference": 7, "bid-count": 3 }
        })))
        .mount(&server)
        .await;

    let broker = BrokerClient::new(mock_origin(&server));
    let auction = broker.find_auction(42).await.unwrap();

    assert_eq!(auction.identity, Some(42));
    assert_eq!(auction.asking_price, Some(120000));
    assert_eq!(auction.seller_reference(), Some(7));
    assert_eq!(auction.bid_count(), Some(3));
}

// ============================================================================
// Authorization
// ============================================================================

#[tokio::test]
async fn test_find_requester_uses_basic_authorization() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/people/requester"))
        .and(header(
            "authorization",
            "Basic YWxpY2VAZXhhbXBsZS5jb206c2VjcmV0MTIz",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "identity": 7,
            "email": "alice@example.com",
            "group": "USER"
        })))
        .mount(&server)
        .await;

    let broker = BrokerClient::new(mock_origin(&server));
    let requester = broker
        .find_requester("alice@example.com", "secret123")
        .await
        .unwrap();

    assert_eq!(requester.identity, Some(7));
    assert!(!requester.is_admin());
}

#[tokio::test]
async fn test_broker_requests_carry_no_access_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/offers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let broker = BrokerClient::new(mock_origin(&server));
    broker.query_offers(&OfferFilter::default()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("x-access-key"));
}

#[tokio::test]
async fn test_insert_person_sets_password_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/people"))
        .and(header("x-set-password", "changeit"))
        .respond_with(ResponseTemplate::new(200).set_body_string("15"))
        .mount(&server)
        .await;

    let broker = BrokerClient::new(mock_origin(&server));
    let person = Person {
        email: Some("bob@example.com".into()),
        ..Person::default()
    };
    let identity = broker
        .insert_or_update_person(&person, Some("changeit"))
        .await
        .unwrap();

    assert_eq!(identity, 15);
}

// ============================================================================
// Documents
// ============================================================================

#[tokio::test]
async fn test_find_document_content_returns_bytes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/documents/5"))
        .and(header("accept", "*/*"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(vec![0x89u8, 0x50, 0x4e, 0x47]),
        )
        .mount(&server)
        .await;

    let broker = BrokerClient::new(mock_origin(&server));
    let content = broker.find_document_content(5).await.unwrap();

    assert_eq!(content, vec![0x89u8, 0x50, 0x4e, 0x47]);
}

#[tokio::test]
async fn test_insert_document_sends_content_headers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/documents"))
        .and(header("content-type", "image/png"))
        .and(header("x-content-description", "avatar.png"))
        .respond_with(ResponseTemplate::new(200).set_body_string("33"))
        .mount(&server)
        .await;

    let broker = BrokerClient::new(mock_origin(&server));
    let upload = Upload::new("avatar.png", "image/png", vec![1, 2, 3]);
    let identity = broker.insert_or_update_document(&upload).await.unwrap();

    assert_eq!(identity, 33);
}

// ============================================================================
// Bids
// ============================================================================

#[tokio::test]
async fn test_bid_patch_sends_amount_as_text() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/services/auctions/42/bids"))
        .and(header("content-type", "text/plain"))
        .and(body_string("1500"))
        .respond_with(ResponseTemplate::new(200).set_body_string("42"))
        .mount(&server)
        .await;

    let broker = BrokerClient::new(mock_origin(&server));
    let identity = broker
        .insert_or_update_or_delete_auction_bid(42, 1500)
        .await
        .unwrap();

    assert_eq!(identity, 42);
}

#[tokio::test]
async fn test_bid_amount_zero_requests_deletion() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/services/auctions/42/bids"))
        .and(body_string("0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("42"))
        .mount(&server)
        .await;

    let broker = BrokerClient::new(mock_origin(&server));
    let identity = broker
        .insert_or_update_or_delete_auction_bid(42, 0)
        .await
        .unwrap();

    assert_eq!(identity, 42);
}

#[tokio::test]
async fn test_negative_bid_amount_is_rejected_before_sending() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/services/auctions/42/bids"))
        .respond_with(ResponseTemplate::new(200).set_body_string("42"))
        .expect(0)
        .mount(&server)
        .await;

    let broker = BrokerClient::new(mock_origin(&server));
    let result = broker.insert_or_update_or_delete_auction_bid(42, -100).await;

    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

// ============================================================================
// Orders
// ============================================================================

#[tokio::test]
async fn test_insert_order_patches_the_offer() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/services/offers/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("91"))
        .mount(&server)
        .await;

    let broker = BrokerClient::new(mock_origin(&server));
    let identity = broker.insert_order(7).await.unwrap();

    assert_eq!(identity, 91);
}

#[tokio::test]
async fn test_update_order_sends_tracking_reference() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/services/orders/91"))
        .and(body_string("DHL-1234"))
        .respond_with(ResponseTemplate::new(200).set_body_string("91"))
        .mount(&server)
        .await;

    let broker = BrokerClient::new(mock_origin(&server));
    let identity = broker.update_order(91, Some("DHL-1234")).await.unwrap();

    assert_eq!(identity, 91);
}

// ============================================================================
// Error mapping
// ============================================================================

#[tokio::test]
async fn test_missing_resource_maps_to_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/auctions/9999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let broker = BrokerClient::new(mock_origin(&server));
    let result = broker.find_auction(9999).await;

    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("404"), "unexpected message: {message}");
}

#[tokio::test]
async fn test_service_failure_with_plain_body_maps_to_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/offers"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance window"))
        .mount(&server)
        .await;

    let broker = BrokerClient::new(mock_origin(&server));
    let result = broker.query_offers(&OfferFilter::default()).await;

    match result {
        Err(Error::Protocol(protocol)) => {
            assert_eq!(protocol.status, 503);
        }
        other => panic!("expected protocol error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_garbled_identity_response_maps_to_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/services/auctions/42"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let broker = BrokerClient::new(mock_origin(&server));
    let result = broker.delete_auction(42).await;

    assert!(matches!(result, Err(Error::Decode(_))));
}

// ============================================================================
// Round trips
// ============================================================================

#[tokio::test]
async fn test_insert_auction_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/auctions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("77"))
        .mount(&server)
        .await;

    let broker = BrokerClient::new(mock_origin(&server));
    let auction = Auction {
        name: Some("Writing desk".into()),
        category: Some("FURNITURE".into()),
        asking_price: Some(45000),
        ..Auction::default()
    };
    let identity = broker.insert_or_update_auction(&auction).await.unwrap();

    assert_eq!(identity, 77);

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["name"], json!("Writing desk"));
    assert_eq!(body["askingPrice"], json!(45000));
    assert!(body.get("identity").is_none());
}
