//! Session login and authentication behavior.
//!
//! Uses wiremock to mock the FUGA API at the HTTP level.

use fugapi::{FugaClient, FugaError, Get, Product};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mount a `/login` mock that accepts any credentials and issues a
/// session cookie.
async fn mount_login(server: &MockServer, cookie: &str) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", format!("{cookie}; Path=/; HttpOnly").as_str())
                .set_body_json(serde_json::json!({ "user": { "id": 1, "name": "someone" } })),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_sends_credentials_and_stores_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(serde_json::json!({
            "name": "someone",
            "password": "secret"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "connect.sid=abc123; Path=/; HttpOnly")
                .set_body_json(serde_json::json!({ "user": { "id": 1 } })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FugaClient::new(&mock_server.uri(), "someone", "secret").unwrap();
    assert!(!client.is_logged_in());

    client.login().await.unwrap();
    assert!(client.is_logged_in());
}

#[tokio::test]
async fn test_login_rejected_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": { "code": "UNAUTHENTICATED", "message": "Bad credentials" }
        })))
        .mount(&mock_server)
        .await;

    let client = FugaClient::new(&mock_server.uri(), "someone", "wrong").unwrap();
    let err = client.login().await.unwrap_err();

    assert!(matches!(err, FugaError::Authentication(_)));
    assert!(!client.is_logged_in());
}

#[tokio::test]
async fn test_login_without_session_cookie_fails() {
    let mock_server = MockServer::start().await;

    // 200 but no Set-Cookie header
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "user": { "id": 1 } })),
        )
        .mount(&mock_server)
        .await;

    let client = FugaClient::new(&mock_server.uri(), "someone", "secret").unwrap();
    let err = client.login().await.unwrap_err();

    assert!(matches!(err, FugaError::Authentication(_)));
}

#[tokio::test]
async fn test_request_before_login_fails_without_network() {
    let mock_server = MockServer::start().await;

    // No mocks mounted: a request reaching the server would 404. The
    // client must refuse before that.
    let client = FugaClient::new(&mock_server.uri(), "someone", "secret").unwrap();
    let err = Product::get(&client, 1).await.unwrap_err();

    assert!(matches!(err, FugaError::NotAuthenticated));
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_session_cookie_replayed_on_requests() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, "connect.sid=token-xyz").await;

    Mock::given(method("GET"))
        .and(path("/products/7"))
        .and(header("cookie", "connect.sid=token-xyz"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "id": 7, "name": "Album" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FugaClient::new(&mock_server.uri(), "someone", "secret").unwrap();
    client.login().await.unwrap();

    let product = Product::get(&client, 7).await.unwrap();
    assert_eq!(product.name, "Album");
}

#[tokio::test]
async fn test_clones_share_session() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, "connect.sid=shared").await;

    let client = FugaClient::new(&mock_server.uri(), "someone", "secret").unwrap();
    let clone = client.clone();

    client.login().await.unwrap();

    // The clone observes the session established by the original
    assert!(clone.is_logged_in());
}

#[tokio::test]
async fn test_malformed_success_body_is_api_error() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, "connect.sid=abc").await;

    Mock::given(method("GET"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = FugaClient::new(&mock_server.uri(), "someone", "secret").unwrap();
    client.login().await.unwrap();

    let err = Product::get(&client, 1).await.unwrap_err();
    match err {
        FugaError::Api { message, .. } => {
            assert!(message.contains("unexpected response format"));
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_envelope_list_is_flattened() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server, "connect.sid=abc").await;

    Mock::given(method("GET"))
        .and(path("/products/1"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "error": [
                { "code": "MISSING_UPC", "message": "Product has no barcode" },
                {
                    "code": "MISSING_AUDIO",
                    "message": "Track has no audio",
                    "original_error": { "error_info": "asset 2000" }
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = FugaClient::new(&mock_server.uri(), "someone", "secret").unwrap();
    client.login().await.unwrap();

    let err = Product::get(&client, 1).await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Code: MISSING_UPC, Message: Product has no barcode"));
    assert!(message.contains("Context: asset 2000"));
    assert_eq!(err.status_code(), Some(422));
}
