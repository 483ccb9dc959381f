use crate::api::{models::*, ApiError, DnsApiClient, Rage4Client};
use crate::config::Config;
use crate::dns::{RecordError, RecordManager};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// base64("user@example.com:secret-token")
const AUTH: &str = "Basic dXNlckBleGFtcGxlLmNvbTpzZWNyZXQtdG9rZW4=";

fn client_for(server: &MockServer) -> Rage4Client {
    Rage4Client::new(&Config {
        username: "user@example.com".to_string(),
        api_token: "secret-token".to_string(),
        base_url: server.uri(),
    })
}

async fn mount_account(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/getdomains/"))
        .and(header("Authorization", AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 42, "name": "example.com", "owner_email": "user@example.com"}
        ])))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/getrecords/"))
        .and(query_param("id", "42"))
        .and(query_param("name", "example.com"))
        .and(header("Authorization", AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "name": "a.example.com",
                "type": "A",
                "content": "1.2.3.4",
                "priority": 1,
                "ttl": 3600,
                "domain_id": 42
            }
        ])))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_get_domains_sends_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getdomains/"))
        .and(header("Authorization", AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "example.com"},
            {"id": 2, "name": "example.org"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let domains = client_for(&server).get_domains().await.unwrap();
    assert_eq!(
        domains,
        vec![
            Domain { id: 1, name: "example.com".to_string() },
            Domain { id: 2, name: "example.org".to_string() },
        ]
    );
}

#[tokio::test]
async fn test_http_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getdomains/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .mount(&server)
        .await;

    match client_for(&server).get_domains().await {
        Err(ApiError::Http { status, body }) => {
            assert_eq!(status, 401);
            assert_eq!(body, "bad credentials");
        }
        other => panic!("expected HTTP error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/getdomains/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let result = client_for(&server).get_domains().await;
    assert!(matches!(result, Err(ApiError::Decode { ref body, .. }) if body == "<html>"));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let client = Rage4Client::new(&Config {
        username: "user@example.com".to_string(),
        api_token: "secret-token".to_string(),
        base_url: "http://127.0.0.1:1/".to_string(),
    });

    let result = client.get_domains().await;
    assert!(matches!(result, Err(ApiError::Transport(_))));
}

#[tokio::test]
async fn test_rejected_command() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/deleterecord/"))
        .and(query_param("id", "9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": false,
            "id": 0,
            "error": "record not found"
        })))
        .mount(&server)
        .await;

    match client_for(&server).delete_record(9).await {
        Err(ApiError::Rejected(message)) => assert_eq!(message, "record not found"),
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[tokio::test]
async fn test_show_after_load() {
    let server = MockServer::start().await;
    mount_account(&server).await;

    let manager = RecordManager::load(client_for(&server)).await.unwrap();

    let by_type = manager.show("A").unwrap();
    assert_eq!(by_type.len(), 1);
    assert_eq!(by_type[0].name, "a.example.com");
    assert_eq!(by_type[0].content, "1.2.3.4");

    let by_name = manager.show("a.example.com").unwrap();
    assert_eq!(by_name, by_type);

    assert!(matches!(manager.show("TXT"), Err(RecordError::NotFound(_))));
}

#[tokio::test]
async fn test_add_issues_createrecord() {
    let server = MockServer::start().await;
    mount_account(&server).await;
    Mock::given(method("GET"))
        .and(path("/createrecord/"))
        .and(query_param("id", "42"))
        .and(query_param("name", "new.example.com"))
        .and(query_param("content", "5.6.7.8"))
        .and(query_param("type", "A"))
        .and(query_param("priority", "1"))
        .and(header("Authorization", AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "id": 77,
            "error": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut manager = RecordManager::load(client_for(&server)).await.unwrap();
    manager
        .add(NewRecord {
            r#type: "A".to_string(),
            priority: 1,
            name: "new.example.com".to_string(),
            content: "5.6.7.8".to_string(),
        })
        .await
        .unwrap();

    let added = manager.show("new.example.com").unwrap();
    assert_eq!(added[0].id, 77);
}

#[tokio::test]
async fn test_add_existing_name_makes_no_call() {
    let server = MockServer::start().await;
    mount_account(&server).await;
    Mock::given(method("GET"))
        .and(path("/createrecord/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut manager = RecordManager::load(client_for(&server)).await.unwrap();
    let result = manager
        .add(NewRecord {
            r#type: "TXT".to_string(),
            priority: 1,
            name: "a.example.com".to_string(),
            content: "hello".to_string(),
        })
        .await;

    assert!(matches!(result, Err(RecordError::AlreadyExists(ref name)) if name == "a.example.com"));
}

#[tokio::test]
async fn test_delete_issues_deleterecord_once() {
    let server = MockServer::start().await;
    mount_account(&server).await;
    Mock::given(method("GET"))
        .and(path("/deleterecord/"))
        .and(query_param("id", "1"))
        .and(header("Authorization", AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "id": 1,
            "error": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut manager = RecordManager::load(client_for(&server)).await.unwrap();
    let deleted = manager.delete("a.example.com").await.unwrap();

    assert_eq!(deleted, vec![1]);
    assert!(manager.records().is_empty());
}

#[tokio::test]
async fn test_update_issues_updaterecord() {
    let server = MockServer::start().await;
    mount_account(&server).await;
    Mock::given(method("GET"))
        .and(path("/updaterecord/"))
        .and(query_param("id", "1"))
        .and(query_param("name", "a.example.com"))
        .and(query_param("content", "9.9.9.9"))
        .and(query_param("priority", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "id": 1,
            "error": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut manager = RecordManager::load(client_for(&server)).await.unwrap();
    manager.update("a.example.com", "9.9.9.9").await.unwrap();

    assert_eq!(manager.show("A").unwrap()[0].content, "9.9.9.9");
}
