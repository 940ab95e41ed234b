use super::test_utilities::{MockFlowise, MockReply};
use flowise::{FlowiseClient, Outcome, api};
use serde_json::json;

#[tokio::test]
async fn test_list_flows_returns_array_as_is() {
    let flows = json!([
        {"id": "abc123", "name": "Support bot", "deployed": true},
        {"id": "def456", "name": "RAG demo", "deployed": false}
    ]);
    let server = MockFlowise::start(MockReply::json(flows.clone()))
        .await
        .expect("Failed to start mock server");
    let client = FlowiseClient::new(&server.base_url()).unwrap();

    let outcome = client.list_flows(Some("secret")).await;

    assert_eq!(outcome, Outcome::Success(flows));
    let request = server.single_request();
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/api/v1/chatflows");
    assert_eq!(
        request.header("authorization").as_deref(),
        Some("Bearer secret")
    );
    assert_eq!(
        request.header("content-type").as_deref(),
        Some("application/json")
    );
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn test_get_flow_interpolates_id() {
    let server = MockFlowise::start(MockReply::json(json!({"id": "def456", "name": "RAG demo"})))
        .await
        .expect("Failed to start mock server");
    let client = FlowiseClient::new(&server.base_url()).unwrap();

    let outcome = client.get_flow("def456", None).await;

    assert!(!outcome.is_error());
    let request = server.single_request();
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/api/v1/chatflows/def456");
    assert_eq!(request.header("authorization"), None);
}

#[tokio::test]
async fn test_ping_never_authenticates() {
    let server = MockFlowise::start(MockReply::json(json!("pong")))
        .await
        .expect("Failed to start mock server");
    let client = FlowiseClient::new(&server.base_url()).unwrap();

    let outcome = client.ping().await;

    assert_eq!(outcome, Outcome::Success(json!("pong")));
    let request = server.single_request();
    assert_eq!(request.path, "/api/v1/ping");
    assert_eq!(request.header("authorization"), None);
}

#[tokio::test]
async fn test_send_descriptor_directly() {
    let server = MockFlowise::start(MockReply::json(json!({"ok": true})))
        .await
        .expect("Failed to start mock server");
    let client = FlowiseClient::new(&server.base_url()).unwrap();

    let value = client
        .try_send(&api::list_flows(None))
        .await
        .expect("list should succeed");

    assert_eq!(value, json!({"ok": true}));
    let request = server.single_request();
    assert_eq!(request.path, "/api/v1/chatflows");
    assert_eq!(request.header("authorization"), None);
    assert_eq!(
        request.header("content-type").as_deref(),
        Some("application/json")
    );
}
