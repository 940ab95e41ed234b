use super::test_utilities::{TestServer, run_cli, unreachable_url};
use serde_json::json;

#[tokio::test]
async fn test_not_found_exits_one_with_record() {
    let server = TestServer::start(404, r#"{"message":"Chatflow missing not found"}"#)
        .await
        .expect("Failed to start test server");

    let run = run_cli(&["-u", &server.url(), "get", "-f", "missing"]).await;

    assert_eq!(run.code, Some(1));
    assert_eq!(
        run.json(),
        json!({
            "error": true,
            "status": 404,
            "message": "Not Found",
            "detail": "{\"message\":\"Chatflow missing not found\"}"
        })
    );
    assert_eq!(server.seen().len(), 1);
}

#[tokio::test]
async fn test_unreachable_server_exits_one_without_status() {
    let url = unreachable_url();

    let run = run_cli(&["-u", &url, "list"]).await;

    assert_eq!(run.code, Some(1));
    let value = run.json();
    assert_eq!(value["error"], json!(true));
    assert!(value["message"].is_string());
    assert!(value.get("status").is_none());
}

#[tokio::test]
async fn test_error_payload_from_server_exits_one() {
    let server = TestServer::start(200, r#"{"error":"flow crashed"}"#)
        .await
        .expect("Failed to start test server");

    let run = run_cli(&["-u", &server.url(), "predict", "-f", "f", "-q", "q"]).await;

    assert_eq!(run.code, Some(1));
    assert_eq!(run.json(), json!({"error": "flow crashed"}));
}

#[tokio::test]
async fn test_missing_subcommand_is_usage_error() {
    let run = run_cli(&["--url", "http://127.0.0.1:9"]).await;

    assert_ne!(run.code, Some(0));
    assert!(run.stdout.is_empty());
}

#[tokio::test]
async fn test_missing_url_is_usage_error() {
    let run = run_cli(&["ping"]).await;

    assert_eq!(run.code, Some(2));
    assert!(run.stderr.contains("--url"));
    assert!(run.stdout.is_empty());
}

#[tokio::test]
async fn test_missing_question_is_usage_error() {
    let run = run_cli(&["-u", "http://127.0.0.1:9", "predict", "-f", "abc123"]).await;

    assert_eq!(run.code, Some(2));
    assert!(run.stderr.contains("--question"));
}
