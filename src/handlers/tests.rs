use super::{DocumentHandler, EchoHandler, Handler, StatusHandler};
use crate::clock::ProcessClock;
use crate::http::Request;
use bytes::Bytes;
use http::{Method, StatusCode};
use serde_json::Value;

fn request(
    method: Method,
    path: &str,
    query: Option<&str>,
    headers: Vec<(&str, &str)>,
    body: &[u8],
) -> Request {
    Request {
        method,
        path: path.to_string(),
        query: query.map(str::to_string),
        headers: headers
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
        body: Bytes::copy_from_slice(body),
        peer_addr: "127.0.0.1:54321".to_string(),
    }
}

#[tokio::test]
async fn test_status_reports_a_single_uptime_field() {
    let handler = StatusHandler::new(ProcessClock::start());
    let response = handler
        .handle(&request(Method::GET, "/status", None, vec![], b""))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.header("content-type"), Some("application/json"));
    assert!(response.header("x-server").is_some());

    let json: Value = serde_json::from_slice(response.body()).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(!object["uptime"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_status_ignores_method_and_body() {
    let handler = StatusHandler::new(ProcessClock::start());
    let response = handler
        .handle(&request(Method::DELETE, "/status", None, vec![], b"junk"))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_slice(response.body()).unwrap();
    assert!(json.get("uptime").is_some());
}

#[tokio::test]
async fn test_echo_reflects_request_metadata() {
    let response = EchoHandler
        .handle(&request(
            Method::POST,
            "/anything",
            Some("a=1&a=2&b=x"),
            vec![("X-Test", "one"), ("X-Test", "two"), ("Host", "localhost")],
            b"hello world",
        ))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_slice(response.body()).unwrap();

    assert_eq!(json["path"], "/anything");
    assert_eq!(json["method"], "POST");
    assert_eq!(json["origin"], "127.0.0.1:54321");
    assert_eq!(json["url"], "/anything?a=1&a=2&b=x");
    assert_eq!(json["body"], "hello world");

    // First query value wins; the rest are dropped.
    assert_eq!(json["arguments"]["a"], "1");
    assert_eq!(json["arguments"]["b"], "x");

    // Duplicate headers keep both values in wire order.
    let x_test = json["headers"]["X-Test"].as_array().unwrap();
    assert_eq!(x_test, &[Value::from("one"), Value::from("two")]);
}

#[tokio::test]
async fn test_echo_includes_the_process_environment() {
    let response = EchoHandler
        .handle(&request(Method::GET, "/", None, vec![], b""))
        .await;

    let json: Value = serde_json::from_slice(response.body()).unwrap();
    let env_vars = json["env_vars"].as_object().unwrap();
    for (key, value) in std::env::vars() {
        assert_eq!(
            env_vars.get(&key).and_then(Value::as_str),
            Some(value.as_str()),
            "missing or mismatched entry for {key}"
        );
    }
}

#[tokio::test]
async fn test_document_serves_first_readable_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("swagger.json");
    std::fs::write(&path, br#"{"openapi":"3.0.0"}"#).unwrap();

    let handler =
        DocumentHandler::with_paths(vec![dir.path().join("missing.json"), path.clone()]);
    let response = handler
        .handle(&request(Method::GET, "/swagger.json", None, vec![], b""))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.header("content-type"), Some("application/json"));
    assert_eq!(&response.body()[..], br#"{"openapi":"3.0.0"}"#);
}

#[tokio::test]
async fn test_document_content_is_served_opaquely() {
    // Not JSON at all; the handler must not care.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("swagger.json");
    std::fs::write(&path, b"definitely not json").unwrap();

    let handler = DocumentHandler::with_paths(vec![path]);
    let response = handler
        .handle(&request(Method::GET, "/swagger.json", None, vec![], b""))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(&response.body()[..], b"definitely not json");
}

#[tokio::test]
async fn test_document_missing_everywhere_is_a_500() {
    let dir = tempfile::tempdir().unwrap();
    let handler = DocumentHandler::with_paths(vec![
        dir.path().join("nope.json"),
        dir.path().join("also-nope.json"),
    ]);
    let response = handler
        .handle(&request(Method::GET, "/swagger.json", None, vec![], b""))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.body().is_empty());
}
