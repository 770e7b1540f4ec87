//! Tests for the Helldivers API client against a local HTTP responder.

use hellbot_api::{ApiConfig, HelldiversClient};
use hellbot_error::FetchErrorKind;
use hellbot_interface::OrderFetcher;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve one canned HTTP response and hand back the raw request text.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&request).to_string()
    });

    (format!("http://{}", addr), handle)
}

fn client_for(endpoint: &str) -> HelldiversClient {
    HelldiversClient::new(
        ApiConfig::default()
            .with_endpoint(endpoint)
            .with_super_client("hellbot-test")
            .with_super_contact("ops@example.com")
            .with_timeout_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_fetch_returns_payload_and_sends_identity() {
    let (endpoint, server) = serve_once(
        "200 OK",
        r#"[{"id":1,"briefing":"Hold","expiration":"2025-05-30T14:28:16Z"}]"#,
    )
    .await;

    let response = client_for(&endpoint).fetch("assignments").await.unwrap();
    let request = server.await.unwrap().to_lowercase();

    assert!(response.is_ok());
    assert_eq!(response.payload()[0]["id"], json!(1));
    assert!(request.starts_with("get /api/v1/assignments "));
    assert!(request.contains("x-super-client: hellbot-test"));
    assert!(request.contains("x-super-contact: ops@example.com"));
    assert!(request.contains("accept: application/json"));
}

#[tokio::test]
async fn test_fetch_surfaces_error_status_without_body_shape() {
    let (endpoint, server) = serve_once("500 Internal Server Error", "upstream exploded").await;

    let response = client_for(&endpoint).fetch("assignments").await.unwrap();
    server.await.unwrap();

    assert_eq!(*response.status(), 500);
    assert!(response.payload().is_null());
    let err = response.into_payload().unwrap_err();
    assert_eq!(err.kind, FetchErrorKind::Status(500));
}

#[tokio::test]
async fn test_fetch_rejects_non_json_success() {
    let (endpoint, server) = serve_once("200 OK", "<html>maintenance</html>").await;

    let err = client_for(&endpoint).fetch("assignments").await.unwrap_err();
    server.await.unwrap();

    assert!(matches!(err.kind, FetchErrorKind::InvalidBody(_)));
}

#[tokio::test]
async fn test_fetch_connection_refused_is_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = client_for(&endpoint).fetch("assignments").await.unwrap_err();

    assert!(matches!(err.kind, FetchErrorKind::Transport(_)));
}

#[tokio::test]
async fn test_health_check_reports_status() {
    let (endpoint, server) = serve_once("200 OK", "{}").await;

    let status = client_for(&endpoint).health_check().await.unwrap();
    let request = server.await.unwrap();

    assert_eq!(status, 200);
    assert!(request.starts_with("GET / "));
}
