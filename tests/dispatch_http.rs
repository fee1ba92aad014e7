//! End-to-end dispatch tests — registry → HTTP transport → stub server → decode.

use axum::extract::{RawQuery, State};
use axum::http::HeaderMap;
use axum::routing::get;
use axum::Router;
use neutrino_mcp::{Config, Error, ErrorKind, ToolRegistry};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Last request the stub server saw, for header and query assertions.
#[derive(Default, Clone)]
struct Recorded {
    query: Option<String>,
    headers: Vec<(String, String)>,
}

type Shared = Arc<Mutex<Recorded>>;

fn record(shared: &Shared, query: Option<String>, headers: &HeaderMap) {
    let mut recorded = shared.lock().unwrap();
    recorded.query = query;
    recorded.headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or("").to_string(),
            )
        })
        .collect();
}

/// Spin up a stub Neutrino API on a random port; return (base_url, recorder).
async fn start_stub_server() -> (String, Shared) {
    let shared: Shared = Arc::new(Mutex::new(Recorded::default()));

    let app = Router::new()
        .route(
            "/ip-info",
            get(
                |State(shared): State<Shared>, RawQuery(query): RawQuery, headers: HeaderMap| async move {
                    record(&shared, query, &headers);
                    r#"{"ip": "1.2.3.4", "country": "Germany", "city": "Berlin", "valid": true}"#
                },
            ),
        )
        .route(
            "/convert",
            get(
                |State(shared): State<Shared>, RawQuery(query): RawQuery, headers: HeaderMap| async move {
                    record(&shared, query.clone(), &headers);
                    // Echo from-value back so callers can match responses
                    let echoed = query
                        .unwrap_or_default()
                        .split('&')
                        .find_map(|pair| pair.strip_prefix("from-value="))
                        .unwrap_or("")
                        .to_string();
                    format!(r#"{{"result": "{echoed}", "valid": true}}"#)
                },
            ),
        )
        .route(
            "/email-validate",
            get(|| async { "<html>upstream gateway error</html>" }),
        )
        .route(
            "/host-reputation",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                r#"{"host": "example.org", "is-listed": false}"#
            }),
        )
        .fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "Not Found") })
        .with_state(shared.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), shared)
}

fn registry(base_url: &str, api_key: Option<&str>) -> ToolRegistry {
    let mut config = Config::default().with_base_url(base_url);
    if let Some(key) = api_key {
        config = config.with_api_key(key);
    }
    ToolRegistry::new(&config).unwrap()
}

#[tokio::test]
async fn test_typed_response_decodes_pretty() {
    let (base_url, _) = start_stub_server().await;
    let registry = registry(&base_url, Some("test-key"));

    let out = registry
        .dispatch(
            "get_ip-info",
            &json!({"ip": "1.2.3.4"}),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert!(out.contains("\"city\": \"Berlin\""));
    assert!(out.contains("\"valid\": true"));
    // Pretty-printed, not the wire body
    assert!(out.contains('\n'));
}

#[tokio::test]
async fn test_undecodable_body_returns_raw_text_as_success() {
    let (base_url, _) = start_stub_server().await;
    let registry = registry(&base_url, Some("test-key"));

    let out = registry
        .dispatch(
            "get_email-validate",
            &json!({"email": "bob@example.org"}),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(out, "<html>upstream gateway error</html>");
}

#[tokio::test]
async fn test_http_error_status_is_remote_api_with_body() {
    let (base_url, _) = start_stub_server().await;
    let registry = registry(&base_url, Some("test-key"));

    // /ua-lookup is not routed by the stub; the fallback answers 404
    let err = registry
        .dispatch(
            "get_ua-lookup",
            &json!({"ua": "Mozilla/5.0"}),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    match err {
        Error::RemoteApi { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "Not Found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_query_order_and_user_id_header_on_wire() {
    let (base_url, shared) = start_stub_server().await;
    let registry = registry(&base_url, Some("test-key"));

    // Arguments given in reverse of declaration order
    registry
        .dispatch(
            "get_ip-info",
            &json!({"reverse-lookup": true, "ip": "1.2.3.4"}),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    let recorded = shared.lock().unwrap().clone();
    assert_eq!(recorded.query.as_deref(), Some("ip=1.2.3.4&reverse-lookup=true"));
    assert!(recorded
        .headers
        .iter()
        .any(|(name, value)| name == "user-id" && value == "test-key"));
    assert!(recorded.headers.iter().all(|(name, _)| name != "api-key"));
    assert!(recorded
        .headers
        .iter()
        .any(|(name, value)| name == "accept" && value == "application/json"));
}

#[tokio::test]
async fn test_api_key_header_on_wire() {
    let (base_url, shared) = start_stub_server().await;
    let registry = registry(&base_url, Some("test-key"));

    registry
        .dispatch(
            "get_convert",
            &json!({"from-value": "10.95", "from-type": "USD", "to-type": "EUR"}),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    let recorded = shared.lock().unwrap().clone();
    assert!(recorded
        .headers
        .iter()
        .any(|(name, value)| name == "api-key" && value == "test-key"));
    assert!(recorded.headers.iter().all(|(name, _)| name != "user-id"));
}

#[tokio::test]
async fn test_unauthenticated_dispatch_still_sent() {
    let (base_url, shared) = start_stub_server().await;
    let registry = registry(&base_url, None);

    let out = registry
        .dispatch(
            "get_ip-info",
            &json!({"ip": "1.2.3.4"}),
            &CancellationToken::new(),
        )
        .await
        .unwrap();
    assert!(out.contains("Berlin"));

    let recorded = shared.lock().unwrap().clone();
    assert!(recorded
        .headers
        .iter()
        .all(|(name, _)| name != "api-key" && name != "user-id"));
}

#[tokio::test]
async fn test_concurrent_dispatches_are_isolated() {
    let (base_url, _) = start_stub_server().await;
    let registry = Arc::new(registry(&base_url, Some("test-key")));

    let mut handles = Vec::new();
    for n in 0..50u32 {
        let registry = registry.clone();
        handles.push(tokio::spawn(async move {
            let token = format!("value-{n}");
            let out = registry
                .dispatch(
                    "get_convert",
                    &json!({"from-value": token, "from-type": "USD", "to-type": "EUR"}),
                    &CancellationToken::new(),
                )
                .await
                .unwrap();
            (token, out)
        }));
    }

    for handle in handles {
        let (token, out) = handle.await.unwrap();
        // Each caller gets exactly its own echoed value back
        assert!(out.contains(&format!("\"result\": \"{token}\"")), "{out}");
    }
}

#[tokio::test]
async fn test_cancellation_stops_one_call_not_others() {
    let (base_url, _) = start_stub_server().await;
    let registry = Arc::new(registry(&base_url, Some("test-key")));

    let cancel = CancellationToken::new();
    let slow = {
        let registry = registry.clone();
        let cancel = cancel.clone();
        tokio::spawn(async move {
            registry
                .dispatch("get_host-reputation", &json!({"host": "example.org"}), &cancel)
                .await
        })
    };

    tokio::time::sleep(Duration::from_millis(100)).await;
    cancel.cancel();

    let err = slow.await.unwrap().unwrap_err();
    assert!(err.is_cancelled(), "{err}");
    assert_eq!(err.kind(), ErrorKind::Transport);

    // A dispatch with its own token is unaffected
    let out = registry
        .dispatch(
            "get_ip-info",
            &json!({"ip": "1.2.3.4"}),
            &CancellationToken::new(),
        )
        .await
        .unwrap();
    assert!(out.contains("Berlin"));
}
