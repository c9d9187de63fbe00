use axum::Router;
use axum::http::{HeaderValue, Method, Uri};
use axum::routing::any;

use super::*;
use crate::config::Config;

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_strips_prefix_and_keeps_query() {
    assert_eq!(
        upstream_url("http://localhost:8000/api", "/api/students?section=b"),
        "http://localhost:8000/api/students?section=b"
    );
}

#[test]
fn upstream_url_onto_bare_origin() {
    assert_eq!(upstream_url("http://backend:9000", "/api/attendance/42"), "http://backend:9000/attendance/42");
}

#[test]
fn upstream_url_for_prefix_alone() {
    assert_eq!(upstream_url("http://backend:9000", "/api"), "http://backend:9000");
    assert_eq!(upstream_url("http://backend:9000", "/api?x=1"), "http://backend:9000?x=1");
}

#[test]
fn upstream_url_strips_only_the_leading_prefix() {
    assert_eq!(upstream_url("http://b", "/api/reports/api/export"), "http://b/reports/api/export");
}

// =============================================================================
// strip_proxy_headers
// =============================================================================

#[test]
fn strip_proxy_headers_removes_hop_by_hop_and_host() {
    let mut headers = HeaderMap::new();
    headers.insert("connection", HeaderValue::from_static("keep-alive"));
    headers.insert("transfer-encoding", HeaderValue::from_static("chunked"));
    headers.insert(HOST, HeaderValue::from_static("localhost:5173"));
    headers.insert(CONTENT_LENGTH, HeaderValue::from_static("12"));
    headers.insert("authorization", HeaderValue::from_static("Bearer t"));
    headers.insert("content-type", HeaderValue::from_static("application/json"));

    strip_proxy_headers(&mut headers);

    assert_eq!(headers.len(), 2);
    assert!(headers.contains_key("authorization"));
    assert!(headers.contains_key("content-type"));
}

#[test]
fn strip_proxy_headers_removes_headers_named_by_connection() {
    let mut headers = HeaderMap::new();
    headers.insert("connection", HeaderValue::from_static("close, X-Trace-Hop , x-session-hint"));
    headers.insert("x-trace-hop", HeaderValue::from_static("1"));
    headers.insert("x-session-hint", HeaderValue::from_static("abc"));
    headers.insert("x-request-id", HeaderValue::from_static("r-7"));

    strip_proxy_headers(&mut headers);

    assert!(!headers.contains_key("x-trace-hop"));
    assert!(!headers.contains_key("x-session-hint"));
    assert!(!headers.contains_key("connection"));
    assert!(headers.contains_key("x-request-id"));
}

// =============================================================================
// ProxyError
// =============================================================================

#[test]
fn request_body_error_maps_to_payload_too_large() {
    assert_eq!(ProxyError::RequestBody.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(ProxyError::RequestBody.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
}

// =============================================================================
// forward (live loopback round trip)
// =============================================================================

async fn echo(req: Request) -> Response {
    let method = req.method().to_string();
    let uri = req.uri().to_string();
    let auth = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let host = req
        .headers()
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    let body = to_bytes(req.into_body(), 1024).await.unwrap();
    let body = String::from_utf8(body.to_vec()).unwrap();

    let mut response = Json(serde_json::json!({
        "method": method,
        "uri": uri,
        "authorization": auth,
        "host": host,
        "body": body,
    }))
    .into_response();
    *response.status_mut() = StatusCode::CREATED;
    response.headers_mut().insert("x-upstream", HeaderValue::from_static("attendance"));
    response
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn proxy_state(upstream: &str) -> AppState {
    proxy_state_with_timeout(upstream, 5)
}

fn proxy_state_with_timeout(upstream: &str, timeout_secs: u64) -> AppState {
    let config = Config::from_lookup(|key| match key {
        "IDENTITY_PUBLISHABLE_KEY" => Some("pk_test_YS5kZXYk".to_owned()),
        "API_UPSTREAM" => Some(upstream.to_owned()),
        "API_PROXY_TIMEOUT_SECS" => Some(timeout_secs.to_string()),
        _ => None,
    })
    .unwrap();
    AppState::new(config).unwrap()
}

#[tokio::test]
async fn forward_relays_request_and_response() {
    let upstream = serve(Router::new().route("/api/{*rest}", any(echo))).await;
    let proxy = serve(crate::routes::api_routes(proxy_state(&format!("{upstream}/api")))).await;

    let resp = reqwest::Client::new()
        .post(format!("{proxy}/api/attendance/mark?date=2024-01-02"))
        .header("authorization", "Bearer abc")
        .body("present")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers().get("x-upstream").unwrap(), "attendance");
    let body: serde_json::Value = serde_json::from_slice(&resp.bytes().await.unwrap()).unwrap();
    assert_eq!(body["method"], "POST");
    assert_eq!(body["uri"], "/api/attendance/mark?date=2024-01-02");
    assert_eq!(body["authorization"], "Bearer abc");
    assert_eq!(body["body"], "present");
    // Host is rewritten to the upstream's, not the proxy's.
    assert_eq!(body["host"], upstream.trim_start_matches("http://"));
}

#[tokio::test]
async fn forward_strips_prefix_onto_bare_upstream() {
    let upstream = serve(Router::new().route("/{*rest}", any(echo))).await;
    let proxy = serve(crate::routes::api_routes(proxy_state(&upstream))).await;

    let resp = reqwest::get(format!("{proxy}/api/students")).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&resp.bytes().await.unwrap()).unwrap();
    assert_eq!(body["method"], "GET");
    assert_eq!(body["uri"], "/students");
}

#[tokio::test]
async fn forward_reports_bad_gateway_when_upstream_is_down() {
    // Bind then drop to get a port with nothing listening.
    let dead = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let state = proxy_state(&format!("http://{dead}/api"));

    let req = Request::builder()
        .method(Method::GET)
        .uri(Uri::from_static("/api/reports"))
        .body(Body::empty())
        .unwrap();
    let err = forward(State(state), req).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn forward_reports_gateway_timeout_for_slow_upstream() {
    let slow = Router::new().route(
        "/{*rest}",
        any(|| async {
            tokio::time::sleep(std::time::Duration::from_secs(3)).await;
            StatusCode::OK
        }),
    );
    let upstream = serve(slow).await;
    let proxy = serve(crate::routes::api_routes(proxy_state_with_timeout(&upstream, 1))).await;

    let resp = reqwest::get(format!("{proxy}/api/reports/slow")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn forward_rejects_oversized_body() {
    let upstream = serve(Router::new().route("/{*rest}", any(echo))).await;
    let state = proxy_state(&upstream);

    let req = Request::builder()
        .method(Method::POST)
        .uri(Uri::from_static("/api/students/import"))
        .body(Body::from(vec![b'x'; MAX_REQUEST_BODY_BYTES + 1]))
        .unwrap();
    let err = forward(State(state), req).await.unwrap_err();
    assert!(matches!(err, ProxyError::RequestBody));
    assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
}
