//! `/api` forwarding proxy.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this origin. Every request under `/api`
//! is replayed against the attendance backend with the `/api` prefix
//! stripped and the remainder appended to the configured upstream base.
//! Payload schemas belong to the backend; nothing here inspects bodies.

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::header::{CONNECTION, CONTENT_LENGTH, HOST};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

pub const API_PREFIX: &str = "/api";
pub const MAX_REQUEST_BODY_BYTES: usize = 10 * 1024 * 1024;

const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body unreadable or larger than {MAX_REQUEST_BODY_BYTES} bytes")]
    RequestBody,
    #[error("upstream timed out: {0}")]
    Timeout(reqwest::Error),
    #[error("upstream unavailable: {0}")]
    Upstream(reqwest::Error),
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout(err) } else { Self::Upstream(err) }
    }
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::RequestBody => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api proxy failed");
        (self.status(), Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Rewrite `/api<rest>` onto `upstream`.
///
/// `path_and_query` is the incoming request target; a target without the
/// prefix is appended unchanged.
pub fn upstream_url(upstream: &str, path_and_query: &str) -> String {
    let rest = path_and_query.strip_prefix(API_PREFIX).unwrap_or(path_and_query);
    format!("{upstream}{rest}")
}

/// Drop hop-by-hop headers plus `Host` and `Content-Length`; the HTTP client
/// recomputes the latter two for the upstream leg.
///
/// Headers listed in `Connection` are hop-by-hop for this message too.
pub fn strip_proxy_headers(headers: &mut HeaderMap) {
    let listed: Vec<HeaderName> = headers
        .get_all(CONNECTION)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .filter_map(|name| HeaderName::try_from(name.trim()).ok())
        .collect();
    for name in listed {
        headers.remove(name);
    }
    for name in HOP_BY_HOP {
        headers.remove(HeaderName::from_static(name));
    }
    headers.remove(HOST);
    headers.remove(CONTENT_LENGTH);
}

/// Forward one request to the backend and relay its response.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let target = parts
        .uri
        .path_and_query()
        .map_or_else(|| parts.uri.path(), |pq| pq.as_str());
    let url = upstream_url(&state.config.api_upstream, target);

    let body = to_bytes(body, MAX_REQUEST_BODY_BYTES)
        .await
        .map_err(|_| ProxyError::RequestBody)?;
    let mut headers = parts.headers;
    strip_proxy_headers(&mut headers);

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(headers)
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    tracing::debug!(method = %parts.method, %url, %status, "proxied api request");

    let mut response_headers = upstream.headers().clone();
    strip_proxy_headers(&mut response_headers);
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
