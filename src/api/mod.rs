//! REST API Client
//!
//! HTTP plumbing shared by the per-resource wrapper modules: base URL
//! resolution, bearer token header, envelope unwrapping and the error
//! type. Wrappers return the envelope's `data` and nothing else; they do
//! not retry, cache or validate.

mod auth;
mod projects;
mod tasks;

pub use auth::*;
pub use projects::*;
pub use tasks::*;

use gloo_net::http::{Request, RequestBuilder, Response};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::ApiEnvelope;
use crate::storage;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },
    /// The response body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message written by the backend, when there is one worth showing
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

// Query-value escaping, matching what encodeURIComponent leaves alone
const QUERY_ENCODE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

pub(crate) fn encode_query(value: &str) -> String {
    utf8_percent_encode(value, QUERY_ENCODE).to_string()
}

/// Backend base URL: the page origin plus `/api`, unless overridden in
/// localStorage for split-origin development setups.
pub fn api_base() -> String {
    if let Some(base) = storage::get(storage::API_BASE_KEY) {
        return base.trim_end_matches('/').to_string();
    }
    let window = web_sys::window().expect("no window");
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location.host().unwrap_or_default();
    format!("{}//{}/api", protocol, host)
}

fn url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Attach the bearer token when a session is stored
fn with_auth(req: RequestBuilder) -> RequestBuilder {
    match storage::get(storage::TOKEN_KEY) {
        Some(token) => req.header("Authorization", &format!("Bearer {}", token)),
        None => req,
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

async fn read_envelope<T: DeserializeOwned>(resp: Response) -> Result<T> {
    if !resp.ok() {
        let status = resp.status();
        let message = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("request failed with status {}", status));
        return Err(ApiError::Api { status, message });
    }
    let envelope: ApiEnvelope<T> = resp
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(envelope.data)
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let resp = with_auth(Request::get(&url(path)))
        .send()
        .await
        .map_err(network)?;
    read_envelope(resp).await
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T> {
    let resp = with_auth(Request::post(&url(path)))
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    read_envelope(resp).await
}

pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T> {
    let resp = with_auth(Request::put(&url(path)))
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    read_envelope(resp).await
}

/// PATCH with an empty body, used by the task state transitions
pub(crate) async fn patch_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let resp = with_auth(Request::patch(&url(path)))
        .send()
        .await
        .map_err(network)?;
    read_envelope(resp).await
}

pub(crate) async fn delete_json(path: &str) -> Result<()> {
    let resp = with_auth(Request::delete(&url(path)))
        .send()
        .await
        .map_err(network)?;
    read_envelope::<serde_json::Value>(resp).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_query() {
        assert_eq!(encode_query("plain"), "plain");
        assert_eq!(encode_query("hello world"), "hello%20world");
        assert_eq!(encode_query("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_query("50%+done?"), "50%25%2Bdone%3F");
        assert_eq!(encode_query("naïve"), "na%C3%AFve");
    }

    #[test]
    fn test_error_body_decoding() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"success":false,"message":"Project not found with id: 99","data":null,"timestamp":"2026-08-02T09:00:01"}"#,
        )
        .unwrap();
        assert_eq!(body.message.as_deref(), Some("Project not found with id: 99"));

        // Bodies without a message field still decode, the caller falls back
        let body: ErrorBody = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(body.message, None);
    }

    #[test]
    fn test_api_error_display_uses_server_message() {
        let err = ApiError::Api {
            status: 401,
            message: "Invalid email or password".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid email or password");
        assert_eq!(err.server_message(), Some("Invalid email or password"));

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "network error: connection refused");
        assert_eq!(err.server_message(), None);
    }
}
