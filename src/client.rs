//! HTTP client for the message endpoint.
//!
//! One `POST {base}/api/messages` per submit attempt, JSON body `{name, phone, message}`.
//! The response body is parsed leniently on every status code: anything that is not
//! a JSON object becomes an empty `ResponseBody`.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

use crate::form::FormValues;

/// Path of the message endpoint relative to the API base URL
pub const MESSAGES_PATH: &str = "/api/messages";

/// User agent for API requests
const USER_AGENT: &str = concat!("Sendform/", env!("CARGO_PKG_VERSION"));

/// Failures that happen before a response is received
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Invalid API base URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request task failed: {0}")]
    Task(String),
}

/// Structured part of a response body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseBody {
    /// Field-level errors reported by the server, keyed by wire field name
    pub errors: Option<BTreeMap<String, String>>,
    /// Single error message
    pub error: Option<String>,
}

impl ResponseBody {
    /// Parse a response body, falling back to an empty body on malformed input
    pub fn parse(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => Self::from_value(&value),
            Err(_) => Self::default(),
        }
    }

    fn from_value(value: &Value) -> Self {
        let Value::Object(obj) = value else {
            return Self::default();
        };

        let errors = match obj.get("errors") {
            Some(Value::Object(map)) => Some(
                map.iter()
                    .map(|(k, v)| (k.clone(), value_text(v)))
                    .collect(),
            ),
            // Arrays carry no usable field names but still signal field errors
            Some(Value::Array(_)) => Some(BTreeMap::new()),
            _ => None,
        };

        let error = match obj.get("error") {
            None | Some(Value::Null) => None,
            Some(v) => Some(value_text(v)),
        };

        Self { errors, error }
    }
}

/// Render a JSON value as display text (strings without quotes)
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A response received from the endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl ServerResponse {
    /// Any 2xx status counts as success
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Client for the message endpoint
#[derive(Clone)]
pub struct SubmissionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SubmissionClient {
    /// Create a client posting to `{base_url}/api/messages`
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let base = base_url.trim().trim_end_matches('/');
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(TransportError::InvalidUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(TransportError::Client)?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base, MESSAGES_PATH),
        })
    }

    /// Full URL requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one submission. No retries, no timeout beyond the transport's own.
    pub async fn submit(&self, values: &FormValues) -> Result<ServerResponse, TransportError> {
        let start = std::time::Instant::now();

        let response = self
            .client
            .post(&self.endpoint)
            .json(values)
            .send()
            .await
            .map_err(|source| TransportError::Request {
                url: self.endpoint.clone(),
                source,
            })?;

        let status = response.status().as_u16();
        let body = match response.bytes().await {
            Ok(bytes) => ResponseBody::parse(&bytes),
            Err(e) => {
                tracing::debug!("Failed to read response body: {}", e);
                ResponseBody::default()
            }
        };

        tracing::info!(
            "POST {} -> {} in {:.2}s",
            self.endpoint,
            status,
            start.elapsed().as_secs_f32()
        );

        Ok(ServerResponse { status, body })
    }
}
