//! Request dispatcher for the Flowise REST API.

use crate::api::{self, ApiRequest};
use crate::error::ClientError;
use crate::outcome::Outcome;
use hyper::ext::ReasonPhrase;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Budget for the whole request/response cycle.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Thin reqwest wrapper bound to one Flowise server.
#[derive(Debug, Clone)]
pub struct FlowiseClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl FlowiseClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::InvalidRequest {
                reason: e.to_string(),
            })?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send one request and decode the JSON response, whatever its shape.
    pub async fn try_send(&self, request: &ApiRequest) -> Result<Value, ClientError> {
        let url = self.endpoint(&request.path);
        debug!(method = request.method.as_str(), %url, "Dispatching request");

        let mut builder = self
            .http
            .request(request.method.into(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(ref api_key) = request.api_key {
            builder = builder.bearer_auth(api_key);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(ClientError::from_reqwest)?;
        let status = response.status();
        if !status.is_success() {
            let reason = reason_phrase(status, response.extensions().get::<ReasonPhrase>());
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), %url, "Server returned error status");
            return Err(ClientError::Status {
                status: status.as_u16(),
                reason,
                body,
            });
        }

        let bytes = response.bytes().await.map_err(ClientError::from_reqwest)?;
        serde_json::from_slice(&bytes).map_err(ClientError::from_decode_error)
    }

    /// Like [`try_send`](Self::try_send), folding any failure into an error record.
    pub async fn send(&self, request: &ApiRequest) -> Outcome {
        let result = self.try_send(request).await;
        if let Err(ref e) = result {
            debug!(error = %e, transport = e.is_transport(), "Request failed");
        }
        Outcome::from(result)
    }

    pub async fn predict(
        &self,
        flow_id: &str,
        question: &str,
        api_key: Option<&str>,
        session_id: Option<&str>,
        streaming: bool,
    ) -> Outcome {
        self.send(&api::predict(flow_id, question, api_key, session_id, streaming))
            .await
    }

    pub async fn list_flows(&self, api_key: Option<&str>) -> Outcome {
        self.send(&api::list_flows(api_key)).await
    }

    pub async fn get_flow(&self, flow_id: &str, api_key: Option<&str>) -> Outcome {
        self.send(&api::get_flow(flow_id, api_key)).await
    }

    pub async fn ping(&self) -> Outcome {
        self.send(&api::ping()).await
    }
}

/// The phrase the server sent, when hyper kept it because it differs from the
/// canonical one; otherwise the canonical phrase for the code.
fn reason_phrase(status: StatusCode, sent: Option<&ReasonPhrase>) -> String {
    match sent {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => status.canonical_reason().unwrap_or("Unknown").to_string(),
    }
}
