//! Flowise REST endpoints and the request descriptors built for them.

use serde_json::{Map, Value};

pub const API_PREFIX: &str = "/api/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// One call against the API, relative to the client's base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub api_key: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
            api_key: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
            api_key: None,
        }
    }

    /// Attach a bearer token. Blank keys are ignored.
    pub fn with_api_key(mut self, api_key: Option<&str>) -> Self {
        self.api_key = non_blank(api_key).map(str::to_string);
        self
    }
}

pub fn prediction_path(flow_id: &str) -> String {
    format!("{API_PREFIX}/prediction/{flow_id}")
}

pub fn chatflows_path() -> String {
    format!("{API_PREFIX}/chatflows")
}

pub fn chatflow_path(flow_id: &str) -> String {
    format!("{API_PREFIX}/chatflows/{flow_id}")
}

pub fn ping_path() -> String {
    format!("{API_PREFIX}/ping")
}

/// Ask a chatflow a question.
///
/// The payload always carries `question`; `sessionId` is added for a non-empty
/// session and `streaming: true` only when requested.
pub fn predict(
    flow_id: &str,
    question: &str,
    api_key: Option<&str>,
    session_id: Option<&str>,
    streaming: bool,
) -> ApiRequest {
    let mut payload = Map::new();
    payload.insert("question".to_string(), Value::from(question));
    if let Some(session_id) = non_blank(session_id) {
        payload.insert("sessionId".to_string(), Value::from(session_id));
    }
    if streaming {
        payload.insert("streaming".to_string(), Value::Bool(true));
    }
    ApiRequest::post(prediction_path(flow_id), Value::Object(payload)).with_api_key(api_key)
}

pub fn list_flows(api_key: Option<&str>) -> ApiRequest {
    ApiRequest::get(chatflows_path()).with_api_key(api_key)
}

pub fn get_flow(flow_id: &str, api_key: Option<&str>) -> ApiRequest {
    ApiRequest::get(chatflow_path(flow_id)).with_api_key(api_key)
}

/// Health probe; never authenticated.
pub fn ping() -> ApiRequest {
    ApiRequest::get(ping_path())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
