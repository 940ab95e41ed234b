//! Uniform result of one API call: the decoded JSON or an error record.

use crate::error::ClientError;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;

/// `{"error": true, "status"?, "message", "detail"?}` as printed for any failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    pub status: Option<u16>,
    pub message: String,
    pub detail: Option<String>,
}

impl ErrorRecord {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_status(status: u16, message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
            detail: Some(detail.into()),
        }
    }
}

impl Serialize for ErrorRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 2 + usize::from(self.status.is_some()) + usize::from(self.detail.is_some());
        let mut record = serializer.serialize_struct("ErrorRecord", len)?;
        record.serialize_field("error", &true)?;
        if let Some(status) = self.status {
            record.serialize_field("status", &status)?;
        } else {
            record.skip_field("status")?;
        }
        record.serialize_field("message", &self.message)?;
        if let Some(ref detail) = self.detail {
            record.serialize_field("detail", detail)?;
        } else {
            record.skip_field("detail")?;
        }
        record.end()
    }
}

impl From<ClientError> for ErrorRecord {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Status {
                status,
                reason,
                body,
            } => ErrorRecord::with_status(status, reason, body),
            other => ErrorRecord::new(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Value),
    Failure(ErrorRecord),
}

impl Outcome {
    /// True for error records, and for server payloads that carry a truthy
    /// top-level `error` key, since both print the same shape.
    pub fn is_error(&self) -> bool {
        match self {
            Outcome::Failure(_) => true,
            Outcome::Success(Value::Object(map)) => map.get("error").is_some_and(is_truthy),
            Outcome::Success(_) => false,
        }
    }

    /// Pretty JSON with two-space indentation; non-ASCII is written as-is.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outcome::Success(value) => value.serialize(serializer),
            Outcome::Failure(record) => record.serialize(serializer),
        }
    }
}

impl From<Result<Value, ClientError>> for Outcome {
    fn from(result: Result<Value, ClientError>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::Failure(err.into()),
        }
    }
}

impl From<ClientError> for Outcome {
    fn from(err: ClientError) -> Self {
        Outcome::Failure(err.into())
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
