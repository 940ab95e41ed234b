use std::fmt;

/// Failure classes for a single request/response cycle against the Flowise API.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The server answered with a non-2xx status.
    Status {
        status: u16,
        reason: String,
        body: String,
    },
    Timeout,
    /// DNS, connect or send failure before any response arrived.
    Transport {
        reason: String,
    },
    InvalidRequest {
        reason: String,
    },
    /// A 2xx response whose body is not JSON.
    MalformedResponse {
        reason: String,
    },
    Unexpected {
        reason: String,
    },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Status { status, reason, .. } => {
                write!(f, "Server returned {status} {reason}")
            }
            ClientError::Timeout => write!(f, "timed out"),
            ClientError::Transport { reason } => write!(f, "{reason}"),
            ClientError::InvalidRequest { reason } => write!(f, "{reason}"),
            ClientError::MalformedResponse { reason } => write!(f, "{reason}"),
            ClientError::Unexpected { reason } => write!(f, "{reason}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::Timeout | ClientError::Transport { .. }
        )
    }

    /// Classify a reqwest failure. Connection-level failures report the
    /// innermost cause, which is the part a user can act on.
    pub fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return ClientError::Timeout;
        }
        if e.is_builder() {
            return ClientError::InvalidRequest {
                reason: root_cause(&e),
            };
        }
        if e.is_connect() || e.is_request() {
            return ClientError::Transport {
                reason: root_cause(&e),
            };
        }
        if e.is_decode() {
            return ClientError::MalformedResponse {
                reason: e.to_string(),
            };
        }
        ClientError::Unexpected {
            reason: root_cause(&e),
        }
    }

    pub fn from_decode_error(e: serde_json::Error) -> Self {
        ClientError::MalformedResponse {
            reason: e.to_string(),
        }
    }
}

fn root_cause(e: &(dyn std::error::Error + 'static)) -> String {
    let mut current = e;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}
