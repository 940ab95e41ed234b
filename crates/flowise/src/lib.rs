//! Client library for the Flowise REST API.
//!
//! [`api`] builds request descriptors for each endpoint, [`FlowiseClient`]
//! dispatches them, and every call resolves to an [`Outcome`]: the decoded
//! JSON body or a uniform [`ErrorRecord`].

pub mod api;
pub mod client;
pub mod error;
pub mod outcome;
pub mod telemetry;

pub use api::{ApiRequest, Method};
pub use client::{DEFAULT_TIMEOUT, FlowiseClient};
pub use error::ClientError;
pub use outcome::{ErrorRecord, Outcome};
