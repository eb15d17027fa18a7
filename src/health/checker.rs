//! Agent health checker.
//!
//! # Responsibilities
//! - Probe the fixed agent health endpoint
//! - Map the probe outcome onto the shared check state
//! - Log failures with structured fields

use crate::client::handle::Client;
use crate::client::types::{ClientError, ClientResult};
use crate::health::state::{CheckState, Status};

/// Service name reported to the health aggregator.
pub const SERVICE_NAME: &str = "Nomad";

/// Agent health endpoint, scoped to client-mode agents.
pub const HEALTH_ENDPOINT: &str = "/v1/agent/health?type=client";

impl Client {
    /// Probe the agent once and record the outcome in `state`.
    ///
    /// Exactly 200 counts as healthy. A reachable agent answering anything
    /// else is reported Critical with the reported code and a sentinel
    /// error; a request that never completes is reported Critical with
    /// code 0 and the transport error.
    pub async fn checker(&self, state: &mut CheckState) -> ClientResult<()> {
        match self.get(HEALTH_ENDPOINT).await {
            Ok(200) => {
                state.update(Status::Ok, status_message(SERVICE_NAME, Status::Ok), 200);
                Ok(())
            }
            Ok(code) => {
                tracing::warn!(service = SERVICE_NAME, code, "agent reachable but not healthy");
                state.update(
                    Status::Critical,
                    status_message(SERVICE_NAME, Status::Critical),
                    code,
                );
                Err(ClientError::UnexpectedReturnCode)
            }
            Err(err) => {
                let code = match &err {
                    ClientError::UnexpectedResponse { actual, .. } => *actual,
                    _ => 0,
                };
                tracing::error!(service = SERVICE_NAME, error = %err, "failed to request agent health");
                state.update(
                    Status::Critical,
                    status_message(SERVICE_NAME, Status::Critical),
                    code,
                );
                Err(err)
            }
        }
    }
}

/// Build the human-readable status message for a service.
fn status_message(service: &str, status: Status) -> String {
    let suffix = match status {
        Status::Ok => " is ok",
        Status::Warning => " is degraded, but at least partially functioning",
        Status::Critical => " functionality is unavailable or non-functioning",
    };
    format!("{}{}", service, suffix)
}
