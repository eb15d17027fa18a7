//! Health-check state shared with the external aggregator.

use std::time::SystemTime;

/// Tri-state health classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Service responds and reports itself healthy.
    Ok,
    /// Service is degraded but at least partially functioning.
    Warning,
    /// Service functionality is unavailable or non-functioning.
    Critical,
}

impl Status {
    /// Stable string form for logs and aggregator payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
        }
    }
}

/// Mutable health record for one service, owned by the aggregator and
/// written by that service's checker.
///
/// A status code of 0 means no probe has completed yet. Shared access
/// across tasks is the aggregator's concern; this type takes `&mut` and
/// carries no lock of its own.
#[derive(Debug, Clone)]
pub struct CheckState {
    name: String,
    status: Option<Status>,
    message: Option<String>,
    status_code: u16,
    last_checked: Option<SystemTime>,
    last_success: Option<SystemTime>,
    last_failure: Option<SystemTime>,
}

impl CheckState {
    /// Create an empty state keyed by service name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            status: None,
            message: None,
            status_code: 0,
            last_checked: None,
            last_success: None,
            last_failure: None,
        }
    }

    /// Record the outcome of one probe.
    pub fn update(&mut self, status: Status, message: String, status_code: u16) {
        let now = SystemTime::now();

        self.status = Some(status);
        self.message = Some(message);
        self.status_code = status_code;
        self.last_checked = Some(now);

        match status {
            Status::Ok => self.last_success = Some(now),
            Status::Critical => self.last_failure = Some(now),
            Status::Warning => {}
        }
    }

    /// Service name this state is keyed by.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last reported status, if any probe has run.
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    /// Last reported human-readable message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Last reported HTTP status code; 0 before the first completed probe.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// When the last probe finished.
    pub fn last_checked(&self) -> Option<SystemTime> {
        self.last_checked
    }

    /// When the last successful probe finished.
    pub fn last_success(&self) -> Option<SystemTime> {
        self.last_success
    }

    /// When the last failed probe finished.
    pub fn last_failure(&self) -> Option<SystemTime> {
        self.last_failure
    }
}
