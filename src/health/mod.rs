//! Health checking subsystem.
//!
//! # Data Flow
//! ```text
//! Client::checker
//!     → GET /v1/agent/health?type=client
//!     → classify: 200 = Ok, anything else = Critical
//!     → CheckState.update(status, message, code)
//!
//! State object (state.rs):
//!     written by the checker
//!     read by the external health-check aggregator
//! ```
//!
//! # Design Decisions
//! - Reachable is not healthy: the probe layer accepts [200, 399] and 429,
//!   the checker accepts exactly 200
//! - Warning exists for the aggregator's benefit; this checker never
//!   produces it

pub mod checker;
pub mod state;

pub use checker::{HEALTH_ENDPOINT, SERVICE_NAME};
pub use state::{CheckState, Status};
