//! HTTP health-check client for a Nomad agent.

pub mod client;
pub mod config;
pub mod health;
pub mod net;

pub use client::{Client, ClientError, ClientResult};
pub use config::ClientConfig;
pub use health::{CheckState, Status, HEALTH_ENDPOINT, SERVICE_NAME};
