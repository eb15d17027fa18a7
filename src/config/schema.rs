//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Connection settings for the agent health client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Agent endpoint (e.g., "https://localhost:4646").
    pub endpoint: String,

    /// PEM bundle holding the CA that signed the agent's certificate.
    pub ca_cert_path: Option<PathBuf>,

    /// Disable server certificate verification for https endpoints.
    ///
    /// DANGER: only for agents that cannot present a verifiable
    /// certificate.
    pub tls_skip_verify: bool,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:4646".to_string(),
            ca_cert_path: None,
            tls_skip_verify: false,
            timeout_secs: 5,
        }
    }
}
