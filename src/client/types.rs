//! Client types and error definitions.

use std::path::PathBuf;

use thiserror::Error;

// Re-export ClientConfig from the config module to avoid duplication
pub use crate::config::schema::ClientConfig;

/// Errors that can occur while constructing or probing the agent client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// An https endpoint was configured with neither a CA certificate nor
    /// an explicit opt-out of verification.
    #[error("invalid configuration with https but no CA cert or skip verification enabled")]
    InvalidTlsOptions,

    /// The endpoint (or probe path) could not be parsed as a URL.
    #[error("invalid endpoint URL '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        source: url::ParseError,
    },

    /// Connection settings failed semantic validation.
    #[error("invalid client configuration: {reasons}")]
    InvalidConfig { reasons: String },

    /// The CA certificate file could not be read.
    #[error("failed to read CA cert file '{}': {source}", path.display())]
    CaCertRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The CA certificate file held no usable PEM certificate.
    #[error("failed to append ca cert to pool")]
    CaCertParse,

    /// The request never completed (DNS, connect, TLS handshake, timeout).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The agent answered with a status code outside the reachable window.
    #[error("invalid response from downstream service - should be: {expected}, got: {actual}, path: {path}")]
    UnexpectedResponse {
        expected: u16,
        actual: u16,
        path: String,
    },

    /// The agent was reachable but did not report itself healthy.
    #[error("unexpected return code")]
    UnexpectedReturnCode,
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
