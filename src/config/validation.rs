//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and the TLS option combination
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the config

use url::Url;

use crate::config::schema::ClientConfig;

/// A single semantic problem found in a [`ClientConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The endpoint is not an absolute http(s) URL.
    InvalidEndpoint(String),
    /// The per-request timeout is zero.
    ZeroTimeout,
    /// An https endpoint without a CA certificate or explicit skip-verify.
    IncompleteTlsOptions,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidEndpoint(endpoint) => {
                write!(f, "endpoint '{}' is not a valid http(s) URL", endpoint)
            }
            ValidationError::ZeroTimeout => write!(f, "timeout_secs must be nonzero"),
            ValidationError::IncompleteTlsOptions => {
                write!(f, "https endpoint needs ca_cert_path or tls_skip_verify")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a config for semantic problems, collecting every finding.
pub fn validate(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.endpoint) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
            if url.scheme() == "https"
                && config.ca_cert_path.is_none()
                && !config.tls_skip_verify
            {
                errors.push(ValidationError::IncompleteTlsOptions);
            }
        }
        _ => errors.push(ValidationError::InvalidEndpoint(config.endpoint.clone())),
    }

    if config.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
