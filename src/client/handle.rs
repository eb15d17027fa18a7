//! Agent client handle: construction and the low-level probe.
//!
//! # Responsibilities
//! - Parse and hold the agent endpoint
//! - Build the HTTP transport once, with TLS for https endpoints
//! - Issue single GET probes and classify reachability

use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::client::types::{ClientError, ClientResult};
use crate::config::{validate, ClientConfig};
use crate::net::tls::{self, CaCertPool};

/// Per-request timeout applied when constructing via [`Client::new`].
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client bound to a single Nomad agent endpoint.
///
/// The transport is created once at construction and never changes. One
/// handle serves many independent probe calls for the process lifetime.
#[derive(Debug, Clone)]
pub struct Client {
    /// Request transport (connection pooling and timeout enforcement).
    http: reqwest::Client,
    /// Agent base URL.
    base_url: Url,
}

impl Client {
    /// Create a client for the agent at `endpoint`, with optional TLS
    /// configuration.
    ///
    /// TLS options are only consulted for `https` endpoints; plain-text
    /// endpoints use the default transport. No network I/O happens here, so
    /// construction fails only on local configuration problems, never on
    /// connectivity.
    pub fn new(
        endpoint: &str,
        ca_cert_path: Option<&Path>,
        skip_verify: bool,
    ) -> ClientResult<Self> {
        Self::with_timeout(endpoint, ca_cert_path, skip_verify, DEFAULT_TIMEOUT)
    }

    /// Create a client from connection settings, validating them first.
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        if let Err(errors) = validate(config) {
            let reasons = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ClientError::InvalidConfig { reasons });
        }

        Self::with_timeout(
            &config.endpoint,
            config.ca_cert_path.as_deref(),
            config.tls_skip_verify,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Create a client with an explicit per-request timeout.
    pub fn with_timeout(
        endpoint: &str,
        ca_cert_path: Option<&Path>,
        skip_verify: bool,
        timeout: Duration,
    ) -> ClientResult<Self> {
        let base_url = Url::parse(endpoint).map_err(|source| ClientError::InvalidEndpoint {
            url: endpoint.to_string(),
            source,
        })?;

        let mut builder = reqwest::Client::builder().timeout(timeout);

        if base_url.scheme() == "https" {
            let settings = tls::build_tls_settings(ca_cert_path, skip_verify, CaCertPool::shared())?;
            builder = settings.apply(builder);
        }

        let http = builder.build()?;

        Ok(Self { http, base_url })
    }

    /// The endpoint this client probes.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue a single GET to `path` under the agent base URL.
    ///
    /// Codes in [200, 399] and 429 count as reachable and are returned
    /// as-is. Any other code yields [`ClientError::UnexpectedResponse`]
    /// carrying the actual code for caller diagnostics. Transport failures
    /// surface verbatim. The request is bounded by the timeout chosen at
    /// construction; dropping the returned future aborts it promptly. This
    /// layer never retries.
    pub async fn get(&self, path: &str) -> ClientResult<u16> {
        let url = self
            .base_url
            .join(path)
            .map_err(|source| ClientError::InvalidEndpoint {
                url: format!("{}{}", self.base_url, path),
                source,
            })?;

        let response = self.http.get(url.clone()).send().await?;
        let code = response.status().as_u16();

        // Drain the body so the connection can be reused; a drain failure
        // does not affect the status already read.
        if let Err(err) = response.bytes().await {
            tracing::debug!(error = %err, path = url.path(), "failed to drain probe response body");
        }

        if (200..=399).contains(&code) || code == 429 {
            Ok(code)
        } else {
            Err(ClientError::UnexpectedResponse {
                expected: 200,
                actual: code,
                path: url.path().to_string(),
            })
        }
    }
}
