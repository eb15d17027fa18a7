//! TLS decision logic and the CA certificate pool.
//!
//! # Responsibilities
//! - Decide how a secure endpoint's transport verifies the agent
//! - Load and cache PEM CA certificates shared by all client handles
//!
//! # Design Decisions
//! - Verification is only ever disabled on explicit opt-in
//! - A CA file path is read and parsed at most once per pool

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use reqwest::Certificate;

use crate::client::types::{ClientError, ClientResult};

static SHARED_POOL: OnceLock<CaCertPool> = OnceLock::new();

/// TLS behavior chosen for a secure endpoint.
///
/// Computed once per client construction, applied to the transport builder,
/// and never stored.
#[derive(Debug, Clone)]
pub enum TlsSettings {
    /// Server certificate verification is disabled entirely.
    ///
    /// DANGER: the transport accepts any certificate, self-signed or
    /// expired included. Only for agents that cannot present a verifiable
    /// certificate.
    InsecureSkipVerify,

    /// Verification against the system trust store plus these pinned CA
    /// certificates.
    PinnedCa(Vec<Certificate>),
}

impl TlsSettings {
    /// Apply this decision to a transport builder.
    ///
    /// Pinned certificates are added on top of the transport's built-in
    /// roots; when no system store is available the built-in set is empty
    /// and the pinned CA stands alone.
    pub fn apply(self, builder: reqwest::ClientBuilder) -> reqwest::ClientBuilder {
        match self {
            // no CA file => do not check certs
            TlsSettings::InsecureSkipVerify => builder.danger_accept_invalid_certs(true),
            TlsSettings::PinnedCa(certs) => certs
                .into_iter()
                .fold(builder, |b, cert| b.add_root_certificate(cert)),
        }
    }
}

/// Decide the TLS settings for a secure endpoint.
///
/// The empty combination (no CA certificate, verification not skipped) is
/// rejected outright rather than falling through to an undefined TLS state.
pub fn build_tls_settings(
    ca_cert_path: Option<&Path>,
    skip_verify: bool,
    pool: &CaCertPool,
) -> ClientResult<TlsSettings> {
    match ca_cert_path {
        None if skip_verify => Ok(TlsSettings::InsecureSkipVerify),
        None => Err(ClientError::InvalidTlsOptions),
        Some(path) => Ok(TlsSettings::PinnedCa(pool.load(path)?)),
    }
}

/// Cache of CA certificates parsed from PEM files, keyed by file path.
///
/// One process-wide instance backs every client handle (see
/// [`CaCertPool::shared`]); tests and embedding services can construct
/// private pools instead of going through the shared one.
#[derive(Debug, Default)]
pub struct CaCertPool {
    certs_by_path: Mutex<HashMap<PathBuf, Vec<Certificate>>>,
}

impl CaCertPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide pool, initialized on first use. Every later caller
    /// gets the same instance.
    pub fn shared() -> &'static CaCertPool {
        SHARED_POOL.get_or_init(CaCertPool::new)
    }

    /// Load the PEM bundle at `path`, reusing the cached parse if this pool
    /// has seen the path before.
    pub fn load(&self, path: &Path) -> ClientResult<Vec<Certificate>> {
        let mut cache = self
            .certs_by_path
            .lock()
            .expect("CA cert pool mutex poisoned");

        if let Some(certs) = cache.get(path) {
            return Ok(certs.clone());
        }

        let certs = parse_pem_bundle(path)?;
        cache.insert(path.to_path_buf(), certs.clone());
        Ok(certs)
    }
}

/// Read and parse a PEM bundle into root certificates.
fn parse_pem_bundle(path: &Path) -> ClientResult<Vec<Certificate>> {
    let pem = fs::read(path).map_err(|source| ClientError::CaCertRead {
        path: path.to_path_buf(),
        source,
    })?;

    let ders: Vec<_> = rustls_pemfile::certs(&mut pem.as_slice())
        .collect::<Result<_, _>>()
        .map_err(|_| ClientError::CaCertParse)?;

    if ders.is_empty() {
        return Err(ClientError::CaCertParse);
    }

    ders.iter()
        .map(|der| Certificate::from_der(der).map_err(|_| ClientError::CaCertParse))
        .collect()
}
