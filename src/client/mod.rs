//! Agent client subsystem.
//!
//! # Data Flow
//! ```text
//! Client::new(endpoint, CA cert path, skip-verify)
//!     → endpoint parsed, scheme inspected
//!     → https: net/tls.rs decides the TLS settings
//!     → transport built once, immutable afterwards
//!
//! Client::get(path)
//!     → single GET through the transport
//!     → [200, 399] or 429: reachable, code returned
//!     → anything else: UnexpectedResponse with the actual code
//! ```
//!
//! # Design Decisions
//! - Construction performs no network I/O; it fails only on local
//!   configuration problems
//! - Transport-level failures surface verbatim
//! - Retry policy belongs to the embedding service, not this crate

pub mod handle;
pub mod types;

pub use handle::Client;
pub use types::{ClientError, ClientResult};
