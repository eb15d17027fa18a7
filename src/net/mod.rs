//! Network layer subsystem.
//!
//! # Design Decisions
//! - TLS is decided once per client construction, and only for https
//!   endpoints
//! - CA certificates load through a shared pool so repeated constructions
//!   never re-read or re-parse the same file

pub mod tls;

pub use tls::{CaCertPool, TlsSettings};
