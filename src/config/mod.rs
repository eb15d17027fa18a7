//! Configuration subsystem.
//!
//! # Design Decisions
//! - The crate defines the schema; the embedding service decides where the
//!   values come from (file, flags, environment)
//! - All fields have defaults so minimal configs work
//! - Validation separates syntactic (serde) from semantic checks

pub mod schema;
pub mod validation;

pub use schema::ClientConfig;
pub use validation::{validate, ValidationError};
