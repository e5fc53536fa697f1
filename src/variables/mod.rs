//! Variables module for REST Relay
//!
//! Provides `{{variable}}` substitution against the loaded environment.

pub mod substitution;

pub use substitution::{substitute, unresolved_tokens};
