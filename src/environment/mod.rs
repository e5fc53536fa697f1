//! Environment management for REST Relay
//!
//! The environment is the flat set of enabled variables loaded once at
//! startup from a Postman environment export. It is immutable afterwards and
//! handed to the proxy explicitly, so tests can inject any mapping they like.

pub mod loader;
pub mod models;

pub use loader::{load_environment, load_environment_or_default, parse_environment, EnvError};
pub use models::{Environment, EnvironmentFile, EnvironmentRecord};
