//! Data models for the relay's HTTP interface.
//!
//! Request and response bodies exchanged between the browser UI and the
//! server. Field names are camelCase on the wire.

pub mod request;
pub mod response;

pub use request::{CallApiRequest, SaveJsonRequest};
pub use response::{ErrorResponse, HealthResponse, SaveResponse};
