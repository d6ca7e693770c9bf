//! HTTP Protocol.
mod method;
mod status;

pub use method::Method;
pub use status::{InvalidStatusCode, StatusCode};
