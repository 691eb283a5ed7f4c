//! Client side of the registration exchange.
//!
//! One JSON document is written per connection and the response is read
//! until the server closes the socket or the timeout elapses.

mod client;
mod error;
mod transport;

pub use client::{RegistrationClient, DEFAULT_PROBE_TIMEOUT, DEFAULT_TIMEOUT};
pub use error::ClientError;
pub use transport::{LocalContract, RegistrationTransport};
