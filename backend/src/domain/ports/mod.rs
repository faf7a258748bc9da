//! Domain ports for the hexagonal boundary.

mod transport;

#[cfg(test)]
pub use transport::MockAuthorizationTransport;
pub use transport::{AuthorizationTransport, FixtureAuthorizationTransport, InvokeError};
