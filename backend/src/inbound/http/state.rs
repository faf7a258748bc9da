//! Shared HTTP adapter state.
//!
//! Handlers receive the registry client via `actix_web::web::Data`, so they
//! depend only on the domain surface and stay testable without real I/O.

use crate::domain::AuthorizationClient;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Shared registry client.
    pub authorization: AuthorizationClient,
}

impl HttpState {
    /// Bundle the registry client for handler injection.
    pub fn new(authorization: AuthorizationClient) -> Self {
        Self { authorization }
    }
}
