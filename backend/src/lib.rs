//! Authorization gateway: a typed REST facade over a remote document-style
//! authorization registry.
//!
//! The `domain` module owns the registry value objects, error taxonomy,
//! ports, and client; `inbound` and `outbound` adapt HTTP on either side of
//! it; `server` assembles the application.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
