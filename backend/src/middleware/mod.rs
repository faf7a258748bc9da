//! Actix middleware shared by every inbound route.

pub mod correlation;

pub use correlation::Correlate;
