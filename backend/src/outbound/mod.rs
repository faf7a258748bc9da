//! Outbound adapters implementing domain ports against real infrastructure.

pub mod registry;
