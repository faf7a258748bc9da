//! Registry transport adapter speaking JSON over HTTP.

mod dto;
mod http_transport;

pub use http_transport::HttpRegistryTransport;
