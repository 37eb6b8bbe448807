//! `reqwest`-backed implementation of the `AdminClient` port.

pub mod http;

pub use http::HttpAdminClient;
