//! `reqwest`-backed implementation of the `TelemetryOracle` port.

pub mod http;

pub use http::HttpTelemetryOracle;
