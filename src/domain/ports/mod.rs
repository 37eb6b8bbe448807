//! Ports the decision core depends on without knowing their concrete
//! implementation: wall-clock time, telemetry uptake, and the admin
//! service itself. Keeping these as trait objects is what lets the
//! planners and the readiness oracle stay pure, synchronous, and
//! trivially testable with fakes.

pub mod admin_client;
pub mod clock;
pub mod telemetry_oracle;

pub use admin_client::AdminClient;
pub use clock::Clock;
pub use telemetry_oracle::TelemetryOracle;
