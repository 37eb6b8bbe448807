//! The decision core: readiness evaluation, sign-off verification, and
//! the v1/v2 planners that turn an SC inventory into an ordered dispatch
//! plan. Every function here is pure and synchronous except where it
//! must await an injected oracle; none of it touches the network itself.

pub mod cycle;
pub mod plan;
pub mod readiness;
pub mod signoff;
pub mod v1_planner;
pub mod v2_planner;

pub use cycle::CycleDriver;
pub use plan::EnactOp;
pub use readiness::is_ready;
pub use signoff::verify_signoffs;
