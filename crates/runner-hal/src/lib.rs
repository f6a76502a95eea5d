//! Hardware abstraction layer for teensy-runner.
//!
//! Everything that touches the host (spawning tools, creating temporary
//! directories) lives here behind small types the orchestrator can swap out.

pub mod error;
pub mod hal;

pub use error::{HalError, HalResult};
pub use hal::{
    CommandSpec, FakeFailure, FakeHal, Operation, ProcessOps, SystemHal, Workspace,
};
