//! HAL trait definitions and implementations.
//!
//! `SystemHal` runs real processes; `FakeHal` records them for tests.

pub mod command;
pub mod fake_hal;
pub mod process_ops;
pub mod system_hal;
pub mod workspace;

pub use command::CommandSpec;
pub use fake_hal::{FakeFailure, FakeHal, Operation};
pub use process_ops::ProcessOps;
pub use system_hal::SystemHal;
pub use workspace::Workspace;
