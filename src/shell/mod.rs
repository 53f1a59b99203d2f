//! External process execution and host platform conventions.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{Invocation, ProcessOutput, ProcessRunner, SystemRunner};
pub use mock::MockRunner;
pub use platform::{is_ci, Platform};
