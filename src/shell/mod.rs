//! Subprocess execution and platform detection.

pub mod command;
pub mod platform;

pub use command::{run, run_check, ExecOptions, ExecResult};
pub use platform::{is_ci, stdin_is_tty};
