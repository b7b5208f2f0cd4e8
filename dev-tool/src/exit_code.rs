//! The exit codes of the dev tool.

/// The command ran successfully.
pub const NO_ERROR: i32 = 0;

/// The command failed.
pub const FATAL_ERROR: i32 = 1;
