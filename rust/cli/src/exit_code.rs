//! Process exit codes.

pub const SUCCESS: i32 = 0;

/// Any command failure, including argument errors.
pub const ERROR: i32 = 2;

/// Input closed or interrupted before the command finished.
pub const INTERRUPTED: i32 = 130;
