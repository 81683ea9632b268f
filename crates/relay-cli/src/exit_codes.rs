//! Unified exit codes for the relay CLI.
//! These codes are part of the public contract so CI jobs can branch on them.

pub const SUCCESS: i32 = 0;
pub const TESTS_FAILED: i32 = 1; // Parsed log contains at least one failing test
pub const CONFIG_ERROR: i32 = 2; // Bad arguments, unreadable input, or missing context
pub const SUBMIT_FAILED: i32 = 3; // Submission rejected or endpoint unreachable
