//! Exit code constants for the taskrender CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid invocation)
//! - 2: Assembly failure (bad values source, malformed input)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid invocation.
pub const USER_ERROR: i32 = 1;

/// Assembly failure: a values source could not be read, decoded, or parsed.
pub const ASSEMBLY_FAILURE: i32 = 2;
