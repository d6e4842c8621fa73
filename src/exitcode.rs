//! Process exit codes
//!
//! `FAILURE` is kept for the missing-key case; the rest follow BSD sysexits.h.
//! A failed remote command exits with the ssh client's own code instead.

/// Successful termination
pub const OK: i32 = 0;

/// Public key file missing
pub const FAILURE: i32 = 1;

/// Command line usage error (e.g. blank username or host)
pub const USAGE: i32 = 64;

/// Service unavailable (ssh client could not be started)
pub const UNAVAILABLE: i32 = 69;

/// Internal software error (e.g. ssh client killed by a signal)
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
