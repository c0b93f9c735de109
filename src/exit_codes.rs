//! Exit code constants for the gen-slaves CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: Template failure (unreadable, malformed, or fails a dry render)
//! - 3: Generation failure (open/render/close of an output file)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an invalid fleet config.
pub const USER_ERROR: i32 = 1;

/// Template failure: the template could not be read, parsed or checked.
pub const TEMPLATE_FAILURE: i32 = 2;

/// Generation failure: an output file could not be opened, rendered or closed.
pub const GENERATION_FAILURE: i32 = 3;
