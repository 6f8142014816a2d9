//! Input size limits shared by the CLI and the MCP server.

use crate::error::{InputError, InputResult};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Reject inputs larger than `max_bytes`. `None` disables the check.
pub const fn validate_input_size(size: usize, max_bytes: Option<usize>) -> InputResult<()> {
    match max_bytes {
        Some(limit) if size > limit => Err(InputError::TooLarge { size, limit }),
        _ => Ok(()),
    }
}
