//! Error codes shared by every error type in the crate.
//!
//! Each module owns its own `thiserror` enum; this trait gives them a common
//! grepable code and a retryable flag so callers (and the CLI) can report
//! failures uniformly without matching on every variant.

/// Grepable error code and retryable flag for structured error reporting.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}
