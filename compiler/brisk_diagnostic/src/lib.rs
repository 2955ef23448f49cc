//! Diagnostics shared by every Brisk compilation phase.
//!
//! A compile error renders in two formats: a one-line `default` form for
//! terminals and logs, and a `verbose` form with the error code, location and
//! a fix hint.

mod error_code;

pub use error_code::ErrorCode;

/// A general compilation error.
pub trait Diagnostic {
    /// Stable code identifying the error class.
    fn code(&self) -> ErrorCode;

    /// One-line rendering, e.g. `3:7: illegal character '#'`.
    fn default_format(&self) -> String;

    /// Multi-line rendering with code, location, message and hint.
    fn verbose_format(&self) -> String;
}
