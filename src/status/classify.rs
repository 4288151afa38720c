//! Default versus custom exit code classification
//!
//! Default codes are the six the framework itself assigns. Everything else is
//! custom, and so is the absence of a code: an execution with no code yet is
//! treated as if a custom status had already been claimed.

/// Exit codes assigned by the framework itself
pub const DEFAULT_EXIT_CODES: [&str; 6] = [
    "COMPLETED",
    "EXECUTING",
    "FAILED",
    "NOOP",
    "STOPPED",
    "UNKNOWN",
];

/// Classification of an exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeClass {
    /// One of [`DEFAULT_EXIT_CODES`]
    Default,
    /// A user-defined code, or no code at all
    NonDefault,
}

/// Classify an exit code. Matching is exact: `"COMPLETED WITH SKIPS"` is custom.
pub fn classify(code: Option<&str>) -> CodeClass {
    match code {
        Some(code) if DEFAULT_EXIT_CODES.contains(&code) => CodeClass::Default,
        _ => CodeClass::NonDefault,
    }
}

/// Shorthand for `classify(code) == CodeClass::NonDefault`
pub fn is_non_default(code: Option<&str>) -> bool {
    classify(code) == CodeClass::NonDefault
}
