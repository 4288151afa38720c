//! Exit status value type
//!
//! An exit status is the reporting label attached to a job or step execution: a
//! short symbolic code plus free text. Two statuses combine with [`ExitStatus::and`],
//! which keeps the more severe code and accumulates descriptions.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Reporting value describing the outcome of a job or step
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExitStatus {
    exit_code: Cow<'static, str>,
    #[serde(default)]
    exit_description: Cow<'static, str>,
}

impl ExitStatus {
    /// Processing still in progress. Lowest severity, so it is the identity of `and`.
    pub const EXECUTING: ExitStatus = ExitStatus::from_static("EXECUTING");
    /// Processing finished normally.
    pub const COMPLETED: ExitStatus = ExitStatus::from_static("COMPLETED");
    /// Finished without doing any work.
    pub const NOOP: ExitStatus = ExitStatus::from_static("NOOP");
    /// Interrupted on request.
    pub const STOPPED: ExitStatus = ExitStatus::from_static("STOPPED");
    /// Finished with an error.
    pub const FAILED: ExitStatus = ExitStatus::from_static("FAILED");
    /// Outcome could not be determined.
    pub const UNKNOWN: ExitStatus = ExitStatus::from_static("UNKNOWN");

    const fn from_static(code: &'static str) -> Self {
        Self {
            exit_code: Cow::Borrowed(code),
            exit_description: Cow::Borrowed(""),
        }
    }

    /// Create an exit status with an empty description
    pub fn new(exit_code: impl Into<String>) -> Self {
        Self {
            exit_code: Cow::Owned(exit_code.into()),
            exit_description: Cow::Borrowed(""),
        }
    }

    /// Create an exit status with a description
    pub fn with_description(exit_code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            exit_code: Cow::Owned(exit_code.into()),
            exit_description: Cow::Owned(description.into()),
        }
    }

    pub fn exit_code(&self) -> &str {
        &self.exit_code
    }

    pub fn exit_description(&self) -> &str {
        &self.exit_description
    }

    /// Combine two statuses.
    ///
    /// The description of `other` is appended (separated by `"; "`) when it has
    /// text and differs from ours. The code of `other` replaces ours only when
    /// `other` is more severe, or equally severe and lexically greater.
    pub fn and(&self, other: &ExitStatus) -> ExitStatus {
        let result = self.add_exit_description(other.exit_description());
        if self.severity_cmp(other) == Ordering::Less {
            result.replace_exit_code(other.exit_code().to_string())
        } else {
            result
        }
    }

    /// Return a copy with `description` appended to the current description
    pub fn add_exit_description(&self, description: &str) -> ExitStatus {
        let changed = has_text(description) && self.exit_description != description;
        let mut buffer = String::new();

        if has_text(&self.exit_description) {
            buffer.push_str(&self.exit_description);
            if changed {
                buffer.push_str("; ");
            }
        }
        if changed {
            buffer.push_str(description);
        }

        ExitStatus {
            exit_code: self.exit_code.clone(),
            exit_description: Cow::Owned(buffer),
        }
    }

    /// Return a copy carrying a different code and the same description
    pub fn replace_exit_code(&self, exit_code: impl Into<String>) -> ExitStatus {
        ExitStatus {
            exit_code: Cow::Owned(exit_code.into()),
            exit_description: self.exit_description.clone(),
        }
    }

    /// True while the outcome is still open (`EXECUTING` or `UNKNOWN`)
    pub fn is_running(&self) -> bool {
        self.exit_code.starts_with(Self::EXECUTING.exit_code())
            || self.exit_code.starts_with(Self::UNKNOWN.exit_code())
    }

    /// Severity rank of the code, by prefix. Custom codes rank above every
    /// well-known one.
    pub fn severity(&self) -> u8 {
        const RANKS: [(&str, u8); 6] = [
            ("EXECUTING", 1),
            ("COMPLETED", 2),
            ("NOOP", 3),
            ("STOPPED", 4),
            ("FAILED", 5),
            ("UNKNOWN", 6),
        ];

        RANKS
            .iter()
            .find(|(prefix, _)| self.exit_code.starts_with(prefix))
            .map(|(_, rank)| *rank)
            .unwrap_or(7)
    }

    /// Order by severity, then lexically by code. Descriptions are ignored.
    pub fn severity_cmp(&self, other: &ExitStatus) -> Ordering {
        self.severity()
            .cmp(&other.severity())
            .then_with(|| self.exit_code.cmp(&other.exit_code))
    }
}

impl Default for ExitStatus {
    fn default() -> Self {
        Self::EXECUTING
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "exitCode={};exitDescription={}",
            self.exit_code, self.exit_description
        )
    }
}

fn has_text(s: &str) -> bool {
    !s.trim().is_empty()
}
