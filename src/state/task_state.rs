/// Task state definitions for tracking harvest progress
///
/// Every position in the URL list starts as `Pending`. A task either gets
/// skipped because its sequence identifier is already in the ledger, or moves
/// through `Fetching` to one of the terminal outcomes.
use std::fmt;

/// Represents the current state of a fetch task within a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskState {
    // ===== Active States =====
    /// Task has not been looked at yet
    Pending,

    /// Task is currently being fetched
    Fetching,

    // ===== Terminal States =====
    /// Sequence identifier was already in the ledger, nothing to do
    Skipped,

    /// Page was fetched, stored, and recorded in the ledger
    Succeeded,

    /// Fetch or storage failed; the task stays unrecorded for a later run
    Failed,
}

impl TaskState {
    /// Returns true if this is a terminal state (no further processing needed)
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending | Self::Fetching)
    }

    /// Returns true if this represents a successful completion
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Returns true if this represents a failure outcome
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// String form used in log output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fetching => "fetching",
            Self::Skipped => "skipped",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
