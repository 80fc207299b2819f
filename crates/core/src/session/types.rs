//! Session-scoped history types.

use serde::Serialize;

/// One completed calculation, kept for display.
///
/// Entries are immutable once created, appended in insertion order, and never
/// removed within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// The birth date as displayed to the user.
    pub input: String,
    /// The rendered age string.
    pub age: String,
}
