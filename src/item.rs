//! Todo item entity.
//!
//! A `TodoItem` is a single task record: id, text, completion flag, and
//! creation timestamp. Items are created fresh or restored from JSON; the
//! only in-place mutation is toggling the completion flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Get current timestamp in milliseconds since Unix epoch
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// A single todo record.
///
/// All fields are required on the wire: a stored record missing any of them
/// fails deserialization instead of filling in a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Identifier, unique within a store by convention (not enforced)
    pub id: i64,

    /// Task description, accepted as given (may be empty)
    pub text: String,

    /// Completion flag, false at creation
    pub completed: bool,

    /// Creation time, set once and never modified (ISO-8601 on the wire)
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Create a new pending item with an id derived from the current time
    /// in milliseconds.
    ///
    /// Two items created within the same millisecond get the same id; the
    /// store trusts ids as-is and does not guard against this.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(text, now_ms())
    }

    /// Create a new pending item with a caller-supplied id.
    pub fn with_id(text: impl Into<String>, id: i64) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Flip the completion flag in place.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
