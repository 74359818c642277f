//! Roster entry model.

use serde::{Deserialize, Serialize};

/// An approved student eligible for seating.
///
/// The roster is owned externally; the allocator only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: String,
    /// Name rendered on the seat grid.
    pub display_name: String,
    /// Exam subject. `None` falls back to the configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_subject: Option<String>,
}

impl Student {
    /// Creates a student with no explicit subject.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            exam_subject: None,
        }
    }

    /// Sets the exam subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.exam_subject = Some(subject.into());
        self
    }
}
