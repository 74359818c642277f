//! Error types for catalog edits and seat allocation.
//!
//! All errors are deterministic outcomes of the given inputs. None of them
//! are transient, so callers should report them immediately instead of
//! retrying.

use thiserror::Error;

use crate::models::RoomId;

/// Errors raised by the seating crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeatingError {
    // ===== Catalog boundary =====
    /// Malformed room parameters (empty name, bad dimensions).
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// An operation referenced an unknown room or student.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Two rooms in a seeded catalog share an id.
    #[error("duplicate room id: {0}")]
    DuplicateRoom(RoomId),

    /// Every `RoomId` value has been handed out.
    #[error("room id space exhausted")]
    RoomIdExhausted,

    // ===== Generation preconditions =====
    /// The roster is empty; nothing to allocate.
    #[error("no students to seat")]
    EmptyRoster,

    /// The room catalog is empty.
    #[error("no rooms configured")]
    NoCapacity,

    /// The roster contains the same student id twice.
    #[error("duplicate student id in roster: {0}")]
    DuplicateStudent(String),

    /// Aggregate capacity is below the roster size and the overflow
    /// policy forbids partial placement.
    #[error("insufficient capacity: {required} students, {available} seats")]
    InsufficientCapacity { required: usize, available: usize },

    // ===== Wire input =====
    /// A deserialized allocation result breaks a seating invariant.
    #[error("invalid allocation: {0}")]
    InvalidAllocation(String),

    // ===== Configuration =====
    /// Unreadable, malformed, or blank configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl SeatingError {
    pub(crate) fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub(crate) fn room_not_found(id: RoomId) -> Self {
        Self::NotFound {
            entity: "room".into(),
            id: id.to_string(),
        }
    }

    /// Whether this error is a precondition failure of `generate`
    /// (as opposed to a catalog or configuration problem).
    pub fn is_generation_precondition(&self) -> bool {
        matches!(
            self,
            Self::EmptyRoster
                | Self::NoCapacity
                | Self::DuplicateStudent(_)
                | Self::InsufficientCapacity { .. }
        )
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SeatingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = SeatingError::validation("rows", "must be at least 1");
        assert_eq!(e.to_string(), "invalid rows: must be at least 1");

        let e = SeatingError::room_not_found(RoomId(7));
        assert_eq!(e.to_string(), "room not found: 7");

        let e = SeatingError::InsufficientCapacity {
            required: 5,
            available: 4,
        };
        assert_eq!(e.to_string(), "insufficient capacity: 5 students, 4 seats");

        assert_eq!(SeatingError::RoomIdExhausted.to_string(), "room id space exhausted");
    }

    #[test]
    fn test_generation_precondition() {
        assert!(SeatingError::EmptyRoster.is_generation_precondition());
        assert!(SeatingError::NoCapacity.is_generation_precondition());
        assert!(!SeatingError::room_not_found(RoomId(1)).is_generation_precondition());
        assert!(!SeatingError::Config("x".into()).is_generation_precondition());
        assert!(!SeatingError::RoomIdExhausted.is_generation_precondition());
        assert!(!SeatingError::InvalidAllocation("x".into()).is_generation_precondition());
    }
}
