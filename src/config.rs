//! Allocator configuration.
//!
//! Loaded from JSON with every field optional:
//!
//! ```json
//! { "overflow_policy": "reject", "default_exam_subject": "Physics", "session": "midterm" }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SeatingError};

/// What to do when the roster exceeds the aggregate room capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Seat as many students as fit and return a partial result.
    #[default]
    Partial,
    /// Fail with `InsufficientCapacity` before placing anyone.
    Reject,
}

/// Settings for `SequentialAllocator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatingConfig {
    /// Overflow handling.
    pub overflow_policy: OverflowPolicy,
    /// Subject recorded for students without one.
    pub default_exam_subject: String,
    /// Prefix for generated exam ids (`"{session}-{room_index}"`).
    pub session: String,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            overflow_policy: OverflowPolicy::Partial,
            default_exam_subject: "General".to_string(),
            session: "exam".to_string(),
        }
    }
}

impl SeatingConfig {
    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SeatingError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SeatingError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&raw)
    }

    /// Sets the overflow policy.
    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Sets the default exam subject.
    pub fn with_default_subject(mut self, subject: impl Into<String>) -> Self {
        self.default_exam_subject = subject.into();
        self
    }

    /// Sets the exam-id prefix.
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.session = session.into();
        self
    }

    /// Rejects blank subject or session strings.
    pub fn validate(&self) -> Result<()> {
        if self.default_exam_subject.trim().is_empty() {
            return Err(SeatingError::Config(
                "default_exam_subject must not be empty".into(),
            ));
        }
        if self.session.trim().is_empty() {
            return Err(SeatingError::Config("session must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SeatingConfig::default();
        assert_eq!(c.overflow_policy, OverflowPolicy::Partial);
        assert_eq!(c.default_exam_subject, "General");
        assert_eq!(c.session, "exam");
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_fields() {
        let c = SeatingConfig::from_json_str(r#"{"overflow_policy": "reject"}"#).unwrap();
        assert_eq!(c.overflow_policy, OverflowPolicy::Reject);
        assert_eq!(c.default_exam_subject, "General");

        let c = SeatingConfig::from_json_str("{}").unwrap();
        assert_eq!(c, SeatingConfig::default());
    }

    #[test]
    fn test_from_json_rejects_blank_session() {
        let err = SeatingConfig::from_json_str(r#"{"session": "  "}"#).unwrap_err();
        assert!(matches!(err, SeatingError::Config(_)));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = SeatingConfig::from_json_str(r#"{"overflow_policy": "spill"}"#).unwrap_err();
        assert!(matches!(err, SeatingError::Config(_)));
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = SeatingConfig::from_json_file("/nonexistent/seating.json").unwrap_err();
        assert!(matches!(err, SeatingError::Config(msg) if msg.contains("seating.json")));
    }

    #[test]
    fn test_builder() {
        let c = SeatingConfig::default()
            .with_overflow_policy(OverflowPolicy::Reject)
            .with_default_subject("Chemistry")
            .with_session("final");
        assert_eq!(c.overflow_policy, OverflowPolicy::Reject);
        assert_eq!(c.default_exam_subject, "Chemistry");
        assert_eq!(c.session, "final");
    }
}
