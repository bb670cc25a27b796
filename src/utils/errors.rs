//! Error types shared by the store and the conversation handlers.
//!
//! Input errors are always recovered locally with a retry prompt. Store
//! errors abort the current request but never the process.

use thiserror::Error;

/// Rejected user input. The conversation stays in the same state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid date '{0}', expected DD.MM.YYYY")]
    InvalidDateFormat(String),

    #[error("invalid time '{0}', expected HH:MM")]
    InvalidTimeFormat(String),

    #[error("event text '{0}' must be a time followed by a description")]
    MalformedEventText(String),
}

/// Failures reading or writing the schedule document
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("schedule document at {location} is corrupted: {source}")]
    Corruption {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize schedule document: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Errors surfaced by the planner while handling a message
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Dialogue storage error: {0}")]
    Dialogue(String),
}

impl PlannerError {
    pub(crate) fn dialogue(err: impl std::fmt::Display) -> Self {
        PlannerError::Dialogue(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_messages_carry_value() {
        let err = InputError::InvalidDateFormat("31.02.2025".to_string());
        assert!(err.to_string().contains("31.02.2025"));

        let err = InputError::InvalidTimeFormat("25:00".to_string());
        assert!(err.to_string().contains("HH:MM"));
    }

    #[test]
    fn test_store_error_converts_into_planner_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: PlannerError = StoreError::Io {
            location: "data.json".to_string(),
            source: io,
        }
        .into();

        assert!(matches!(err, PlannerError::Store(StoreError::Io { .. })));
        assert!(err.to_string().contains("data.json"));
    }
}
