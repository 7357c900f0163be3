use serde::{Serialize, Serializer};
use thiserror::Error;

/// Caller-correctable failure of an engine operation. Serializes as its wire code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("run not found: {0}")]
    RunNotFound(String),

    #[error("run has no events yet")]
    NoActiveEvent,

    #[error("event id mismatch: pending event is {expected}, got {got}")]
    EventIdMismatch { expected: String, got: String },

    #[error("event already resolved: {0}")]
    EventAlreadyResolved(String),

    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    #[error("run {0} has ended")]
    RunEnded(String),

    /// The tail event must be resolved before the next turn.
    #[error("event {0} is still pending")]
    EventPending(String),

    #[error("no pending event")]
    NoEvent,
}

impl EngineError {
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::RunNotFound(_) => "RUN_NOT_FOUND",
            EngineError::NoActiveEvent => "NO_ACTIVE_EVENT",
            EngineError::EventIdMismatch { .. } => "EVENT_ID_MISMATCH",
            EngineError::EventAlreadyResolved(_) => "EVENT_ALREADY_RESOLVED",
            EngineError::InvalidChoice(_) => "INVALID_CHOICE",
            EngineError::RunEnded(_) => "RUN_ENDED",
            EngineError::EventPending(_) => "EVENT_PENDING",
            EngineError::NoEvent => "NO_EVENT",
        }
    }
}

impl Serialize for EngineError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}
