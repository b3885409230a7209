//! Error types for the Carebot engine.

use thiserror::Error;

/// A shared error type for the Carebot core engine.
///
/// Nothing in the core engine is fatal: every well-formed input produces a
/// response, and the variants here cover the only caller-visible rejections.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CareError {
    /// The submitted user text was empty or whitespace-only.
    #[error("Empty input: user text must contain at least one non-whitespace character")]
    EmptyInput,

    /// A turn is already being processed for this session.
    ///
    /// Turns are serialized per session so that context features are computed
    /// from a stable history snapshot. Retry once the prior turn completes.
    #[error("Turn in progress for session '{session_id}'")]
    TurnInProgress { session_id: String },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
}

impl CareError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a TurnInProgress error
    pub fn turn_in_progress(session_id: impl Into<String>) -> Self {
        Self::TurnInProgress {
            session_id: session_id.into(),
        }
    }

    /// Check if this is a TurnInProgress error
    pub fn is_turn_in_progress(&self) -> bool {
        matches!(self, Self::TurnInProgress { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// A type alias for `Result<T, CareError>`.
pub type Result<T> = std::result::Result<T, CareError>;
