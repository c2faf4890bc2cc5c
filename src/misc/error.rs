/// Convenience result type used across the evaluators.
pub type EvaluationResult<T> = Result<T, EvaluationError>;

/// Error taxonomy of the path evaluators.
#[derive(thiserror::Error, Debug)]
pub enum EvaluationError {
    /// A call-level argument is out of range or names an unsupported mode.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A single group could not be evaluated.
    /// Reported per group, never aborts a whole batch.
    #[error("malformed group {group}: {reason}")]
    MalformedGroup { group: String, reason: String },
}

impl EvaluationError {
    /// Build an [`EvaluationError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build an [`EvaluationError::MalformedGroup`] value from the group's debug form.
    pub fn malformed_group(group: &impl std::fmt::Debug, reason: impl std::fmt::Display) -> Self {
        Self::MalformedGroup {
            group: format!("{group:?}"),
            reason: reason.to_string(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
