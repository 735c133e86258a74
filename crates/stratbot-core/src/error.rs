use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::http_client::HttpError;

/// One structural mismatch found while validating an upstream payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Location of the offending value, rooted at `$` (e.g. `$[1][0].id`).
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl Display for ValidationIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A response body that is not JSON or does not conform to its schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![ValidationIssue::new(path, message)])
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Paths of every failing value, in document order.
    pub fn paths(&self) -> Vec<&str> {
        self.issues.iter().map(|issue| issue.path.as_str()).collect()
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("failed to parse response")?;
        for (index, issue) in self.issues.iter().enumerate() {
            let sep = if index == 0 { ": " } else { "; " };
            write!(f, "{sep}{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Top-level error type for World Bank client operations.
#[derive(Debug, Error)]
pub enum WorldBankError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("topic with ID {topic_id} not found")]
    NotFound { topic_id: String },

    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl WorldBankError {
    pub fn not_found(topic_id: impl Into<String>) -> Self {
        Self::NotFound {
            topic_id: topic_id.into(),
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "worldbank.validation",
            Self::NotFound { .. } => "worldbank.not_found",
            Self::Transport(_) => "worldbank.transport",
            Self::InvalidParameter { .. } => "worldbank.invalid_parameter",
        }
    }
}
