// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

use crate::db::StoreError;
use crate::services::reconcile::ReconcileError;

/// Application error type returned by every tracker operation.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Corrupt workout record: {0}")]
    Reconcile(#[from] ReconcileError),

    #[error("Workout not found: {0}")]
    NotFound(String),

    #[error("Conflicting update: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Could not get your current location: {0}")]
    Location(String),
}

impl TrackerError {
    /// Message shown to the user when a form submission is rejected.
    pub const INVALID_INPUT_NOTICE: &'static str = "Inputs have to be positive numbers!";

    /// Whether the error came from user input rather than stored state.
    pub fn is_validation(&self) -> bool {
        matches!(self, TrackerError::Validation(_))
    }

    /// Short text suitable for an alert/notice in the UI layer.
    pub fn user_notice(&self) -> String {
        match self {
            TrackerError::Validation(_) => Self::INVALID_INPUT_NOTICE.to_string(),
            TrackerError::Location(_) => "Could not get your current location".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for TrackerError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut problems: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is out of range", field),
                })
            })
            .collect();
        problems.sort();
        TrackerError::Validation(problems.join("; "))
    }
}

impl From<StoreError> for TrackerError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "Storage error");
        TrackerError::Storage(err.to_string())
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;
