//! Domain error types.

use shared::password::PasswordError;
use thiserror::Error;

use crate::engine::EngineError;

/// Errors raised by the lifecycle services.
///
/// Only `NotFound` and `Validation` are user-caused; both carry the specific
/// human-readable reason. Validation stops at the first failing rule, so a
/// single reason is always sufficient.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("password hashing error: {0}")]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Flattens `validator` derive output into a single reason string.
pub fn validation_message(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::Validation(validation_message(&errors))
    }
}
