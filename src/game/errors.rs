use thiserror::Error;

use crate::cards::CardError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("No players found in input.")]
    EmptyInput,

    #[error(transparent)]
    Card(#[from] CardError),
}

impl GameError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        GameError::MalformedLine {
            line,
            reason: reason.into(),
        }
    }
}
