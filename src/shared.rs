use std::path::PathBuf;

use thiserror::Error;

use crate::game::GameError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid command parameters: {0}")]
    InvalidArguments(String),

    #[error("Data file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Game(#[from] GameError),
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}
