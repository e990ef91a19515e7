use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] notedown_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Invalid note id: {0}")]
    InvalidNoteId(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
