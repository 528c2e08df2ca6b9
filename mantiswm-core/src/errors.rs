use thiserror::Error;

pub type Result<T> = std::result::Result<T, MantisError>;

#[derive(Debug, Error)]
pub enum MantisError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Could not parse layout mode: {0}")]
    ParseMode(String),
    #[error("Empty command line")]
    EmptyCommandLine,
}
