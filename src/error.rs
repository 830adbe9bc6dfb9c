use thiserror::Error;

/// Failures that stop the program before the frame loop starts.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("shader program failed to build: {0}")]
    Shader(String),
}

pub type Result<T> = std::result::Result<T, Error>;
