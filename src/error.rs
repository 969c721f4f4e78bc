use thiserror::Error;

/// Main error type for kbdiag
///
/// Search outcomes are never errors: an unreachable goal is reported as
/// `found = false`. These variants only cover loading and configuration.
#[derive(Error, Debug)]
pub enum KbdiagError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Knowledge base parse errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenient Result type using KbdiagError
pub type Result<T> = std::result::Result<T, KbdiagError>;
