//! Error enum and result alias shared by every module.
use thiserror::Error;

/// Main error type for slidepress operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while staging parts or writing the package
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML serialization error
    #[error("XML error: {0}")]
    Xml(String),

    /// The presentation model violates an invariant (negative size, bad font size, ...)
    #[error("Invalid presentation model: {0}")]
    InvalidModel(String),

    /// A color is not a six-digit hex RGB value
    #[error("Invalid color '{0}': expected six hex digits such as 2B6CB0")]
    InvalidColor(String),

    /// The archiver failed or is unavailable
    #[error("Archive error: {0}")]
    Archive(String),

    /// Deck or writer options could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// A background task panicked or was cancelled
    #[error("Task error: {0}")]
    Task(String),
}

/// Result type for slidepress operations.
pub type Result<T> = std::result::Result<T, Error>;
