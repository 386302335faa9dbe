//! Error types for Knowbase.

/// Main error type for Knowbase operations.
#[derive(Debug, thiserror::Error)]
pub enum KnowbaseError {
    /// Configuration could not be read, parsed or written
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two topics share the same title
    #[error("Duplicate topic title: {0}")]
    DuplicateTopic(String),

    /// A topic record is unusable (empty title, empty keyword, ...)
    #[error("Invalid topic: {0}")]
    InvalidTopic(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using KnowbaseError.
pub type Result<T> = std::result::Result<T, KnowbaseError>;
