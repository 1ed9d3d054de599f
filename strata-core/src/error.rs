//! Error types for synthesis.

use thiserror::Error;

/// Result type alias for synthesis operations.
pub type Result<T> = std::result::Result<T, SynthError>;

/// Synthesis error type.
#[derive(Error, Debug)]
pub enum SynthError {
    /// Construct ID is empty or contains no usable characters.
    #[error("Invalid construct id: {0:?}")]
    InvalidId(String),

    /// Two constructs in the same stack share an ID.
    #[error("Duplicate construct id in stack '{stack}': {id}")]
    DuplicateId {
        /// Stack name.
        stack: String,
        /// Offending construct ID.
        id: String,
    },

    /// Two stacks in the same app share a name.
    #[error("Duplicate stack name: {0}")]
    DuplicateStack(String),

    /// A stack must declare at least one resource to synthesize.
    #[error("Stack '{0}' declares no resources")]
    EmptyStack(String),

    /// Declared configuration is out of range for the provider.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Assembly output could not be written.
    #[error("Assembly error: {0}")]
    Io(#[from] std::io::Error),

    /// Template rendering failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
