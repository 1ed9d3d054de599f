//! Error types for domain declarations.

use thiserror::Error;

/// Result type alias for domain declarations.
pub type Result<T> = std::result::Result<T, OpenSearchError>;

/// OpenSearch domain declaration error.
#[derive(Error, Debug)]
pub enum OpenSearchError {
    /// Declared configuration the provider would reject.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error from the synthesis core.
    #[error(transparent)]
    Synth(#[from] strata_core::SynthError),
}
