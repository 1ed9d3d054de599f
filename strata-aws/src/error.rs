//! AWS error types.

use thiserror::Error;

/// Result type for AWS operations.
pub type Result<T> = std::result::Result<T, AwsError>;

/// AWS provisioning errors.
#[derive(Debug, Error)]
pub enum AwsError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// AWS region not specified and not discoverable.
    #[error("AWS region not specified")]
    RegionNotSpecified,

    /// Service error, as reported by the provider.
    #[error("AWS service error: {0}")]
    Service(String),

    /// The stack reached a failure status during an operation.
    #[error("Stack '{stack}' reached status {status}: {reason}")]
    StackFailed {
        /// Stack name.
        stack: String,
        /// Terminal stack status.
        status: String,
        /// Provider-reported reason.
        reason: String,
    },

    /// The stack does not exist.
    #[error("Stack '{0}' does not exist")]
    StackNotFound(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AwsError {
    /// Wrap a provider-reported error message.
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service(message.into())
    }
}
