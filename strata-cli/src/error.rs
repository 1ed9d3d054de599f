//! Error types for the Strata CLI.

use std::fmt;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug)]
pub enum CliError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error (strata.toml, flags)
    Config(String),

    /// Synthesis error
    Synth(strata_core::SynthError),

    /// Domain declaration error
    Domain(strata_opensearch::OpenSearchError),

    /// Provisioning error
    Aws(strata_aws::AwsError),

    /// Command execution error
    Command(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Synth(e) => write!(f, "Synthesis error: {}", e),
            CliError::Domain(e) => write!(f, "Domain error: {}", e),
            CliError::Aws(e) => write!(f, "Provisioning error: {}", e),
            CliError::Command(msg) => write!(f, "Command error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<strata_core::SynthError> for CliError {
    fn from(e: strata_core::SynthError) -> Self {
        CliError::Synth(e)
    }
}

impl From<strata_opensearch::OpenSearchError> for CliError {
    fn from(e: strata_opensearch::OpenSearchError) -> Self {
        CliError::Domain(e)
    }
}

impl From<strata_aws::AwsError> for CliError {
    fn from(e: strata_aws::AwsError) -> Self {
        CliError::Aws(e)
    }
}

impl From<toml::de::Error> for CliError {
    fn from(e: toml::de::Error) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Command(e.to_string())
    }
}
