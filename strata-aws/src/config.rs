//! AWS configuration.

use serde::{Deserialize, Serialize};

/// Credentials source for AWS authentication.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CredentialsSource {
    /// Use AWS profile from ~/.aws/credentials.
    Profile(String),
    /// Use explicit credentials.
    Explicit {
        /// Access key ID.
        access_key_id: String,
        /// Secret access key.
        secret_access_key: String,
        /// Optional session token.
        session_token: Option<String>,
    },
    /// Auto-detect credentials (default AWS SDK behavior).
    #[default]
    Auto,
}

/// AWS client configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AwsConfig {
    /// AWS region.
    pub region: Option<String>,
    /// Credentials source.
    #[serde(default)]
    pub credentials: CredentialsSource,
    /// Custom endpoint URL (for LocalStack etc.).
    pub endpoint_url: Option<String>,
}

impl AwsConfig {
    /// Create a new configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder.
    pub fn builder() -> AwsConfigBuilder {
        AwsConfigBuilder::new()
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> AwsConfigBuilder {
        let mut builder = AwsConfigBuilder::new();

        if let Ok(region) = std::env::var("AWS_REGION") {
            builder = builder.region(region);
        } else if let Ok(region) = std::env::var("AWS_DEFAULT_REGION") {
            builder = builder.region(region);
        }

        if let Ok(profile) = std::env::var("AWS_PROFILE") {
            builder = builder.profile(profile);
        }

        if let Ok(endpoint) = std::env::var("AWS_ENDPOINT_URL") {
            builder = builder.endpoint_url(endpoint);
        }

        builder
    }
}

/// Builder for AWS configuration.
#[derive(Default)]
pub struct AwsConfigBuilder {
    config: AwsConfig,
}

impl AwsConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the AWS region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.config.region = Some(region.into());
        self
    }

    /// Set the credentials source.
    pub fn credentials(mut self, credentials: CredentialsSource) -> Self {
        self.config.credentials = credentials;
        self
    }

    /// Use explicit credentials.
    pub fn explicit_credentials(
        mut self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.config.credentials = CredentialsSource::Explicit {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        };
        self
    }

    /// Use a named profile.
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.config.credentials = CredentialsSource::Profile(profile.into());
        self
    }

    /// Set a custom endpoint URL (for LocalStack etc.).
    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint_url = Some(url.into());
        self
    }

    /// Configure for LocalStack.
    pub fn localstack(self) -> Self {
        self.endpoint_url("http://localhost:4566")
    }

    /// Build the configuration.
    pub fn build(self) -> AwsConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_region_and_endpoint() {
        let config = AwsConfig::builder()
            .region("eu-west-1")
            .localstack()
            .build();

        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
    }

    #[test]
    fn profile_replaces_credentials_source() {
        let config = AwsConfig::builder().profile("staging").build();
        assert!(matches!(config.credentials, CredentialsSource::Profile(p) if p == "staging"));
    }

    #[test]
    fn default_credentials_are_auto() {
        assert!(matches!(AwsConfig::new().credentials, CredentialsSource::Auto));
    }
}
