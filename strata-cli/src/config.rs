//! CLI configuration: optional `strata.toml` merged with flags.

use crate::error::CliResult;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use strata_aws::AwsConfig;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "strata.toml";

/// Configuration loaded from `strata.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// `[app]` section.
    #[serde(default)]
    pub app: AppSection,
    /// `[aws]` section.
    #[serde(default)]
    pub aws: AwsSection,
}

/// Application settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppSection {
    /// Cloud assembly output directory.
    pub output_dir: Option<PathBuf>,
}

/// AWS settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AwsSection {
    /// AWS region.
    pub region: Option<String>,
    /// Named credentials profile.
    pub profile: Option<String>,
    /// Custom endpoint URL (for LocalStack etc.).
    pub endpoint_url: Option<String>,
}

impl CliConfig {
    /// Load `strata.toml` from the working directory, or defaults.
    pub fn load() -> CliResult<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from an explicit path, or defaults if absent.
    pub fn load_from(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Resolve the assembly output directory; the flag wins.
    pub fn output_dir(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| self.app.output_dir.clone())
    }

    /// Build the AWS client configuration; flags win over file values,
    /// which win over the environment.
    pub fn aws_config(
        &self,
        region: Option<String>,
        profile: Option<String>,
        endpoint_url: Option<String>,
    ) -> AwsConfig {
        let mut builder = AwsConfig::from_env();

        if let Some(region) = region.or_else(|| self.aws.region.clone()) {
            builder = builder.region(region);
        }
        if let Some(profile) = profile.or_else(|| self.aws.profile.clone()) {
            builder = builder.profile(profile);
        }
        if let Some(endpoint) = endpoint_url.or_else(|| self.aws.endpoint_url.clone()) {
            builder = builder.endpoint_url(endpoint);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: CliConfig = toml::from_str(
            r#"
            [app]
            output_dir = "build/assembly"

            [aws]
            region = "eu-west-1"
            profile = "staging"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.app.output_dir.as_deref(),
            Some(Path::new("build/assembly"))
        );
        assert_eq!(config.aws.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<CliConfig, _> = toml::from_str("[app]\nout = \"x\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn flags_win_over_file_values() {
        let config: CliConfig = toml::from_str("[aws]\nregion = \"eu-west-1\"\n").unwrap();
        let aws = config.aws_config(Some("us-east-2".to_string()), None, None);
        assert_eq!(aws.region.as_deref(), Some("us-east-2"));
    }

    #[test]
    fn file_values_fill_missing_flags() {
        let config: CliConfig = toml::from_str("[aws]\nregion = \"eu-west-1\"\n").unwrap();
        let aws = config.aws_config(None, None, None);
        assert_eq!(aws.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let config = CliConfig::load_from(Path::new("does-not-exist.toml")).unwrap();
        assert!(config.app.output_dir.is_none());
    }
}
