//! CloudFormation provisioning client for Strata stacks.
//!
//! Drives the provider's stack lifecycle API: create-or-update a stack
//! from a synthesized template, delete it, and read back its outputs.
//! All real provisioning work, ordering, and failure classification is
//! the provider's; this crate only submits templates and reports the
//! terminal status.
//!
//! # Example
//!
//! ```rust,ignore
//! use strata_aws::{AwsConfig, CloudFormationClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AwsConfig::builder().region("eu-west-1").build();
//!     let client = CloudFormationClient::new(config).await?;
//!
//!     let outcome = client.deploy("opensearch-cluster", template_body).await?;
//!     for output in outcome.outputs {
//!         println!("{} = {}", output.key, output.value);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod cloudformation;
mod config;
mod error;

pub use cloudformation::{CloudFormationClient, DeployOutcome, StackOutput};
pub use config::{AwsConfig, AwsConfigBuilder, CredentialsSource};
pub use error::{AwsError, Result};

// Re-export AWS types for convenience
pub use aws_config;
pub use aws_credential_types;
pub use aws_types;
