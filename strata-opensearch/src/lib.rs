//! Managed OpenSearch Service domain resource for Strata stacks.
//!
//! Declares an `AWS::OpenSearchService::Domain` with typed configuration:
//! engine version, data node capacity, EBS storage, and transport/at-rest
//! encryption. The domain's endpoint and ARN are exposed as attribute
//! tokens the provider resolves after provisioning.
//!
//! # Example
//!
//! ```rust
//! use strata_core::{RemovalPolicy, Stack};
//! use strata_opensearch::{
//!     CapacityConfig, Domain, DomainProps, EbsOptions, EncryptionAtRestOptions, EngineVersion,
//! };
//!
//! # fn main() -> Result<(), strata_opensearch::OpenSearchError> {
//! let mut stack = Stack::new("search")?;
//! let domain = Domain::new(&mut stack, "Cluster", DomainProps {
//!     version: EngineVersion::OpenSearch1_2,
//!     capacity: CapacityConfig::data_nodes("t3.small.search"),
//!     ebs: EbsOptions::with_volume_size(10),
//!     node_to_node_encryption: true,
//!     encryption_at_rest: EncryptionAtRestOptions::enabled(),
//!     removal_policy: Some(RemovalPolicy::Destroy),
//!     ..DomainProps::default()
//! })?;
//! let endpoint = domain.domain_endpoint();
//! # let _ = endpoint;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod domain;
mod error;

pub use config::{CapacityConfig, EbsOptions, EncryptionAtRestOptions, EngineVersion, VolumeType};
pub use domain::{Domain, DomainProps};
pub use error::{OpenSearchError, Result};

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        CapacityConfig, Domain, DomainProps, EbsOptions, EncryptionAtRestOptions, EngineVersion,
        OpenSearchError, Result,
    };
}
