//! Managed search domain declaration.

use crate::config::{CapacityConfig, EbsOptions, EncryptionAtRestOptions, EngineVersion};
use crate::error::{OpenSearchError, Result};
use serde_json::{Map, Value, json};
use strata_core::{CfnValue, RemovalPolicy, ResourceRef, Stack};

/// CloudFormation resource type for a managed search domain.
const RESOURCE_TYPE: &str = "AWS::OpenSearchService::Domain";

/// Properties for a [`Domain`].
#[derive(Debug, Clone)]
pub struct DomainProps {
    /// Engine version.
    pub version: EngineVersion,
    /// Compute capacity.
    pub capacity: CapacityConfig,
    /// EBS storage.
    pub ebs: EbsOptions,
    /// Encrypt traffic between nodes.
    pub node_to_node_encryption: bool,
    /// Encrypt data at rest.
    pub encryption_at_rest: EncryptionAtRestOptions,
    /// Behavior on stack teardown; the provider default (retain) when absent.
    pub removal_policy: Option<RemovalPolicy>,
    /// Explicit domain name; provider-generated when absent.
    pub domain_name: Option<String>,
}

impl Default for DomainProps {
    fn default() -> Self {
        Self {
            version: EngineVersion::OpenSearch2_11,
            capacity: CapacityConfig::default(),
            ebs: EbsOptions::default(),
            node_to_node_encryption: false,
            encryption_at_rest: EncryptionAtRestOptions::default(),
            removal_policy: None,
            domain_name: None,
        }
    }
}

/// A declared managed search domain.
///
/// Declaring the domain registers one `AWS::OpenSearchService::Domain`
/// resource on the stack; the handle mints attribute tokens for values
/// the provider resolves after provisioning.
#[derive(Debug, Clone)]
pub struct Domain {
    resource: ResourceRef,
}

impl Domain {
    /// Declare a domain on `stack`.
    pub fn new(stack: &mut Stack, id: &str, props: DomainProps) -> Result<Domain> {
        validate(&props)?;

        let mut properties = Map::new();
        if let Some(name) = &props.domain_name {
            properties.insert("DomainName".to_string(), json!(name));
        }
        properties.insert("EngineVersion".to_string(), json!(props.version.as_str()));
        properties.insert("ClusterConfig".to_string(), props.capacity.to_json());
        properties.insert("EBSOptions".to_string(), props.ebs.to_json());
        properties.insert(
            "NodeToNodeEncryptionOptions".to_string(),
            json!({ "Enabled": props.node_to_node_encryption }),
        );
        properties.insert(
            "EncryptionAtRestOptions".to_string(),
            props.encryption_at_rest.to_json(),
        );

        let resource = stack.add_resource(
            id,
            RESOURCE_TYPE,
            Value::Object(properties),
            props.removal_policy,
        )?;

        Ok(Domain { resource })
    }

    /// Logical ID of the domain resource.
    pub fn logical_id(&self) -> &str {
        self.resource.logical_id()
    }

    /// Endpoint to connect to the domain, resolved after provisioning.
    pub fn domain_endpoint(&self) -> CfnValue {
        self.resource.get_att("DomainEndpoint")
    }

    /// ARN of the domain, resolved after provisioning.
    pub fn domain_arn(&self) -> CfnValue {
        self.resource.get_att("Arn")
    }
}

fn validate(props: &DomainProps) -> Result<()> {
    if let Some(instance_type) = &props.capacity.data_node_instance_type {
        if !instance_type.ends_with(".search") {
            return Err(OpenSearchError::Validation(format!(
                "data node instance type '{}' must end with '.search'",
                instance_type
            )));
        }
    }

    if props.capacity.data_nodes == Some(0) {
        return Err(OpenSearchError::Validation(
            "domain requires at least one data node".to_string(),
        ));
    }

    if let Some(masters) = props.capacity.master_nodes {
        if !(2..=5).contains(&masters) {
            return Err(OpenSearchError::Validation(format!(
                "dedicated master count must be between 2 and 5, got {}",
                masters
            )));
        }
    }

    match (props.ebs.enabled, props.ebs.volume_size) {
        (true, Some(size)) if !(10..=16384).contains(&size) => {
            Err(OpenSearchError::Validation(format!(
                "EBS volume size must be between 10 and 16384 GiB, got {}",
                size
            )))
        }
        (false, Some(_)) => Err(OpenSearchError::Validation(
            "EBS volume size given but EBS is disabled".to_string(),
        )),
        _ => Ok(()),
    }
}
