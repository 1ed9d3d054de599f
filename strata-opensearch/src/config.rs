//! Domain configuration.

use serde_json::{Map, Value, json};

/// Search engine version for a managed domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum EngineVersion {
    /// OpenSearch 1.0
    OpenSearch1_0,
    /// OpenSearch 1.1
    OpenSearch1_1,
    /// OpenSearch 1.2
    OpenSearch1_2,
    /// OpenSearch 1.3
    OpenSearch1_3,
    /// OpenSearch 2.3
    OpenSearch2_3,
    /// OpenSearch 2.5
    OpenSearch2_5,
    /// OpenSearch 2.7
    OpenSearch2_7,
    /// OpenSearch 2.9
    OpenSearch2_9,
    /// OpenSearch 2.11
    OpenSearch2_11,
    /// Legacy Elasticsearch 7.10
    Elasticsearch7_10,
}

impl EngineVersion {
    /// The provider's version string.
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineVersion::OpenSearch1_0 => "OpenSearch_1.0",
            EngineVersion::OpenSearch1_1 => "OpenSearch_1.1",
            EngineVersion::OpenSearch1_2 => "OpenSearch_1.2",
            EngineVersion::OpenSearch1_3 => "OpenSearch_1.3",
            EngineVersion::OpenSearch2_3 => "OpenSearch_2.3",
            EngineVersion::OpenSearch2_5 => "OpenSearch_2.5",
            EngineVersion::OpenSearch2_7 => "OpenSearch_2.7",
            EngineVersion::OpenSearch2_9 => "OpenSearch_2.9",
            EngineVersion::OpenSearch2_11 => "OpenSearch_2.11",
            EngineVersion::Elasticsearch7_10 => "Elasticsearch_7.10",
        }
    }
}

/// Compute capacity for a domain.
#[derive(Debug, Clone, Default)]
pub struct CapacityConfig {
    /// Data node instance type, e.g. `t3.small.search`.
    pub data_node_instance_type: Option<String>,
    /// Number of data nodes.
    pub data_nodes: Option<u32>,
    /// Dedicated master node instance type.
    pub master_node_instance_type: Option<String>,
    /// Number of dedicated master nodes.
    pub master_nodes: Option<u32>,
}

impl CapacityConfig {
    /// Capacity with a single data node of the given instance type.
    pub fn data_nodes(instance_type: impl Into<String>) -> Self {
        Self {
            data_node_instance_type: Some(instance_type.into()),
            ..Self::default()
        }
    }

    /// Set the number of data nodes.
    pub fn with_data_node_count(mut self, count: u32) -> Self {
        self.data_nodes = Some(count);
        self
    }

    /// Add dedicated master nodes.
    pub fn with_masters(mut self, instance_type: impl Into<String>, count: u32) -> Self {
        self.master_node_instance_type = Some(instance_type.into());
        self.master_nodes = Some(count);
        self
    }

    pub(crate) fn to_json(&self) -> Value {
        let mut cluster = Map::new();

        if let Some(instance_type) = &self.data_node_instance_type {
            cluster.insert("InstanceType".to_string(), json!(instance_type));
        }
        cluster.insert(
            "InstanceCount".to_string(),
            json!(self.data_nodes.unwrap_or(1)),
        );
        if let Some(master_type) = &self.master_node_instance_type {
            cluster.insert("DedicatedMasterEnabled".to_string(), json!(true));
            cluster.insert("DedicatedMasterType".to_string(), json!(master_type));
            cluster.insert(
                "DedicatedMasterCount".to_string(),
                json!(self.master_nodes.unwrap_or(3)),
            );
        }

        Value::Object(cluster)
    }
}

/// EBS volume type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeType {
    /// General purpose SSD (gp2).
    Gp2,
    /// General purpose SSD (gp3).
    Gp3,
    /// Provisioned IOPS SSD.
    Io1,
}

impl VolumeType {
    /// The provider's volume type string.
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeType::Gp2 => "gp2",
            VolumeType::Gp3 => "gp3",
            VolumeType::Io1 => "io1",
        }
    }
}

/// EBS storage attached to each data node.
#[derive(Debug, Clone)]
pub struct EbsOptions {
    /// Whether EBS volumes are attached.
    pub enabled: bool,
    /// Volume size in GiB.
    pub volume_size: Option<u32>,
    /// Volume type.
    pub volume_type: Option<VolumeType>,
}

impl Default for EbsOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            volume_size: None,
            volume_type: None,
        }
    }
}

impl EbsOptions {
    /// EBS storage of the given size.
    pub fn with_volume_size(size: u32) -> Self {
        Self {
            volume_size: Some(size),
            ..Self::default()
        }
    }

    /// Set the volume type.
    pub fn with_volume_type(mut self, volume_type: VolumeType) -> Self {
        self.volume_type = Some(volume_type);
        self
    }

    /// Disable EBS storage (instance-store backed instance types only).
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            volume_size: None,
            volume_type: None,
        }
    }

    pub(crate) fn to_json(&self) -> Value {
        let mut ebs = Map::new();
        ebs.insert("EBSEnabled".to_string(), json!(self.enabled));
        if let Some(size) = self.volume_size {
            ebs.insert("VolumeSize".to_string(), json!(size));
        }
        if let Some(volume_type) = self.volume_type {
            ebs.insert("VolumeType".to_string(), json!(volume_type.as_str()));
        }
        Value::Object(ebs)
    }
}

/// At-rest encryption for a domain.
#[derive(Debug, Clone, Default)]
pub struct EncryptionAtRestOptions {
    /// Whether data is encrypted at rest.
    pub enabled: bool,
    /// Customer-managed KMS key; the provider's service key when absent.
    pub kms_key_id: Option<String>,
}

impl EncryptionAtRestOptions {
    /// At-rest encryption with the provider's service key.
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            kms_key_id: None,
        }
    }

    /// Use a customer-managed KMS key.
    pub fn with_kms_key(mut self, key_id: impl Into<String>) -> Self {
        self.kms_key_id = Some(key_id.into());
        self
    }

    pub(crate) fn to_json(&self) -> Value {
        let mut options = Map::new();
        options.insert("Enabled".to_string(), json!(self.enabled));
        if let Some(key) = &self.kms_key_id {
            options.insert("KmsKeyId".to_string(), json!(key));
        }
        Value::Object(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_versions_map_to_provider_strings() {
        assert_eq!(EngineVersion::OpenSearch1_2.as_str(), "OpenSearch_1.2");
        assert_eq!(EngineVersion::OpenSearch2_11.as_str(), "OpenSearch_2.11");
        assert_eq!(
            EngineVersion::Elasticsearch7_10.as_str(),
            "Elasticsearch_7.10"
        );
    }

    #[test]
    fn capacity_defaults_to_one_data_node() {
        let capacity = CapacityConfig::data_nodes("t3.small.search");
        assert_eq!(
            capacity.to_json(),
            json!({ "InstanceType": "t3.small.search", "InstanceCount": 1 })
        );
    }

    #[test]
    fn dedicated_masters_render_all_three_fields() {
        let capacity = CapacityConfig::data_nodes("r6g.large.search")
            .with_data_node_count(4)
            .with_masters("m6g.large.search", 3);
        assert_eq!(
            capacity.to_json(),
            json!({
                "InstanceType": "r6g.large.search",
                "InstanceCount": 4,
                "DedicatedMasterEnabled": true,
                "DedicatedMasterType": "m6g.large.search",
                "DedicatedMasterCount": 3,
            })
        );
    }

    #[test]
    fn ebs_renders_size_and_type() {
        let ebs = EbsOptions::with_volume_size(10).with_volume_type(VolumeType::Gp3);
        assert_eq!(
            ebs.to_json(),
            json!({ "EBSEnabled": true, "VolumeSize": 10, "VolumeType": "gp3" })
        );
    }

    #[test]
    fn disabled_ebs_renders_flag_only() {
        assert_eq!(EbsOptions::disabled().to_json(), json!({ "EBSEnabled": false }));
    }
}
