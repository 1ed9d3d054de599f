//! Resource declarations.

use crate::value::CfnValue;
use serde_json::{Map, Value, json};

/// Behavior for a resource when its owning stack is deleted or the
/// resource is replaced during an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalPolicy {
    /// Delete the resource with the stack.
    Destroy,
    /// Keep the resource after the stack is gone.
    Retain,
    /// Snapshot the resource before deleting it, where supported.
    Snapshot,
}

impl RemovalPolicy {
    /// The CloudFormation policy name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RemovalPolicy::Destroy => "Delete",
            RemovalPolicy::Retain => "Retain",
            RemovalPolicy::Snapshot => "Snapshot",
        }
    }
}

/// A declared resource: a type, literal properties, and an optional
/// removal policy. Everything else is the provider's concern.
#[derive(Debug, Clone)]
pub struct CfnResource {
    logical_id: String,
    resource_type: String,
    properties: Value,
    removal_policy: Option<RemovalPolicy>,
}

impl CfnResource {
    pub(crate) fn new(
        logical_id: String,
        resource_type: impl Into<String>,
        properties: Value,
        removal_policy: Option<RemovalPolicy>,
    ) -> Self {
        Self {
            logical_id,
            resource_type: resource_type.into(),
            properties,
            removal_policy,
        }
    }

    /// Logical ID the resource is keyed by in the template.
    pub fn logical_id(&self) -> &str {
        &self.logical_id
    }

    /// Resource type, e.g. `AWS::OpenSearchService::Domain`.
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub(crate) fn to_json(&self) -> Value {
        let mut body = Map::new();
        body.insert("Type".to_string(), json!(self.resource_type));

        if let Value::Object(props) = &self.properties {
            if !props.is_empty() {
                body.insert("Properties".to_string(), self.properties.clone());
            }
        }

        if let Some(policy) = self.removal_policy {
            body.insert("DeletionPolicy".to_string(), json!(policy.as_str()));
            body.insert("UpdateReplacePolicy".to_string(), json!(policy.as_str()));
        }

        Value::Object(body)
    }
}

/// Handle returned when a resource is added to a stack.
///
/// Carries the allocated logical ID and mints attribute tokens.
#[derive(Debug, Clone)]
pub struct ResourceRef {
    logical_id: String,
}

impl ResourceRef {
    pub(crate) fn new(logical_id: String) -> Self {
        Self { logical_id }
    }

    /// Logical ID of the underlying resource.
    pub fn logical_id(&self) -> &str {
        &self.logical_id
    }

    /// A `Ref` token for this resource.
    pub fn reference(&self) -> CfnValue {
        CfnValue::Ref(self.logical_id.clone())
    }

    /// A `Fn::GetAtt` token for a runtime attribute of this resource.
    pub fn get_att(&self, attribute: impl Into<String>) -> CfnValue {
        CfnValue::get_att(self.logical_id.clone(), attribute)
    }
}
