//! Stack: a named, atomically deployable collection of declared resources.

use crate::error::{Result, SynthError};
use crate::output::CfnOutput;
use crate::resource::{CfnResource, RemovalPolicy, ResourceRef};
use crate::synthesizer::DefaultStackSynthesizer;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// A named collection of resource and output declarations.
///
/// Constructs register themselves through `&mut Stack`; the stack owns the
/// declarations and renders them into a CloudFormation template at
/// synthesis time.
#[derive(Debug, Clone)]
pub struct Stack {
    name: String,
    synthesizer: DefaultStackSynthesizer,
    resources: Vec<CfnResource>,
    outputs: Vec<CfnOutput>,
    construct_ids: HashSet<String>,
}

impl Stack {
    /// Create a stack with the default synthesizer.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::with_synthesizer(name, DefaultStackSynthesizer::new())
    }

    /// Create a stack with an explicit synthesizer.
    pub fn with_synthesizer(
        name: impl Into<String>,
        synthesizer: DefaultStackSynthesizer,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(SynthError::InvalidId(name));
        }
        Ok(Self {
            name,
            synthesizer,
            resources: Vec::new(),
            outputs: Vec::new(),
            construct_ids: HashSet::new(),
        })
    }

    /// Stack name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared resources, in declaration order.
    pub fn resources(&self) -> &[CfnResource] {
        &self.resources
    }

    /// Declared outputs, in declaration order.
    pub fn outputs(&self) -> &[CfnOutput] {
        &self.outputs
    }

    /// Declare a resource and return a handle minting attribute tokens.
    pub fn add_resource(
        &mut self,
        id: &str,
        resource_type: impl Into<String>,
        properties: Value,
        removal_policy: Option<RemovalPolicy>,
    ) -> Result<ResourceRef> {
        let logical_id = self.allocate_resource_id(id)?;
        self.resources.push(CfnResource::new(
            logical_id.clone(),
            resource_type,
            properties,
            removal_policy,
        ));
        Ok(ResourceRef::new(logical_id))
    }

    pub(crate) fn register_output(&mut self, output: CfnOutput) {
        self.outputs.push(output);
    }

    /// Render the stack into a CloudFormation template.
    pub fn to_template(&self) -> Result<Value> {
        if self.resources.is_empty() {
            return Err(SynthError::EmptyStack(self.name.clone()));
        }

        let mut template = Map::new();
        self.synthesizer.apply(&mut template);

        let mut resources = Map::new();
        for resource in &self.resources {
            resources.insert(resource.logical_id().to_string(), resource.to_json());
        }
        template.insert("Resources".to_string(), Value::Object(resources));

        if !self.outputs.is_empty() {
            let mut outputs = Map::new();
            for output in &self.outputs {
                outputs.insert(output.logical_id().to_string(), output.to_json());
            }
            template.insert("Outputs".to_string(), Value::Object(outputs));
        }

        Ok(Value::Object(template))
    }

    /// Resources are keyed by the sanitized construct ID plus a short
    /// hash of the stack-scoped path.
    fn allocate_resource_id(&mut self, id: &str) -> Result<String> {
        let sanitized = self.claim(id)?;
        Ok(format!("{}{}", sanitized, self.path_hash(id)))
    }

    /// Outputs are keyed by the sanitized construct ID alone; their names
    /// are part of the stack's visible interface. Two IDs that sanitize to
    /// the same key are a collision even when the raw IDs differ.
    pub(crate) fn allocate_output_id(&mut self, id: &str) -> Result<String> {
        let sanitized = self.claim(id)?;
        if self.outputs.iter().any(|o| o.logical_id() == sanitized) {
            return Err(SynthError::DuplicateId {
                stack: self.name.clone(),
                id: id.to_string(),
            });
        }
        Ok(sanitized)
    }

    fn claim(&mut self, id: &str) -> Result<String> {
        let sanitized: String = id.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
        if sanitized.is_empty() {
            return Err(SynthError::InvalidId(id.to_string()));
        }
        if !self.construct_ids.insert(id.to_string()) {
            return Err(SynthError::DuplicateId {
                stack: self.name.clone(),
                id: id.to_string(),
            });
        }
        Ok(sanitized)
    }

    fn path_hash(&self, id: &str) -> String {
        let digest = Sha256::digest(format!("{}/{}", self.name, id).as_bytes());
        digest[..4].iter().map(|b| format!("{:02X}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputProps;
    use serde_json::json;

    #[test]
    fn resource_ids_are_deterministic() {
        let mut a = Stack::new("opensearch-cluster").unwrap();
        let mut b = Stack::new("opensearch-cluster").unwrap();

        let ra = a
            .add_resource("InterceptorTest", "AWS::OpenSearchService::Domain", json!({}), None)
            .unwrap();
        let rb = b
            .add_resource("InterceptorTest", "AWS::OpenSearchService::Domain", json!({}), None)
            .unwrap();

        assert_eq!(ra.logical_id(), rb.logical_id());
        assert!(ra.logical_id().starts_with("InterceptorTest"));
        assert_eq!(ra.logical_id().len(), "InterceptorTest".len() + 8);
    }

    #[test]
    fn same_id_hashes_differently_across_stacks() {
        let mut a = Stack::new("stack-a").unwrap();
        let mut b = Stack::new("stack-b").unwrap();

        let ra = a.add_resource("Domain", "AWS::OpenSearchService::Domain", json!({}), None);
        let rb = b.add_resource("Domain", "AWS::OpenSearchService::Domain", json!({}), None);

        assert_ne!(ra.unwrap().logical_id(), rb.unwrap().logical_id());
    }

    #[test]
    fn duplicate_construct_id_is_rejected() {
        let mut stack = Stack::new("demo").unwrap();
        stack
            .add_resource("Domain", "AWS::OpenSearchService::Domain", json!({}), None)
            .unwrap();

        let err = stack
            .add_resource("Domain", "AWS::OpenSearchService::Domain", json!({}), None)
            .unwrap_err();
        assert!(matches!(err, SynthError::DuplicateId { .. }));
    }

    #[test]
    fn id_without_alphanumerics_is_rejected() {
        let mut stack = Stack::new("demo").unwrap();
        let err = stack
            .add_resource("---", "AWS::SNS::Topic", json!({}), None)
            .unwrap_err();
        assert!(matches!(err, SynthError::InvalidId(_)));
    }

    #[test]
    fn empty_stack_does_not_synthesize() {
        let stack = Stack::new("empty").unwrap();
        assert!(matches!(
            stack.to_template(),
            Err(SynthError::EmptyStack(name)) if name == "empty"
        ));
    }

    #[test]
    fn output_ids_colliding_after_sanitization_are_rejected() {
        let mut stack = Stack::new("demo").unwrap();
        CfnOutput::new(&mut stack, "End point", OutputProps::value("a")).unwrap();

        let err = CfnOutput::new(&mut stack, "Endpoint", OutputProps::value("b")).unwrap_err();
        assert!(matches!(err, SynthError::DuplicateId { .. }));
    }

    #[test]
    fn template_contains_resources_and_outputs() {
        let mut stack = Stack::new("demo").unwrap();
        let topic = stack
            .add_resource("Topic", "AWS::SNS::Topic", json!({}), None)
            .unwrap();
        CfnOutput::new(
            &mut stack,
            "Topic Arn",
            OutputProps::value(topic.get_att("Arn")),
        )
        .unwrap();

        let template = stack.to_template().unwrap();
        assert_eq!(template["Resources"].as_object().unwrap().len(), 1);
        assert_eq!(
            template["Outputs"]["TopicArn"]["Value"],
            json!({ "Fn::GetAtt": [topic.logical_id(), "Arn"] })
        );
    }
}
