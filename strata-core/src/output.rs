//! Stack output declarations.

use crate::error::Result;
use crate::stack::Stack;
use crate::value::CfnValue;
use serde_json::{Map, Value, json};

/// Properties for a stack output.
#[derive(Debug, Clone)]
pub struct OutputProps {
    /// Value surfaced after provisioning completes.
    pub value: CfnValue,
    /// Human-readable description.
    pub description: Option<String>,
    /// Cross-stack export name.
    pub export_name: Option<String>,
}

impl OutputProps {
    /// Output props with just a value.
    pub fn value(value: impl Into<CfnValue>) -> Self {
        Self {
            value: value.into(),
            description: None,
            export_name: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the export name.
    pub fn with_export_name(mut self, name: impl Into<String>) -> Self {
        self.export_name = Some(name.into());
        self
    }
}

/// A declared stack output.
#[derive(Debug, Clone)]
pub struct CfnOutput {
    logical_id: String,
    props: OutputProps,
}

impl CfnOutput {
    /// Declare an output on `stack`.
    ///
    /// The logical ID is the construct ID stripped to alphanumerics, so
    /// `"OpenSearch Endpoint"` is keyed as `OpenSearchEndpoint`.
    pub fn new(stack: &mut Stack, id: &str, props: OutputProps) -> Result<CfnOutput> {
        let logical_id = stack.allocate_output_id(id)?;
        let output = CfnOutput {
            logical_id,
            props,
        };
        stack.register_output(output.clone());
        Ok(output)
    }

    /// Logical ID the output is keyed by in the template.
    pub fn logical_id(&self) -> &str {
        &self.logical_id
    }

    pub(crate) fn to_json(&self) -> Value {
        let mut body = Map::new();

        if let Some(description) = &self.props.description {
            body.insert("Description".to_string(), json!(description));
        }

        body.insert("Value".to_string(), self.props.value.to_json());

        if let Some(export) = &self.props.export_name {
            body.insert("Export".to_string(), json!({ "Name": export }));
        }

        Value::Object(body)
    }
}
