//! Structural assertions over synthesized templates.
//!
//! Test helper mirroring the shape of the declarations: load a template,
//! then assert on resource counts, property subsets, and outputs. All
//! assertion methods panic with a descriptive message on mismatch, so
//! they compose directly with `#[test]` functions.

use crate::error::Result;
use crate::stack::Stack;
use serde_json::Value;
use std::collections::BTreeMap;

/// A synthesized template under assertion.
#[derive(Debug, Clone)]
pub struct Template {
    template: Value,
}

impl Template {
    /// Render `stack` and wrap the result.
    pub fn from_stack(stack: &Stack) -> Result<Self> {
        Ok(Self {
            template: stack.to_template()?,
        })
    }

    /// Wrap an already rendered template.
    pub fn from_json(template: Value) -> Self {
        Self { template }
    }

    /// The underlying template body.
    pub fn as_json(&self) -> &Value {
        &self.template
    }

    /// A top-level template section (`Resources`, `Rules`, ...), if present.
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.template.get(name)
    }

    /// All resources of the given type, keyed by logical ID.
    pub fn find_resources(&self, resource_type: &str) -> BTreeMap<String, Value> {
        let mut found = BTreeMap::new();
        if let Some(Value::Object(resources)) = self.section("Resources") {
            for (logical_id, body) in resources {
                if body.get("Type").and_then(Value::as_str) == Some(resource_type) {
                    found.insert(logical_id.clone(), body.clone());
                }
            }
        }
        found
    }

    /// Assert the template declares exactly `count` resources of a type.
    #[track_caller]
    pub fn resource_count_is(&self, resource_type: &str, count: usize) {
        let found = self.find_resources(resource_type);
        assert_eq!(
            found.len(),
            count,
            "expected {} resource(s) of type {}, found {}: {:?}",
            count,
            resource_type,
            found.len(),
            found.keys().collect::<Vec<_>>(),
        );
    }

    /// Assert some resource of the given type carries `properties` as a
    /// subset of its `Properties` section.
    #[track_caller]
    pub fn has_resource_properties(&self, resource_type: &str, properties: &Value) {
        let found = self.find_resources(resource_type);
        let matched = found
            .values()
            .any(|body| is_subset(properties, body.get("Properties").unwrap_or(&Value::Null)));
        assert!(
            matched,
            "no {} resource matches properties {}",
            resource_type,
            properties,
        );
    }

    /// Assert some resource of the given type matches `partial` as a
    /// subset of its whole body (`Properties`, `DeletionPolicy`, ...).
    #[track_caller]
    pub fn has_resource(&self, resource_type: &str, partial: &Value) {
        let found = self.find_resources(resource_type);
        let matched = found.values().any(|body| is_subset(partial, body));
        assert!(
            matched,
            "no {} resource matches {}",
            resource_type,
            partial,
        );
    }

    /// Assert the template declares exactly `count` outputs.
    #[track_caller]
    pub fn output_count_is(&self, count: usize) {
        let actual = match self.section("Outputs") {
            Some(Value::Object(outputs)) => outputs.len(),
            _ => 0,
        };
        assert_eq!(actual, count, "expected {} output(s), found {}", count, actual);
    }

    /// Assert the output keyed by `logical_id` matches `partial`.
    #[track_caller]
    pub fn has_output(&self, logical_id: &str, partial: &Value) {
        let output = self
            .section("Outputs")
            .and_then(|outputs| outputs.get(logical_id))
            .unwrap_or_else(|| panic!("no output with logical id {}", logical_id));
        assert!(
            is_subset(partial, output),
            "output {} is {}, which does not match {}",
            logical_id,
            output,
            partial,
        );
    }
}

/// Subset match: every key/element of `expected` must appear in `actual`.
/// Arrays match element-wise and must have equal length.
fn is_subset(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Object(exp), Value::Object(act)) => exp
            .iter()
            .all(|(key, value)| act.get(key).is_some_and(|a| is_subset(value, a))),
        (Value::Array(exp), Value::Array(act)) => {
            exp.len() == act.len() && exp.iter().zip(act).all(|(e, a)| is_subset(e, a))
        }
        (exp, act) => exp == act,
    }
}
