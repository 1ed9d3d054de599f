//! Template value tokens.

use serde_json::{Value, json};

/// A value in a CloudFormation template.
///
/// Literals carry their value directly; `Ref` and `GetAtt` are tokens the
/// provider resolves after provisioning.
#[derive(Debug, Clone, PartialEq)]
pub enum CfnValue {
    /// Literal string.
    String(String),
    /// Literal integer.
    Number(i64),
    /// Literal boolean.
    Bool(bool),
    /// Reference to another element's logical ID.
    Ref(String),
    /// Reference to a runtime attribute of a resource.
    GetAtt {
        /// Logical ID of the resource.
        logical_id: String,
        /// Attribute name, e.g. `DomainEndpoint`.
        attribute: String,
    },
    /// Raw JSON, used for structured literals.
    Json(Value),
}

impl CfnValue {
    /// Create an attribute reference token.
    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::GetAtt {
            logical_id: logical_id.into(),
            attribute: attribute.into(),
        }
    }

    /// Render the value into template JSON.
    pub fn to_json(&self) -> Value {
        match self {
            Self::String(s) => json!(s),
            Self::Number(n) => json!(n),
            Self::Bool(b) => json!(b),
            Self::Ref(id) => json!({ "Ref": id }),
            Self::GetAtt {
                logical_id,
                attribute,
            } => json!({ "Fn::GetAtt": [logical_id, attribute] }),
            Self::Json(v) => v.clone(),
        }
    }
}

impl From<&str> for CfnValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for CfnValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for CfnValue {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<u32> for CfnValue {
    fn from(n: u32) -> Self {
        Self::Number(i64::from(n))
    }
}

impl From<bool> for CfnValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Value> for CfnValue {
    fn from(v: Value) -> Self {
        Self::Json(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_render_as_json_scalars() {
        assert_eq!(CfnValue::from("a").to_json(), json!("a"));
        assert_eq!(CfnValue::from(10_i64).to_json(), json!(10));
        assert_eq!(CfnValue::from(true).to_json(), json!(true));
    }

    #[test]
    fn ref_renders_as_intrinsic() {
        let v = CfnValue::Ref("BootstrapVersion".to_string());
        assert_eq!(v.to_json(), json!({ "Ref": "BootstrapVersion" }));
    }

    #[test]
    fn get_att_renders_as_intrinsic() {
        let v = CfnValue::get_att("Cluster1A2B3C4D", "DomainEndpoint");
        assert_eq!(
            v.to_json(),
            json!({ "Fn::GetAtt": ["Cluster1A2B3C4D", "DomainEndpoint"] })
        );
    }
}
