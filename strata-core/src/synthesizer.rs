//! Stack synthesizer options.

use serde_json::{Map, Value, json};

/// Bootstrap versions the default synthesizer refuses to deploy against.
const OUTDATED_BOOTSTRAP_VERSIONS: [&str; 5] = ["1", "2", "3", "4", "5"];

/// Controls the provider-facing scaffolding a stack template carries.
///
/// By default the synthesizer emits a `BootstrapVersion` parameter backed
/// by SSM and a `CheckBootstrapVersion` rule that rejects environments
/// bootstrapped with an outdated toolkit. Both can be suppressed for
/// stacks that do not rely on bootstrap resources.
#[derive(Debug, Clone)]
pub struct DefaultStackSynthesizer {
    qualifier: String,
    bootstrap_version_rule: bool,
}

impl Default for DefaultStackSynthesizer {
    fn default() -> Self {
        Self {
            qualifier: "default".to_string(),
            bootstrap_version_rule: true,
        }
    }
}

impl DefaultStackSynthesizer {
    /// Synthesizer with the bootstrap-version rule enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the bootstrap-version parameter and rule.
    pub fn without_bootstrap_version_rule(mut self) -> Self {
        self.bootstrap_version_rule = false;
        self
    }

    /// Use a non-default bootstrap qualifier.
    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = qualifier.into();
        self
    }

    /// Whether the bootstrap-version rule will be emitted.
    pub fn bootstrap_version_rule(&self) -> bool {
        self.bootstrap_version_rule
    }

    pub(crate) fn apply(&self, template: &mut Map<String, Value>) {
        if !self.bootstrap_version_rule {
            return;
        }

        template.insert(
            "Parameters".to_string(),
            json!({
                "BootstrapVersion": {
                    "Type": "AWS::SSM::Parameter::Value<String>",
                    "Default": format!("/strata-bootstrap/{}/version", self.qualifier),
                    "Description": "Version of the bootstrap resources in this environment",
                }
            }),
        );

        template.insert(
            "Rules".to_string(),
            json!({
                "CheckBootstrapVersion": {
                    "Assertions": [
                        {
                            "Assert": {
                                "Fn::Not": [
                                    {
                                        "Fn::Contains": [
                                            OUTDATED_BOOTSTRAP_VERSIONS,
                                            { "Ref": "BootstrapVersion" }
                                        ]
                                    }
                                ]
                            },
                            "AssertDescription": "This stack requires bootstrap version >= 6; re-bootstrap the environment",
                        }
                    ]
                }
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_synthesizer_emits_parameter_and_rule() {
        let mut template = Map::new();
        DefaultStackSynthesizer::new().apply(&mut template);

        assert!(template.contains_key("Parameters"));
        assert!(template.contains_key("Rules"));
        assert_eq!(
            template["Parameters"]["BootstrapVersion"]["Default"],
            json!("/strata-bootstrap/default/version")
        );
    }

    #[test]
    fn disabled_rule_emits_nothing() {
        let mut template = Map::new();
        DefaultStackSynthesizer::new()
            .without_bootstrap_version_rule()
            .apply(&mut template);

        assert!(template.is_empty());
    }

    #[test]
    fn qualifier_lands_in_parameter_default() {
        let mut template = Map::new();
        DefaultStackSynthesizer::new()
            .with_qualifier("prod")
            .apply(&mut template);

        assert_eq!(
            template["Parameters"]["BootstrapVersion"]["Default"],
            json!("/strata-bootstrap/prod/version")
        );
    }
}
