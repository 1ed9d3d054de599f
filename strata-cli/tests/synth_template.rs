//! Structural assertions over the synthesized deployment plan.

use serde_json::json;
use strata_core::assertions::Template;
use strata_cli::app::{STACK_NAME, build_app};

const DOMAIN_TYPE: &str = "AWS::OpenSearchService::Domain";

fn synthesized() -> Template {
    let app = build_app(None).expect("app builds");
    let stack = app
        .stacks()
        .iter()
        .find(|s| s.name() == STACK_NAME)
        .expect("stack is registered");
    Template::from_stack(stack).expect("stack synthesizes")
}

#[test]
fn declares_exactly_one_search_domain() {
    synthesized().resource_count_is(DOMAIN_TYPE, 1);
}

#[test]
fn engine_version_is_opensearch_1_2() {
    synthesized().has_resource_properties(DOMAIN_TYPE, &json!({ "EngineVersion": "OpenSearch_1.2" }));
}

#[test]
fn data_nodes_are_t3_small_search() {
    synthesized().has_resource_properties(
        DOMAIN_TYPE,
        &json!({ "ClusterConfig": { "InstanceType": "t3.small.search", "InstanceCount": 1 } }),
    );
}

#[test]
fn ebs_volume_is_ten_gigabytes() {
    synthesized().has_resource_properties(
        DOMAIN_TYPE,
        &json!({ "EBSOptions": { "EBSEnabled": true, "VolumeSize": 10 } }),
    );
}

#[test]
fn both_encryption_flags_are_enabled() {
    synthesized().has_resource_properties(
        DOMAIN_TYPE,
        &json!({
            "NodeToNodeEncryptionOptions": { "Enabled": true },
            "EncryptionAtRestOptions": { "Enabled": true },
        }),
    );
}

#[test]
fn removal_policy_destroys_the_domain() {
    synthesized().has_resource(
        DOMAIN_TYPE,
        &json!({ "DeletionPolicy": "Delete", "UpdateReplacePolicy": "Delete" }),
    );
}

#[test]
fn one_output_references_the_domain_endpoint() {
    let template = synthesized();
    template.output_count_is(1);

    let domains = template.find_resources(DOMAIN_TYPE);
    let logical_id = domains.keys().next().expect("domain is declared");
    template.has_output(
        "OpenSearchEndpoint",
        &json!({
            "Description": "Endpoint to connect to OpenSearch",
            "Value": { "Fn::GetAtt": [logical_id, "DomainEndpoint"] },
        }),
    );
}

#[test]
fn bootstrap_version_rule_is_suppressed() {
    let template = synthesized();
    assert!(template.section("Rules").is_none());
    assert!(template.section("Parameters").is_none());
}

#[test]
fn analytics_metadata_is_suppressed() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_app(Some(dir.path().to_path_buf())).expect("app builds");
    let assembly = app.synth().expect("app synthesizes");
    let artifact = assembly.stack(STACK_NAME).expect("stack artifact exists");
    assert!(artifact.template().get("Metadata").is_none());
}
