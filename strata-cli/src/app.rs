//! The deployable application: one stack, one managed search domain.

use crate::error::CliResult;
use std::path::PathBuf;
use strata_core::{
    App, AppProps, CfnOutput, DefaultStackSynthesizer, OutputProps, RemovalPolicy, Stack,
};
use strata_opensearch::{
    CapacityConfig, Domain, DomainProps, EbsOptions, EncryptionAtRestOptions, EngineVersion,
};

/// Name of the single stack this application deploys.
pub const STACK_NAME: &str = "opensearch-cluster";

/// Build the application: analytics reporting off, one stack.
pub fn build_app(outdir: Option<PathBuf>) -> CliResult<App> {
    let mut app = App::with_props(AppProps {
        outdir,
        analytics_reporting: false,
    });
    app.add_stack(opensearch_stack()?)?;
    Ok(app)
}

/// Declare the OpenSearch cluster stack.
///
/// Every value is a literal; the stack does not rely on bootstrap
/// resources, so the bootstrap-version rule is suppressed.
fn opensearch_stack() -> CliResult<Stack> {
    let mut stack = Stack::with_synthesizer(
        STACK_NAME,
        DefaultStackSynthesizer::new().without_bootstrap_version_rule(),
    )?;

    let cluster = Domain::new(
        &mut stack,
        "InterceptorTest",
        DomainProps {
            version: EngineVersion::OpenSearch1_2,
            capacity: CapacityConfig::data_nodes("t3.small.search"),
            ebs: EbsOptions::with_volume_size(10),
            node_to_node_encryption: true,
            encryption_at_rest: EncryptionAtRestOptions::enabled(),
            removal_policy: Some(RemovalPolicy::Destroy),
            domain_name: None,
        },
    )?;

    // Surfaced by the provider once the domain is up
    CfnOutput::new(
        &mut stack,
        "OpenSearch Endpoint",
        OutputProps::value(cluster.domain_endpoint())
            .with_description("Endpoint to connect to OpenSearch"),
    )?;

    Ok(stack)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_declares_exactly_one_stack() {
        let app = build_app(None).unwrap();
        assert_eq!(app.stacks().len(), 1);
        assert_eq!(app.stacks()[0].name(), STACK_NAME);
    }

    #[test]
    fn stack_declares_one_resource_and_one_output() {
        let app = build_app(None).unwrap();
        let stack = &app.stacks()[0];
        assert_eq!(stack.resources().len(), 1);
        assert_eq!(stack.outputs().len(), 1);
    }
}
