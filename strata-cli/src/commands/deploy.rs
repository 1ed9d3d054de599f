//! Deploy the synthesized stacks.

use colored::Colorize;
use std::path::PathBuf;

use strata_aws::{AwsConfig, CloudFormationClient};
use strata_cli::app;
use strata_cli::error::CliResult;

/// Synthesize, submit every stack to the provider, and print its outputs.
pub async fn run(outdir: Option<PathBuf>, aws: AwsConfig) -> CliResult<()> {
    let app = app::build_app(outdir)?;
    let assembly = app.synth()?;
    let client = CloudFormationClient::new(aws).await?;

    for artifact in assembly.artifacts() {
        println!(
            "  {} Deploying {}...",
            "→".cyan().bold(),
            artifact.stack_name().bright_white()
        );

        let outcome = client
            .deploy(artifact.stack_name(), &artifact.template_body()?)
            .await?;

        if outcome.no_changes {
            println!("  {} {} (no changes)", "✓".green().bold(), outcome.stack_name);
        } else {
            println!(
                "  {} {} {}",
                "✓".green().bold(),
                outcome.stack_name,
                outcome.status.dimmed()
            );
        }

        for output in &outcome.outputs {
            println!(
                "  {} {} = {}",
                "→".dimmed(),
                output.key.bright_white(),
                output.value.cyan()
            );
            if let Some(description) = &output.description {
                println!("    {}", description.dimmed());
            }
        }
    }

    Ok(())
}
