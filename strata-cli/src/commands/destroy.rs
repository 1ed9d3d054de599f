//! Tear the deployed stacks down.

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};

use strata_aws::{AwsConfig, CloudFormationClient};
use strata_cli::app;
use strata_cli::error::{CliError, CliResult};

/// Delete every stack of the application.
///
/// The domain carries a destroy removal policy, so the provider deletes
/// the cluster and its data with the stack.
pub async fn run(aws: AwsConfig, yes: bool) -> CliResult<()> {
    let app = app::build_app(None)?;

    if !yes {
        let names: Vec<&str> = app.stacks().iter().map(|s| s.name()).collect();
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "  Destroy {}? This deletes the cluster and its data",
                names.join(", ")
            ))
            .default(false)
            .interact()
            .map_err(|e| CliError::Command(e.to_string()))?;

        if !confirmed {
            println!("  {} Destroy cancelled", "✗".red());
            return Ok(());
        }
    }

    let client = CloudFormationClient::new(aws).await?;
    for stack in app.stacks() {
        println!(
            "  {} Destroying {}...",
            "→".cyan().bold(),
            stack.name().bright_white()
        );
        client.destroy(stack.name()).await?;
        println!("  {} {} destroyed", "✓".green().bold(), stack.name());
    }

    Ok(())
}
