//! Synthesize the cloud assembly.

use colored::Colorize;
use std::path::PathBuf;

use strata_cli::app;
use strata_cli::error::CliResult;

/// Synthesize every stack into the assembly directory.
pub fn run(outdir: Option<PathBuf>, print: bool) -> CliResult<()> {
    let app = app::build_app(outdir)?;
    let assembly = app.synth()?;

    for artifact in assembly.artifacts() {
        if print {
            println!("{}", artifact.template_body()?);
        } else {
            println!(
                "  {} {} {} {}",
                "→".cyan(),
                artifact.stack_name().bright_white(),
                "=>".dimmed(),
                artifact.template_file().display()
            );
        }
    }

    if !print {
        println!(
            "  {} Synthesized {} stack(s) to {}",
            "✓".green().bold(),
            assembly.artifacts().len(),
            assembly.directory().display()
        );
    }

    Ok(())
}
