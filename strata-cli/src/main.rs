//! Strata CLI - declare, synthesize, and provision the OpenSearch cluster stack.
//!
//! # Commands
//!
//! - `strata synth` - Synthesize the cloud assembly
//! - `strata diff` - Compare the synthesized templates with what is deployed
//! - `strata deploy` - Provision the stacks and print their outputs
//! - `strata destroy` - Tear the stacks down

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

mod commands;

use commands::{deploy, destroy, diff, synth};
use strata_cli::config::CliConfig;
use strata_cli::error::CliResult;

/// Strata - declarative CloudFormation stacks
#[derive(Parser)]
#[command(name = "strata")]
#[command(version)]
#[command(about = "Synthesize, diff, deploy, and destroy the OpenSearch cluster stack")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize the cloud assembly
    #[command(alias = "s")]
    Synth(SynthArgs),

    /// Compare the synthesized templates with what is deployed
    Diff(AwsArgs),

    /// Provision the stacks and print their outputs
    #[command(alias = "d")]
    Deploy(DeployArgs),

    /// Tear the stacks down
    Destroy(DestroyArgs),
}

#[derive(Args)]
struct SynthArgs {
    /// Assembly output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print templates to stdout instead of listing files
    #[arg(long)]
    print: bool,
}

#[derive(Args)]
struct AwsArgs {
    /// AWS region
    #[arg(long, env = "AWS_REGION")]
    region: Option<String>,

    /// AWS credentials profile
    #[arg(long)]
    profile: Option<String>,

    /// Custom endpoint URL (for LocalStack etc.)
    #[arg(long)]
    endpoint_url: Option<String>,
}

#[derive(Args)]
struct DeployArgs {
    #[command(flatten)]
    aws: AwsArgs,

    /// Assembly output directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct DestroyArgs {
    #[command(flatten)]
    aws: AwsArgs,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_tracing(cli.verbose, cli.quiet);

    if let Err(e) = run(cli.command).await {
        eprintln!("\n  {} {}\n", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> CliResult<()> {
    let config = CliConfig::load()?;

    match command {
        Commands::Synth(args) => synth::run(config.output_dir(args.output), args.print),

        Commands::Diff(args) => {
            let aws = config.aws_config(args.region, args.profile, args.endpoint_url);
            diff::run(aws).await
        }

        Commands::Deploy(args) => {
            let aws =
                config.aws_config(args.aws.region, args.aws.profile, args.aws.endpoint_url);
            deploy::run(config.output_dir(args.output), aws).await
        }

        Commands::Destroy(args) => {
            let aws =
                config.aws_config(args.aws.region, args.aws.profile, args.aws.endpoint_url);
            destroy::run(aws, args.yes).await
        }
    }
}
