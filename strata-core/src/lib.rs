//! Construct and synthesis core for Strata.
//!
//! This crate provides the declarative building blocks for describing a
//! CloudFormation stack and turning it into a deployment plan:
//! - Resource and output declarations with `Ref`/`Fn::GetAtt` tokens
//! - Deterministic logical ID allocation
//! - Stack synthesis into a cloud assembly (templates + manifest)
//! - Template assertions for structural tests
//!
//! # Example
//!
//! ```rust
//! use strata_core::{App, AppProps, CfnOutput, OutputProps, RemovalPolicy, Stack};
//! use serde_json::json;
//!
//! # fn main() -> strata_core::Result<()> {
//! let mut stack = Stack::new("demo")?;
//! let bucket = stack.add_resource(
//!     "Artifacts",
//!     "AWS::S3::Bucket",
//!     json!({ "VersioningConfiguration": { "Status": "Enabled" } }),
//!     Some(RemovalPolicy::Destroy),
//! )?;
//! CfnOutput::new(
//!     &mut stack,
//!     "Artifacts Arn",
//!     OutputProps::value(bucket.get_att("Arn")),
//! )?;
//!
//! let mut app = App::with_props(AppProps {
//!     analytics_reporting: false,
//!     ..AppProps::default()
//! });
//! app.add_stack(stack)?;
//! let assembly = app.synth()?;
//! # std::fs::remove_dir_all(assembly.directory()).ok();
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod app;
mod assembly;
mod error;
mod output;
mod resource;
mod stack;
mod synthesizer;
mod value;

pub mod assertions;

pub use app::{App, AppProps};
pub use assembly::{CloudAssembly, StackArtifact};
pub use error::{Result, SynthError};
pub use output::{CfnOutput, OutputProps};
pub use resource::{CfnResource, RemovalPolicy, ResourceRef};
pub use stack::Stack;
pub use synthesizer::DefaultStackSynthesizer;
pub use value::CfnValue;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        App, AppProps, CfnOutput, CfnValue, DefaultStackSynthesizer, OutputProps, RemovalPolicy,
        Result, Stack, SynthError,
    };
}
