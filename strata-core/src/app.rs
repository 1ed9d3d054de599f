//! Application object: the top-level deployable unit.

use crate::assembly::{CloudAssembly, StackArtifact};
use crate::error::{Result, SynthError};
use crate::stack::Stack;
use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Properties for an [`App`].
#[derive(Debug, Clone)]
pub struct AppProps {
    /// Directory the cloud assembly is written into.
    pub outdir: Option<PathBuf>,
    /// Stamp templates with tool version metadata.
    pub analytics_reporting: bool,
}

impl Default for AppProps {
    fn default() -> Self {
        Self {
            outdir: None,
            analytics_reporting: true,
        }
    }
}

/// The top-level deployable application.
///
/// An app owns its stacks and synthesizes each of them exactly once into
/// a cloud assembly: one template file per stack plus a manifest.
#[derive(Debug)]
pub struct App {
    outdir: Option<PathBuf>,
    analytics_reporting: bool,
    stacks: Vec<Stack>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// App with default properties.
    pub fn new() -> Self {
        Self::with_props(AppProps::default())
    }

    /// App with explicit properties.
    pub fn with_props(props: AppProps) -> Self {
        Self {
            outdir: props.outdir,
            analytics_reporting: props.analytics_reporting,
            stacks: Vec::new(),
        }
    }

    /// Register a stack. Stack names are unique within an app.
    pub fn add_stack(&mut self, stack: Stack) -> Result<()> {
        if self.stacks.iter().any(|s| s.name() == stack.name()) {
            return Err(SynthError::DuplicateStack(stack.name().to_string()));
        }
        self.stacks.push(stack);
        Ok(())
    }

    /// Registered stacks, in registration order.
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    /// Assembly output directory.
    pub fn outdir(&self) -> PathBuf {
        self.outdir
            .clone()
            .unwrap_or_else(|| PathBuf::from("strata.out"))
    }

    /// Synthesize every stack into the assembly directory.
    pub fn synth(&self) -> Result<CloudAssembly> {
        let outdir = self.outdir();
        fs::create_dir_all(&outdir)?;

        let mut artifacts = Vec::with_capacity(self.stacks.len());
        let mut manifest_artifacts = serde_json::Map::new();

        for stack in &self.stacks {
            let mut template = stack.to_template()?;
            if self.analytics_reporting {
                if let Value::Object(body) = &mut template {
                    body.insert(
                        "Metadata".to_string(),
                        json!({ "Strata": { "Version": env!("CARGO_PKG_VERSION") } }),
                    );
                }
            }

            let file_name = format!("{}.template.json", stack.name());
            let template_file = outdir.join(&file_name);
            fs::write(&template_file, serde_json::to_vec_pretty(&template)?)?;
            debug!(stack = stack.name(), file = %template_file.display(), "wrote template");

            manifest_artifacts.insert(
                stack.name().to_string(),
                json!({
                    "type": "aws:cloudformation:stack",
                    "templateFile": file_name,
                }),
            );
            artifacts.push(StackArtifact::new(
                stack.name().to_string(),
                template_file,
                template,
            ));
        }

        let manifest = json!({
            "version": env!("CARGO_PKG_VERSION"),
            "artifacts": manifest_artifacts,
        });
        fs::write(outdir.join("manifest.json"), serde_json::to_vec_pretty(&manifest)?)?;

        info!(stacks = artifacts.len(), outdir = %outdir.display(), "app synthesized");
        Ok(CloudAssembly::new(outdir, artifacts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stack_with_resource(name: &str) -> Stack {
        let mut stack = Stack::new(name).unwrap();
        stack
            .add_resource("Topic", "AWS::SNS::Topic", json!({}), None)
            .unwrap();
        stack
    }

    #[test]
    fn duplicate_stack_name_is_rejected() {
        let mut app = App::new();
        app.add_stack(stack_with_resource("demo")).unwrap();
        let err = app.add_stack(stack_with_resource("demo")).unwrap_err();
        assert!(matches!(err, SynthError::DuplicateStack(name) if name == "demo"));
    }

    #[test]
    fn synth_writes_templates_and_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::with_props(AppProps {
            outdir: Some(dir.path().to_path_buf()),
            analytics_reporting: false,
        });
        app.add_stack(stack_with_resource("demo")).unwrap();

        let assembly = app.synth().unwrap();

        assert!(dir.path().join("demo.template.json").exists());
        assert!(dir.path().join("manifest.json").exists());
        assert_eq!(assembly.artifacts().len(), 1);
        assert!(assembly.stack("demo").is_some());

        let manifest: Value =
            serde_json::from_slice(&std::fs::read(dir.path().join("manifest.json")).unwrap())
                .unwrap();
        assert_eq!(
            manifest["artifacts"]["demo"]["templateFile"],
            json!("demo.template.json")
        );
    }

    #[test]
    fn analytics_reporting_controls_metadata_section() {
        let dir = tempfile::tempdir().unwrap();

        let mut reporting = App::with_props(AppProps {
            outdir: Some(dir.path().join("on")),
            analytics_reporting: true,
        });
        reporting.add_stack(stack_with_resource("demo")).unwrap();
        let assembly = reporting.synth().unwrap();
        assert!(assembly.stack("demo").unwrap().template()["Metadata"].is_object());

        let mut silent = App::with_props(AppProps {
            outdir: Some(dir.path().join("off")),
            analytics_reporting: false,
        });
        silent.add_stack(stack_with_resource("demo")).unwrap();
        let assembly = silent.synth().unwrap();
        assert!(assembly.stack("demo").unwrap().template().get("Metadata").is_none());
    }
}
