//! Synthesized cloud assembly.

use serde_json::Value;
use std::path::{Path, PathBuf};

/// One synthesized stack: its name, template file, and template body.
#[derive(Debug, Clone)]
pub struct StackArtifact {
    stack_name: String,
    template_file: PathBuf,
    template: Value,
}

impl StackArtifact {
    pub(crate) fn new(stack_name: String, template_file: PathBuf, template: Value) -> Self {
        Self {
            stack_name,
            template_file,
            template,
        }
    }

    /// Name of the stack this artifact deploys.
    pub fn stack_name(&self) -> &str {
        &self.stack_name
    }

    /// Path of the written template file.
    pub fn template_file(&self) -> &Path {
        &self.template_file
    }

    /// The rendered template body.
    pub fn template(&self) -> &Value {
        &self.template
    }

    /// The template serialized for the provisioning API.
    pub fn template_body(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.template)
    }
}

/// The synthesized output of an [`crate::App`]: templates plus manifest.
#[derive(Debug, Clone)]
pub struct CloudAssembly {
    directory: PathBuf,
    artifacts: Vec<StackArtifact>,
}

impl CloudAssembly {
    pub(crate) fn new(directory: PathBuf, artifacts: Vec<StackArtifact>) -> Self {
        Self {
            directory,
            artifacts,
        }
    }

    /// Directory the assembly was written into.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// All stack artifacts, in synthesis order.
    pub fn artifacts(&self) -> &[StackArtifact] {
        &self.artifacts
    }

    /// Look up a stack artifact by stack name.
    pub fn stack(&self, name: &str) -> Option<&StackArtifact> {
        self.artifacts.iter().find(|a| a.stack_name() == name)
    }
}
