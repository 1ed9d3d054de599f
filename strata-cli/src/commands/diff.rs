//! Compare the synthesized templates with what is deployed.

use colored::Colorize;
use serde_json::Value;
use std::collections::BTreeSet;

use strata_aws::{AwsConfig, CloudFormationClient};
use strata_cli::app;
use strata_cli::error::CliResult;

/// Template sections worth diffing, in display order.
const SECTIONS: [&str; 4] = ["Parameters", "Rules", "Resources", "Outputs"];

/// What happened to one template element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffKind {
    /// Present locally, not deployed.
    Added,
    /// Deployed, no longer declared.
    Removed,
    /// Present in both with different bodies.
    Changed,
}

/// One difference between the synthesized and deployed templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    /// Template section the element lives in.
    pub section: String,
    /// Logical ID of the element.
    pub logical_id: String,
    /// Kind of difference.
    pub kind: DiffKind,
}

/// Diff every stack against its deployed template.
pub async fn run(aws: AwsConfig) -> CliResult<()> {
    let app = app::build_app(None)?;
    let client = CloudFormationClient::new(aws).await?;

    for stack in app.stacks() {
        let current = stack.to_template()?;
        println!("  {} {}", "Stack".bright_white().bold(), stack.name().cyan());

        let Some(deployed_body) = client.get_template(stack.name()).await? else {
            println!(
                "  {} stack is not deployed; everything below is new",
                "→".yellow()
            );
            print_entries(&diff_templates(&current, &Value::Null));
            continue;
        };

        let deployed: Value = serde_json::from_str(&deployed_body)?;
        let entries = diff_templates(&current, &deployed);
        if entries.is_empty() {
            println!("  {} No differences", "✓".green().bold());
        } else {
            print_entries(&entries);
        }
    }

    Ok(())
}

/// Structural diff between two templates, section by section.
pub fn diff_templates(current: &Value, deployed: &Value) -> Vec<DiffEntry> {
    let mut entries = Vec::new();

    for section in SECTIONS {
        let current_section = current.get(section);
        let deployed_section = deployed.get(section);

        let mut keys = BTreeSet::new();
        for side in [current_section, deployed_section].into_iter().flatten() {
            if let Value::Object(map) = side {
                keys.extend(map.keys().cloned());
            }
        }

        for key in keys {
            let local = current_section.and_then(|s| s.get(&key));
            let remote = deployed_section.and_then(|s| s.get(&key));
            let kind = match (local, remote) {
                (Some(_), None) => DiffKind::Added,
                (None, Some(_)) => DiffKind::Removed,
                (Some(a), Some(b)) if a != b => DiffKind::Changed,
                _ => continue,
            };
            entries.push(DiffEntry {
                section: section.to_string(),
                logical_id: key,
                kind,
            });
        }
    }

    entries
}

fn print_entries(entries: &[DiffEntry]) {
    for entry in entries {
        let (marker, id) = match entry.kind {
            DiffKind::Added => ("+".green().bold(), entry.logical_id.green()),
            DiffKind::Removed => ("-".red().bold(), entry.logical_id.red()),
            DiffKind::Changed => ("~".yellow().bold(), entry.logical_id.yellow()),
        };
        println!("  {} [{}] {}", marker, entry.section.dimmed(), id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identical_templates_have_no_entries() {
        let template = json!({ "Resources": { "A": { "Type": "AWS::SNS::Topic" } } });
        assert!(diff_templates(&template, &template).is_empty());
    }

    #[test]
    fn new_resource_is_added() {
        let current = json!({ "Resources": { "A": { "Type": "AWS::SNS::Topic" } } });
        let entries = diff_templates(&current, &Value::Null);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, DiffKind::Added);
        assert_eq!(entries[0].logical_id, "A");
    }

    #[test]
    fn dropped_output_is_removed() {
        let current = json!({ "Resources": { "A": { "Type": "AWS::SNS::Topic" } } });
        let deployed = json!({
            "Resources": { "A": { "Type": "AWS::SNS::Topic" } },
            "Outputs": { "Arn": { "Value": "x" } },
        });
        let entries = diff_templates(&current, &deployed);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].section, "Outputs");
        assert_eq!(entries[0].kind, DiffKind::Removed);
    }

    #[test]
    fn modified_properties_are_changed() {
        let current = json!({
            "Resources": { "A": { "Type": "AWS::SNS::Topic", "Properties": { "TopicName": "a" } } }
        });
        let deployed = json!({
            "Resources": { "A": { "Type": "AWS::SNS::Topic", "Properties": { "TopicName": "b" } } }
        });
        let entries = diff_templates(&current, &deployed);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, DiffKind::Changed);
    }
}
