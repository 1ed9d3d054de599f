//! CloudFormation stack lifecycle operations.

use crate::config::{AwsConfig, CredentialsSource};
use crate::error::{AwsError, Result};
use aws_sdk_cloudformation::Client;
use aws_sdk_cloudformation::error::ProvideErrorMetadata;
use aws_sdk_cloudformation::types::Stack;
use std::time::Duration;
use tracing::{debug, info, warn};

/// How often the provider is polled while an operation is in flight.
const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// One provider-reported stack output.
#[derive(Debug, Clone)]
pub struct StackOutput {
    /// Output key, e.g. `OpenSearchEndpoint`.
    pub key: String,
    /// Resolved value.
    pub value: String,
    /// Declared description.
    pub description: Option<String>,
}

/// Result of a deploy operation.
#[derive(Debug, Clone)]
pub struct DeployOutcome {
    /// Stack name.
    pub stack_name: String,
    /// Terminal stack status.
    pub status: String,
    /// Provider-reported outputs.
    pub outputs: Vec<StackOutput>,
    /// The deployed template already matched; nothing was changed.
    pub no_changes: bool,
}

/// Client for the provider's stack lifecycle API.
///
/// Submits synthesized templates and polls until the provider reports a
/// terminal status. Failure classification stays with the provider; a
/// failed operation surfaces as the reported status plus reason.
pub struct CloudFormationClient {
    client: Client,
}

impl CloudFormationClient {
    /// Create a client from configuration.
    pub async fn new(config: AwsConfig) -> Result<Self> {
        let sdk_config = build_sdk_config(&config).await;

        info!(region = ?sdk_config.region(), "CloudFormation client initialized");

        Ok(Self {
            client: Client::new(&sdk_config),
        })
    }

    /// Create the stack, or update it if it already exists, then wait for
    /// a terminal status and return the stack outputs.
    pub async fn deploy(&self, stack_name: &str, template_body: &str) -> Result<DeployOutcome> {
        let exists = self.describe(stack_name).await?.is_some();

        if exists {
            info!(stack = stack_name, "updating stack");
            let update = self
                .client
                .update_stack()
                .stack_name(stack_name)
                .template_body(template_body)
                .send()
                .await;

            if let Err(err) = update {
                let message = sdk_message(err);
                if message.contains("No updates are to be performed") {
                    info!(stack = stack_name, "no changes to deploy");
                    let stack = self
                        .describe(stack_name)
                        .await?
                        .ok_or_else(|| AwsError::StackNotFound(stack_name.to_string()))?;
                    return Ok(DeployOutcome {
                        stack_name: stack_name.to_string(),
                        status: status_of(&stack),
                        outputs: outputs_of(&stack),
                        no_changes: true,
                    });
                }
                return Err(AwsError::Service(message));
            }
        } else {
            info!(stack = stack_name, "creating stack");
            self.client
                .create_stack()
                .stack_name(stack_name)
                .template_body(template_body)
                .send()
                .await
                .map_err(|err| AwsError::Service(sdk_message(err)))?;
        }

        let stack = self.wait_for_terminal(stack_name).await?;
        Ok(DeployOutcome {
            stack_name: stack_name.to_string(),
            status: status_of(&stack),
            outputs: outputs_of(&stack),
            no_changes: false,
        })
    }

    /// Delete the stack and wait until the provider reports it gone.
    pub async fn destroy(&self, stack_name: &str) -> Result<()> {
        if self.describe(stack_name).await?.is_none() {
            warn!(stack = stack_name, "stack does not exist, nothing to destroy");
            return Ok(());
        }

        info!(stack = stack_name, "deleting stack");
        self.client
            .delete_stack()
            .stack_name(stack_name)
            .send()
            .await
            .map_err(|err| AwsError::Service(sdk_message(err)))?;

        loop {
            let Some(stack) = self.describe(stack_name).await? else {
                info!(stack = stack_name, "stack deleted");
                return Ok(());
            };

            let status = status_of(&stack);
            if status == "DELETE_COMPLETE" {
                info!(stack = stack_name, "stack deleted");
                return Ok(());
            }
            if status.ends_with("IN_PROGRESS") {
                debug!(stack = stack_name, status = %status, "waiting for deletion");
                tokio::time::sleep(POLL_INTERVAL).await;
                continue;
            }
            return Err(AwsError::StackFailed {
                stack: stack_name.to_string(),
                status,
                reason: reason_of(&stack),
            });
        }
    }

    /// Read back the deployed stack's outputs.
    pub async fn outputs(&self, stack_name: &str) -> Result<Vec<StackOutput>> {
        let stack = self
            .describe(stack_name)
            .await?
            .ok_or_else(|| AwsError::StackNotFound(stack_name.to_string()))?;
        Ok(outputs_of(&stack))
    }

    /// The deployed stack's template body, if the stack exists.
    pub async fn get_template(&self, stack_name: &str) -> Result<Option<String>> {
        match self
            .client
            .get_template()
            .stack_name(stack_name)
            .send()
            .await
        {
            Ok(response) => Ok(response.template_body().map(str::to_string)),
            Err(err) => {
                let message = sdk_message(err);
                if message.contains("does not exist") {
                    Ok(None)
                } else {
                    Err(AwsError::Service(message))
                }
            }
        }
    }

    async fn describe(&self, stack_name: &str) -> Result<Option<Stack>> {
        match self
            .client
            .describe_stacks()
            .stack_name(stack_name)
            .send()
            .await
        {
            Ok(response) => Ok(response.stacks().first().cloned()),
            Err(err) => {
                let message = sdk_message(err);
                if message.contains("does not exist") {
                    Ok(None)
                } else {
                    Err(AwsError::Service(message))
                }
            }
        }
    }

    async fn wait_for_terminal(&self, stack_name: &str) -> Result<Stack> {
        loop {
            let stack = self
                .describe(stack_name)
                .await?
                .ok_or_else(|| AwsError::StackNotFound(stack_name.to_string()))?;

            let status = status_of(&stack);
            if status.ends_with("IN_PROGRESS") {
                debug!(stack = stack_name, status = %status, "operation in progress");
                tokio::time::sleep(POLL_INTERVAL).await;
                continue;
            }

            return match status.as_str() {
                "CREATE_COMPLETE" | "UPDATE_COMPLETE" => Ok(stack),
                _ => Err(AwsError::StackFailed {
                    stack: stack_name.to_string(),
                    status,
                    reason: reason_of(&stack),
                }),
            };
        }
    }
}

async fn build_sdk_config(config: &AwsConfig) -> aws_config::SdkConfig {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

    if let Some(region) = &config.region {
        loader = loader.region(aws_config::Region::new(region.clone()));
    }

    match &config.credentials {
        CredentialsSource::Profile(profile) => {
            loader = loader.profile_name(profile);
        }
        CredentialsSource::Explicit {
            access_key_id,
            secret_access_key,
            session_token,
        } => {
            let creds = aws_credential_types::Credentials::new(
                access_key_id,
                secret_access_key,
                session_token.clone(),
                None,
                "explicit",
            );
            loader = loader.credentials_provider(creds);
        }
        CredentialsSource::Auto => {
            // Default credential chain
        }
    }

    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }

    loader.load().await
}

fn sdk_message<E>(err: aws_sdk_cloudformation::error::SdkError<E>) -> String
where
    E: ProvideErrorMetadata + std::fmt::Debug,
{
    let fallback = format!("{err:?}");
    match err {
        aws_sdk_cloudformation::error::SdkError::ServiceError(service_err) => service_err
            .err()
            .message()
            .map(str::to_string)
            .unwrap_or(fallback),
        _ => fallback,
    }
}

fn status_of(stack: &Stack) -> String {
    stack
        .stack_status()
        .map(|status| status.as_str().to_string())
        .unwrap_or_default()
}

fn reason_of(stack: &Stack) -> String {
    stack
        .stack_status_reason()
        .unwrap_or("no reason reported")
        .to_string()
}

fn outputs_of(stack: &Stack) -> Vec<StackOutput> {
    stack
        .outputs()
        .iter()
        .filter_map(|output| {
            Some(StackOutput {
                key: output.output_key()?.to_string(),
                value: output.output_value()?.to_string(),
                description: output.description().map(str::to_string),
            })
        })
        .collect()
}
