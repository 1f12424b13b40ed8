use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::error;

use crate::config::{ConfigError, ConfigSource, EnvConfig};
use crate::transport::{Transport, TransportRequest};

use super::error::ProviderError;
use super::traits::ApiProvider;
use super::{CallContext, CallResult, ProviderResult};

/// Default registry identity for this provider kind.
pub const AGENT_FRAMEWORK_PROVIDER_ID: &str = "agent_framework";

/// Configuration key naming the remote agent to execute.
pub const AGENT_ID_KEY: &str = "AGENT_ID";

/// Envelope sent to the agent execute endpoint. The prompt goes through
/// verbatim; JSON serialization is the only escaping applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteRequest {
    pub parameters: ExecuteParameters,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteParameters {
    pub question: String,
}

impl ExecuteRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            parameters: ExecuteParameters {
                question: question.into(),
            },
        }
    }
}

/// Reply shape of the agent execute endpoint. The protocol does not
/// guarantee any of the nesting, so every level defaults to empty and
/// navigation stays total.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentResponse {
    #[serde(default)]
    pub inference_results: Vec<InferenceResult>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InferenceResult {
    #[serde(default)]
    pub output: Vec<InferenceOutput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InferenceOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "dataAsMap")]
    pub data_as_map: OutputData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default)]
    pub additional_info: JsonValue,
}

impl AgentResponse {
    /// Walk to the first inference result's first output text. An empty
    /// string counts as missing.
    pub fn first_output(&self) -> Option<&str> {
        self.inference_results
            .first()?
            .output
            .first()?
            .data_as_map
            .response
            .as_deref()
            .filter(|response| !response.is_empty())
    }
}

/// Provider that executes a remotely hosted agent through the cluster's ML
/// plugin and surfaces the agent's answer as the model output.
///
/// Holds no per-call state; the configured agent id is resolved again on
/// every call so the provider picks up environment changes between calls.
pub struct AgentFrameworkProvider {
    provider_id: String,
    config: Arc<dyn ConfigSource>,
    transport: Arc<dyn Transport>,
}

impl AgentFrameworkProvider {
    /// Create a provider over the given transport, using the default
    /// identity and the ambient process environment as configuration.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            provider_id: AGENT_FRAMEWORK_PROVIDER_ID.to_string(),
            config: Arc::new(EnvConfig),
            transport,
        }
    }

    /// Override the registry identity.
    pub fn with_id(mut self, provider_id: impl Into<String>) -> Self {
        self.provider_id = provider_id.into();
        self
    }

    /// Replace the configuration source.
    pub fn with_config(mut self, config: Arc<dyn ConfigSource>) -> Self {
        self.config = config;
        self
    }

    fn agent_id(&self) -> Result<String, ConfigError> {
        self.config.require(AGENT_ID_KEY)
    }

    /// One linear attempt: resolve config, post the envelope, extract the
    /// answer. Every failure is a [`ProviderError`] for `call_api` to fold.
    async fn execute(&self, prompt: &str) -> ProviderResult<String> {
        let agent_id = self.agent_id()?;
        let body = serde_json::to_string(&ExecuteRequest::new(prompt))?;
        let request = TransportRequest::post(
            format!("/_plugins/_ml/agents/{}/_execute", agent_id),
            body,
        );

        let response = self.transport.request(&request).await?;
        let parsed: AgentResponse = response.json()?;

        let output = parsed.first_output().ok_or(ProviderError::MissingOutput)?;
        Ok(output.to_string())
    }
}

#[async_trait::async_trait]
impl ApiProvider for AgentFrameworkProvider {
    fn id(&self) -> &str {
        &self.provider_id
    }

    async fn call_api(&self, prompt: &str, _context: Option<&CallContext>) -> CallResult {
        match self.execute(prompt).await {
            Ok(output) => CallResult::output(output),
            Err(err) => {
                error!("Failed to request agent: {}", err);
                CallResult::error(format!("API call error: {}", err))
            }
        }
    }
}
