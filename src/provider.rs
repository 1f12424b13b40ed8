pub mod agent_framework;
pub mod error;
pub mod traits;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

pub use agent_framework::AgentFrameworkProvider;
pub use traits::ApiProvider;

/// Outcome of a single provider call: either the model output or a rendered
/// error description, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CallResult {
    Output { output: String },
    Error { error: String },
}

impl CallResult {
    pub fn output(output: impl Into<String>) -> Self {
        CallResult::Output {
            output: output.into(),
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        CallResult::Error {
            error: error.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, CallResult::Error { .. })
    }

    /// The output string, if this call succeeded.
    pub fn as_output(&self) -> Option<&str> {
        match self {
            CallResult::Output { output } => Some(output),
            CallResult::Error { .. } => None,
        }
    }

    /// The error description, if this call failed.
    pub fn as_error(&self) -> Option<&str> {
        match self {
            CallResult::Output { .. } => None,
            CallResult::Error { error } => Some(error),
        }
    }
}

/// Per-call variables handed through by the evaluation framework. Values may
/// be plain strings or structured objects, so they are kept as raw JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallContext {
    #[serde(default)]
    pub vars: HashMap<String, JsonValue>,
}

/// Result type for provider-internal operations.
pub type ProviderResult<T> = std::result::Result<T, error::ProviderError>;
