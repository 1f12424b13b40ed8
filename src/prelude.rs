//! Convenience re-exports for evaluation harnesses wiring up providers.

pub use crate::config::{ConfigSource, EnvConfig, StaticConfig};
pub use crate::error::{Error, Result};
pub use crate::provider::agent_framework::{
    AGENT_FRAMEWORK_PROVIDER_ID, AGENT_ID_KEY, AgentFrameworkProvider,
};
pub use crate::provider::{ApiProvider, CallContext, CallResult};
pub use crate::transport::{
    HttpTransport, Transport, TransportRequest, TransportResponse,
};
