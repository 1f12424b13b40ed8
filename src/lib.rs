//! Provider adapter for evaluating remotely hosted ML agents.
//!
//! The evaluation framework drives an [`provider::ApiProvider`]; the
//! [`provider::AgentFrameworkProvider`] implementation forwards each prompt
//! to an agent hosted behind a search cluster's ML plugin and extracts the
//! agent's answer from the execute reply. Everything below the provider goes
//! through the [`transport::Transport`] seam, so tests and alternative
//! clients can swap the wire layer out.

pub mod config;
pub mod error;
pub mod prelude;
pub mod provider;
pub mod transport;

pub use provider::agent_framework::AgentFrameworkProvider;
pub use provider::{ApiProvider, CallContext, CallResult};
pub use transport::HttpTransport;
