use super::{CallContext, CallResult};

/// Contract the evaluation framework drives providers through. A provider
/// owns a stable identity inside the host registry and answers prompts one
/// at a time; the host may run many `call_api` invocations concurrently.
#[async_trait::async_trait]
pub trait ApiProvider: Send + Sync {
    /// Identity of this provider among the registered ones. Pure, never fails.
    fn id(&self) -> &str;

    /// Run a single prompt and resolve to a [`CallResult`].
    ///
    /// This must never surface a failure to the caller: configuration,
    /// transport, and response-shape problems are all folded into the error
    /// variant of the result.
    async fn call_api(&self, prompt: &str, context: Option<&CallContext>) -> CallResult;
}
