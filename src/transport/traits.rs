use std::sync::Arc;
use futures::future::BoxFuture;
use super::{TransportRequest, TransportResponse, TransportResult};

/// Convert a concrete T into an `Arc<dyn Transport>`.
/// Convenience so callers can do `transport_to_arc_dyn(HttpTransport::new(...))`.
pub fn transport_to_arc_dyn<T>(transport: T) -> Arc<dyn Transport>
where
    T: 'static + Transport,
{
    Arc::new(transport)
}

/// Core transport trait. Uses BoxFuture with an explicit lifetime so
/// implementations can borrow the `&TransportRequest` instead of cloning it.
///
/// Note:
/// - Implementations are expected to be shareable across many concurrent
///   in-flight requests; the trait takes `&self` and holds no locks here.
/// - Connection handling, timeouts, and retries all live behind this seam.
pub trait Transport: Send + Sync {
    /// Issue a single request. The returned future may borrow from `request`.
    fn request<'a>(
        &'a self,
        request: &'a TransportRequest,
    ) -> BoxFuture<'a, TransportResult<TransportResponse>>;
}
