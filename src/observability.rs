//! Invocation logging and tracing, composed around the routing component.
//!
//! Rather than wrapping the handler function with decorators or relying on
//! process-wide singletons, this module provides [`Observed`], a resolver
//! that wraps another resolver: it opens a span for the invocation, emits one
//! structured log record carrying the correlation id, calls the inner
//! resolver, and returns its result untouched.

use async_trait::async_trait;
use lambda_runtime::Context;
use serde_json::Value;
use tracing::{Instrument, info, info_span};

use crate::errors::RouteError;
use crate::router::Resolver;

/// Well-known correlation-id locations within platform event payloads.
///
/// The paths are dotted key sequences evaluated against the raw event by
/// [`extract_correlation_id`].
pub mod correlation_paths {
    /// API Gateway HTTP APIs (payload format v2).
    pub const API_GATEWAY_HTTP: &str = "requestContext.requestId";
    /// API Gateway REST APIs.
    pub const API_GATEWAY_REST: &str = "requestContext.requestId";
    /// Application Load Balancer targets, which carry the trace id in a header.
    pub const APPLICATION_LOAD_BALANCER: &str = "headers.x-amzn-trace-id";
}

/// Walks a dotted key path into the event and returns the string at the end.
///
/// Returns `None` if any key along the path is absent or the final value is
/// not a string.
#[must_use]
pub fn extract_correlation_id<'a>(event: &'a Value, path: &str) -> Option<&'a str> {
    let mut current = event;
    for key in path.split('.') {
        current = current.get(key)?;
    }
    current.as_str()
}

/// How an [`Observed`] wrapper logs each invocation.
#[derive(Debug, Clone)]
pub struct ObservabilityOptions {
    /// Dotted path into the event where the correlation id lives. When the
    /// path yields nothing, the platform-assigned request id is used instead.
    pub correlation_id_path: String,
    /// Whether to include the full event payload in the invocation log record.
    pub log_event: bool,
}

/// A resolver that delegates to `inner`, surrounding each call with one
/// tracing span and one structured log record.
pub struct Observed<R> {
    inner: R,
    options: ObservabilityOptions,
}

impl<R: Resolver> Observed<R> {
    #[must_use]
    pub fn new(inner: R, options: ObservabilityOptions) -> Self {
        Self { inner, options }
    }
}

#[async_trait]
impl<R: Resolver> Resolver for Observed<R> {
    async fn resolve(&self, event: &Value, context: &Context) -> Result<Value, RouteError> {
        let correlation_id = extract_correlation_id(event, &self.options.correlation_id_path)
            .unwrap_or(&context.request_id);

        let span = info_span!(
            "invocation",
            correlation_id = %correlation_id,
            request_id = %context.request_id,
        );

        async {
            if self.options.log_event {
                info!(event = %event, "Received invocation");
            } else {
                info!("Received invocation");
            }
            self.inner.resolve(event, context).await
        }
        .instrument(span)
        .await
    }
}
