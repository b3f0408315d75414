//! Lambda entry adapter - pure delegation to the routing component.
//!
//! The adapter owns no behavior of its own: it splits the invocation into
//! payload and context, hands both to the resolver it was constructed with,
//! and returns the resolver's response to the platform unchanged. Faults
//! raised during routing propagate to the Lambda invocation-failure path
//! unmodified.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

use crate::router::Resolver;

/// The Lambda-facing entry point.
///
/// Constructed once at process startup with an explicitly-built resolver
/// (typically a [`crate::router::Router`] wrapped in
/// [`crate::observability::Observed`]) and shared read-only across
/// invocations.
pub struct EntryAdapter<R> {
    resolver: R,
}

impl<R: Resolver> EntryAdapter<R> {
    #[must_use]
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Handles one invocation by delegating to the resolver.
    ///
    /// # Errors
    ///
    /// Returns whatever fault the resolver raised, unaltered apart from the
    /// boxing the Lambda runtime's error type requires.
    pub async fn handle(&self, event: LambdaEvent<Value>) -> Result<Value, Error> {
        let (payload, context) = event.into_parts();
        let response = self.resolver.resolve(&payload, &context).await?;
        Ok(response)
    }
}
