//! Route registration and resolution for inbound webhook events.
//!
//! The router owns the mapping from HTTP method + path to a registered
//! handler. The entry adapter depends only on the [`Resolver`] seam, so tests
//! (and future deployments with a different routing strategy) can swap the
//! routing component without touching the adapter.

use async_trait::async_trait;
use futures::future::BoxFuture;
use lambda_runtime::Context;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use tracing::debug;

use crate::errors::RouteError;

/// The routing component capability the entry adapter calls.
///
/// `resolve` produces exactly one response per invocation, or a fault that
/// the adapter propagates to the platform unmodified.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, event: &Value, context: &Context) -> Result<Value, RouteError>;
}

type BoxedHandler =
    Box<dyn Fn(Value, Context) -> BoxFuture<'static, Result<Value, RouteError>> + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RouteKey {
    method: String,
    path: String,
}

impl RouteKey {
    fn new(method: &str, path: &str) -> Self {
        Self {
            method: method.to_ascii_uppercase(),
            path: path.to_string(),
        }
    }
}

/// Dispatches API-Gateway-shaped events to handlers registered by
/// HTTP method and path.
#[derive(Default)]
pub struct Router {
    routes: HashMap<RouteKey, BoxedHandler>,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Registers a handler for the given HTTP method and exact path.
    ///
    /// Methods are matched case-insensitively; registering the same
    /// method/path pair again replaces the previous handler.
    pub fn route<F, Fut>(&mut self, method: &str, path: &str, handler: F)
    where
        F: Fn(Value, Context) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, RouteError>> + Send + 'static,
    {
        let handler: BoxedHandler =
            Box::new(move |event, context| Box::pin(handler(event, context)));
        self.routes.insert(RouteKey::new(method, path), handler);
    }

    /// Number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Extracts the request path from an event.
///
/// API Gateway HTTP APIs (payload v2) put it in `rawPath`; REST APIs and
/// hand-built test events use top-level `path`.
fn event_path(event: &Value) -> Option<&str> {
    event
        .get("rawPath")
        .and_then(Value::as_str)
        .or_else(|| event.get("path").and_then(Value::as_str))
}

/// Extracts the HTTP method from an event.
///
/// Payload v2 nests it under `requestContext.http.method`; REST APIs use
/// `httpMethod`, and hand-built test events use top-level `method`.
fn event_method(event: &Value) -> Option<&str> {
    event
        .get("requestContext")
        .and_then(|rc| rc.get("http"))
        .and_then(|http| http.get("method"))
        .and_then(Value::as_str)
        .or_else(|| event.get("httpMethod").and_then(Value::as_str))
        .or_else(|| event.get("method").and_then(Value::as_str))
}

#[async_trait]
impl Resolver for Router {
    async fn resolve(&self, event: &Value, context: &Context) -> Result<Value, RouteError> {
        let path = event_path(event).ok_or(RouteError::MissingPath)?;
        let method = event_method(event).ok_or(RouteError::MissingMethod)?;

        let key = RouteKey::new(method, path);
        let handler = self.routes.get(&key).ok_or_else(|| RouteError::NotFound {
            method: key.method.clone(),
            path: key.path.clone(),
        })?;

        debug!(%method, %path, "Dispatching to registered route");
        handler(event.clone(), context.clone()).await
    }
}
