/// receive-webhooks - A Lambda entry point that adapts API Gateway invocations
/// into calls against an internal webhook router.
///
/// This crate implements the receiving half of a webhook pipeline:
/// 1. An entry adapter that accepts the raw Lambda invocation and delegates it
/// 2. A router that matches the request path/method to a registered handler
/// 3. An observability wrapper that logs and traces each invocation
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - lambda_runtime for the invocation boundary
/// - tracing/tracing-subscriber for structured JSON logs and spans
/// - Tokio for async runtime
///
/// The adapter itself performs no validation or transformation of the payload.
/// Whatever the router produces is returned to the platform unchanged, and any
/// fault raised during routing propagates to the Lambda failure path.
///
/// # Example
///
/// ```no_run
/// use receive_webhooks::adapter::EntryAdapter;
/// use receive_webhooks::observability::{Observed, ObservabilityOptions, correlation_paths};
/// use receive_webhooks::router::Router;
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() -> Result<(), lambda_runtime::Error> {
///     // Set up structured logging
///     receive_webhooks::setup_logging();
///
///     // Register application routes
///     let mut router = Router::new();
///     router.route("POST", "/webhook", |_event, _context| async move {
///         Ok(json!({ "statusCode": 200, "body": "{}" }))
///     });
///
///     // Compose logging/tracing around the router, then hand the adapter
///     // to the Lambda runtime
///     let observed = Observed::new(
///         router,
///         ObservabilityOptions {
///             correlation_id_path: correlation_paths::API_GATEWAY_HTTP.to_string(),
///             log_event: true,
///         },
///     );
///     let adapter = EntryAdapter::new(observed);
///     let adapter = &adapter;
///
///     lambda_runtime::run(lambda_runtime::service_fn(move |event| adapter.handle(event))).await
/// }
/// ```
// Module declarations
pub mod adapter;
pub mod core;
pub mod errors;
pub mod observability;
pub mod router;
pub mod routes;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG` when set (defaulting
/// to `info` otherwise). It should be called once at process startup, before
/// the Lambda runtime starts polling for invocations.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// receive_webhooks::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
