//! Webhook route registration.

use serde_json::{Value, json};
use tracing::info;

use crate::router::Router;

/// Registers the webhook receiver's routes on the router.
///
/// The acknowledgment handler returns a 200 with an empty JSON body so the
/// sender stops retrying; downstream processing of the payload belongs to
/// the consumers behind this receiver, not here.
pub fn register_webhook_routes(router: &mut Router) {
    router.route("POST", "/webhook", |event, _context| async move {
        let body_len = event
            .get("body")
            .and_then(Value::as_str)
            .map_or(0, str::len);
        info!(body_len, "Webhook received");
        Ok(json!({ "statusCode": 200, "body": "{}" }))
    });
}
