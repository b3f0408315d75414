use std::env;

use crate::observability::correlation_paths;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Dotted path into the event payload where the correlation id lives.
    pub correlation_id_path: String,
    /// Whether to include the full event payload in the invocation log.
    pub log_event: bool,
}

impl AppConfig {
    /// Reads configuration from the environment, falling back to the API
    /// Gateway HTTP API defaults when a variable is unset.
    ///
    /// # Errors
    ///
    /// Returns an error when `LOG_EVENT` is set to something other than
    /// `true` or `false`.
    pub fn from_env() -> Result<Self, String> {
        let log_event = match env::var("LOG_EVENT") {
            Ok(v) => v.parse::<bool>().map_err(|e| format!("LOG_EVENT: {}", e))?,
            Err(_) => true,
        };

        Ok(Self {
            correlation_id_path: env::var("CORRELATION_ID_PATH")
                .unwrap_or_else(|_| correlation_paths::API_GATEWAY_HTTP.to_string()),
            log_event,
        })
    }
}
