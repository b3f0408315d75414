use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("No route registered for {method} {path}")]
    NotFound { method: String, path: String },

    #[error("Event has no request path")]
    MissingPath,

    #[error("Event has no HTTP method")]
    MissingMethod,

    #[error("Route handler failed: {0}")]
    Handler(String),
}

impl From<anyhow::Error> for RouteError {
    fn from(error: anyhow::Error) -> Self {
        RouteError::Handler(error.to_string())
    }
}
