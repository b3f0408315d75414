use std::error::Error;

use receive_webhooks::errors::RouteError;

#[test]
fn test_route_error_implements_error_trait() {
    // Verify RouteError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = RouteError::Handler("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_route_error_display() {
    // Verify Display implementation works correctly
    let error = RouteError::NotFound {
        method: "POST".to_string(),
        path: "/webhook".to_string(),
    };
    assert_eq!(format!("{error}"), "No route registered for POST /webhook");

    let error = RouteError::MissingPath;
    assert_eq!(format!("{error}"), "Event has no request path");

    let error = RouteError::MissingMethod;
    assert_eq!(format!("{error}"), "Event has no HTTP method");

    let error = RouteError::Handler("connection reset".to_string());
    assert_eq!(format!("{error}"), "Route handler failed: connection reset");
}

#[test]
fn test_route_error_from_anyhow() {
    let err = anyhow::anyhow!("handler blew up");
    let route_err: RouteError = err.into();

    match route_err {
        RouteError::Handler(msg) => assert!(msg.contains("handler blew up")),
        _ => panic!("Unexpected error type"),
    }
}
