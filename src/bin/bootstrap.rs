use lambda_runtime::{Error, run, service_fn};

use receive_webhooks::adapter::EntryAdapter;
use receive_webhooks::core::config::AppConfig;
use receive_webhooks::observability::{ObservabilityOptions, Observed};
use receive_webhooks::router::Router;
use receive_webhooks::routes;

#[tokio::main]
async fn main() -> Result<(), Error> {
    receive_webhooks::setup_logging();

    let config = AppConfig::from_env().map_err(Error::from)?;

    let mut router = Router::new();
    routes::register_webhook_routes(&mut router);

    let observed = Observed::new(
        router,
        ObservabilityOptions {
            correlation_id_path: config.correlation_id_path,
            log_event: config.log_event,
        },
    );
    let adapter = EntryAdapter::new(observed);
    let adapter = &adapter;

    run(service_fn(move |event| adapter.handle(event))).await
}
