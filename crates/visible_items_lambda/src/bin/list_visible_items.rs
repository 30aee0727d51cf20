use lambda_http::{run, service_fn, Error, Request};
use tracing::debug;
use visible_items_lambda::adapters::dynamodb::DynamoItemStore;
use visible_items_lambda::config::HandlerConfig;
use visible_items_lambda::handlers::http::handle_request;
use visible_items_lambda::logging;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();

    // Route on the resource path, not the stage-prefixed one.
    std::env::set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    let config = HandlerConfig::from_env()?;
    debug!(
        table = %config.table_name,
        cors_origin = %config.cors.allow_origin(),
        base_path = %config.router.base_path(),
        "configuration resolved"
    );

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = DynamoItemStore::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        config.table_name.clone(),
    );

    let config = &config;
    let store = &store;
    run(service_fn(move |request: Request| async move {
        Ok::<_, Error>(handle_request(&request, config, store))
    }))
    .await
}
