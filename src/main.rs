use orders_api::{
    config::{Config, RunMode},
    repository::DynamoRepository,
    router, server, store, telemetry,
};

use std::{process, sync::Arc};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = Config::load().unwrap_or_else(|config_error| {
        // --help and --version
        if !config_error.use_stderr() {
            config_error.exit();
        }
        // logging is not up yet
        eprintln!("configuration error: {config_error}");
        process::exit(1);
    });

    let mode = config.run_mode();
    if let Err(init_error) = telemetry::init(&config.log_level, mode) {
        eprintln!("failed to initialise logging: {init_error}");
        process::exit(1);
    }
    info!(
        ?mode,
        region = %config.region,
        orders_table = %config.orders_table,
        order_items_table = %config.order_items_table,
        "starting orders api"
    );

    let client = store::client::connect(&config.region, config.store_endpoint()).await;
    let repository = DynamoRepository::new(client, config.orders_table, config.order_items_table);
    let router = router::build(Arc::new(repository));

    let result = match mode {
        RunMode::Local => server::serve_local(router, config.port).await,
        RunMode::Hosted => server::serve_hosted(router).await,
    };
    if let Err(serve_error) = result {
        error!("{serve_error}");
        process::exit(1);
    }
}
