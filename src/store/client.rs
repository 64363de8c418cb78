use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::{Client, config};
use tracing::info;

/// Build the DynamoDB client shared by every request.
///
/// Credentials and the rest of the shared configuration come from the default
/// provider chain. When `endpoint` is given (e.g. DynamoDB Local) it replaces
/// the managed regional endpoint.
///
/// ```rust,no_run
/// # async fn example() {
/// let client = orders_api::store::client::connect("us-east-1", Some("http://localhost:8000")).await;
/// # }
/// ```
pub async fn connect(region: &str, endpoint: Option<&str>) -> Client {
    let shared = aws_config::defaults(BehaviorVersion::latest())
        .region(config::Region::new(region.to_owned()))
        .load()
        .await;
    let mut builder = config::Builder::from(&shared);
    if let Some(endpoint) = endpoint {
        info!(endpoint, "using DynamoDB endpoint override");
        builder = builder.endpoint_url(endpoint);
    }
    Client::from_conf(builder.build())
}
