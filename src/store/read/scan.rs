use aws_sdk_dynamodb::{Client, error, operation};

/// Scan operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use orders_api::store::read;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let scan = read::scan::Scan {
///     table_name: "orders".to_string(),
/// };
/// scan.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Scan {
    /// The name of the table to scan.
    pub table_name: String,
}

impl Scan {
    /// Execute the scan operation, returning the first page only.
    #[tracing::instrument(name = "store.scan", level = "debug", skip_all, fields(table = %self.table_name))]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<operation::scan::ScanOutput, error::SdkError<operation::scan::ScanError>> {
        client
            .scan()
            .table_name(self.table_name)
            .send()
            .await
    }
}
