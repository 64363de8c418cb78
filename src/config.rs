use clap::Parser;

/// How the service receives requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// Long-running HTTP listener.
    Local,
    /// Function invoked by the managed gateway.
    Hosted,
}

impl From<&str> for RunMode {
    fn from(app_env: &str) -> Self {
        match app_env {
            "local" => Self::Local,
            _ => Self::Hosted,
        }
    }
}

/// Orders API configuration
#[derive(Clone, Debug, Parser)]
#[command(name = "orders-api", about = "Orders API server", long_about = None)]
pub struct Config {
    /// Listen port in local mode
    #[arg(short, long, env = "APP_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Region of the DynamoDB tables
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// Alternative DynamoDB endpoint, e.g. DynamoDB Local
    #[arg(long, env = "DYNAMODB_ENDPOINT")]
    pub dynamodb_endpoint: Option<String>,

    /// Orders table
    #[arg(long, env = "TABLE_ORDERS", default_value = "orders")]
    pub orders_table: String,

    /// Order items table
    #[arg(long, env = "TABLE_ORDER_ITEMS", default_value = "order_items")]
    pub order_items_table: String,

    /// `local` runs an HTTP listener, anything else runs as a function
    #[arg(long, env = "APP_ENV", default_value = "local")]
    pub app_env: String,

    /// Log filter (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from `.env`, the environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // a missing .env is fine
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Transport selected by `APP_ENV`.
    pub fn run_mode(&self) -> RunMode {
        RunMode::from(self.app_env.as_str())
    }

    /// Endpoint override, `None` when unset or empty.
    pub fn store_endpoint(&self) -> Option<&str> {
        self.dynamodb_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|endpoint| !endpoint.is_empty())
    }
}
