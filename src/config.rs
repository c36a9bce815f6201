use crate::error::{OrderError, Result};
use crate::infrastructure::http::DEFAULT_PAYMENT_ENDPOINT;
use clap::Args;

/// Runtime settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// SQLite URL. `None` keeps orders in memory for the current run only.
    pub database_url: Option<String>,
    pub payment_url: String,
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            payment_url: DEFAULT_PAYMENT_ENDPOINT.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.payment_url.trim().is_empty() {
            return Err(OrderError::ValidationError(
                "Payment URL must not be empty".to_string(),
            ));
        }
        if let Some(url) = &self.database_url
            && url.trim().is_empty()
        {
            return Err(OrderError::ValidationError(
                "Database URL must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Command-line flags, each with an environment variable fallback.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// SQLite database URL (e.g. sqlite://orders.db). Without it orders live in memory.
    #[arg(long, env = "MINISHOP_DATABASE_URL", global = true)]
    pub database_url: Option<String>,

    /// Endpoint that receives payment charges.
    #[arg(long, env = "MINISHOP_PAYMENT_URL", default_value = DEFAULT_PAYMENT_ENDPOINT, global = true)]
    pub payment_url: String,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, env = "MINISHOP_LOG", default_value = "info", global = true)]
    pub log_level: String,
}

impl From<ConfigArgs> for ServiceConfig {
    fn from(args: ConfigArgs) -> Self {
        Self {
            database_url: args.database_url,
            payment_url: args.payment_url,
            log_level: args.log_level,
        }
    }
}
