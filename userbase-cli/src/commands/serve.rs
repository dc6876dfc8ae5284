//! HTTP server command
//!
//! Connects to the database first (bounded retries); the listener only
//! starts once a handle is held. Exhausting the retries exits non-zero.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use userbase_server::db::config::DEFAULT_DB_HOST;
use userbase_server::db::manager::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_INTERVAL,
};
use userbase_server::{run_server, ConnectionManager, DbConfig, RetryPolicy, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "BIND_ADDR", default_value = "0.0.0.0:5000")]
    pub bind: SocketAddr,

    /// Database host (credentials and database name are fixed)
    #[arg(long, env = "DB_HOST", default_value = DEFAULT_DB_HOST)]
    pub db_host: String,

    /// Full database URL, overrides --db-host
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Connection attempts before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub connect_attempts: u32,

    /// Seconds to sleep between failed attempts
    #[arg(long, default_value_t = DEFAULT_RETRY_INTERVAL.as_secs())]
    pub retry_interval_secs: u64,

    /// Per-attempt connect timeout in seconds
    #[arg(long, default_value_t = DEFAULT_CONNECT_TIMEOUT.as_secs())]
    pub connect_timeout_secs: u64,
}

impl ServeArgs {
    fn database_url(&self) -> String {
        self.database_url
            .clone()
            .unwrap_or_else(|| DbConfig::new(&self.db_host).url())
    }

    fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.connect_attempts,
            interval: Duration::from_secs(self.retry_interval_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db = ConnectionManager::new(args.database_url(), args.retry_policy());

    db.connect()
        .await
        .context("Cannot start app without DB connection")?;

    tracing::info!("Starting userbase server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Run server (blocks until shutdown)
    run_server(db, config).await.context("Server error")?;

    Ok(())
}
