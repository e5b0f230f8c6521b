//! HTTP server command
//!
//! Runs the division API until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use elections_server::db::{create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
use elections_server::{run_server, ServerConfig};

use crate::config;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "ELECTIONS_BIND", default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides environment and ~/.elections/.env)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Skip schema migrations at startup
    #[arg(long)]
    pub no_migrate: bool,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
            max_connections: self.max_connections,
            migrate_on_start: !self.no_migrate,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = config::database_url(args.database_url.clone())?;
    let server_config = args.server_config();

    tracing::info!("Starting elections server on {}", server_config.bind_addr);

    let pool = create_pool_with_options(&database_url, server_config.max_connections)
        .await
        .context("Failed to create database pool")?;

    // Blocks until shutdown
    run_server(pool, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
