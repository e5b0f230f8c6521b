//! Apply the division schema without starting the server

use anyhow::{Context, Result};
use clap::Parser;

use elections_server::db::{create_pool, migrations};

use crate::config;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides environment and ~/.elections/.env)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = config::database_url(args.database_url)?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Migrations failed")?;

    pool.close().await;
    Ok(())
}
