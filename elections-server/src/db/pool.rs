//! PostgreSQL pool for the division store
//!
//! The service runs a handful of short queries per request, so the pool is
//! small and callers wait a bounded time for a free connection.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connections opened when the caller does not say otherwise.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a request waits for a pooled connection before failing.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Sizing and wait limits for the division store pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

impl PoolSettings {
    pub fn with_max_connections(max_connections: u32) -> Self {
        Self {
            max_connections,
            ..Self::default()
        }
    }

    /// Pool options for these settings. A zero connection limit is raised to one.
    pub fn options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections.max(1))
            .acquire_timeout(self.acquire_timeout)
    }

    /// Open the pool, connecting once up front so a bad URL fails at startup.
    pub async fn connect(&self, database_url: &str) -> Result<PgPool, sqlx::Error> {
        tracing::debug!(
            max_connections = self.max_connections,
            acquire_timeout_ms = self.acquire_timeout.as_millis() as u64,
            "opening division store pool"
        );
        self.options().connect(database_url).await
    }
}

/// Open a pool with [`PoolSettings::default`].
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PoolSettings::default().connect(database_url).await
}

/// Open a pool capped at `max_connections`, other settings at their defaults.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PoolSettings::with_max_connections(max_connections)
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_carry_settings() {
        let settings = PoolSettings {
            max_connections: 12,
            acquire_timeout: Duration::from_millis(250),
        };
        let options = settings.options();
        assert_eq!(options.get_max_connections(), 12);
        assert_eq!(options.get_acquire_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn zero_connection_limit_is_raised() {
        let options = PoolSettings::with_max_connections(0).options();
        assert_eq!(options.get_max_connections(), 1);
        assert_eq!(options.get_acquire_timeout(), DEFAULT_ACQUIRE_TIMEOUT);
    }

    #[tokio::test]
    async fn unreachable_database_fails_within_timeout() {
        // Nothing listens on port 1
        let settings = PoolSettings {
            max_connections: 1,
            acquire_timeout: Duration::from_millis(500),
        };
        let result = tokio::time::timeout(
            Duration::from_secs(10),
            settings.connect("postgres://elections@127.0.0.1:1/elections"),
        )
        .await
        .expect("connect did not give up");
        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_runs_queries() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        let (one,): (i32,) = sqlx::query_as("SELECT 1").fetch_one(&pool).await.unwrap();
        assert_eq!(one, 1);
    }
}
