//! Schema migrations for the division tables
//!
//! Idempotent: every statement is `IF NOT EXISTS`, so this runs on each start.

use sqlx::PgPool;

/// Run all migrations
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running division migrations...");

    // Modules group divisions
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS modules (
            id TEXT PRIMARY KEY,
            name TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // An election runs under one module and inherits its divisions
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS elections (
            id TEXT PRIMARY KEY,
            name TEXT,
            module_id TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // No FK on module_id: batches may arrive before their module is registered.
    // seq keeps insertion order within a batch, where created_at is shared.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS divisions (
            id TEXT PRIMARY KEY,
            seq BIGSERIAL NOT NULL,
            name TEXT,
            code TEXT,
            no_of_candidates BIGINT,
            module_id TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Tables created before seq existed
    sqlx::query("ALTER TABLE divisions ADD COLUMN IF NOT EXISTS seq BIGSERIAL NOT NULL")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS nominations (
            id TEXT PRIMARY KEY,
            election_id TEXT NOT NULL REFERENCES elections(id) ON DELETE CASCADE,
            team_id TEXT NOT NULL,
            division_id TEXT NOT NULL REFERENCES divisions(id) ON DELETE CASCADE,
            status TEXT NOT NULL DEFAULT 'NEW',
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_divisions_module ON divisions(module_id)")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_nominations_election_team ON nominations(election_id, team_id)",
    )
    .execute(pool)
    .await?;

    tracing::info!("Division migrations complete");
    Ok(())
}
