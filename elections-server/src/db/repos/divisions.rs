//! Division repository
//!
//! - fetch by election: divisions of the election's module
//! - fetch with nomination: same set, LEFT JOIN with one team's nominations
//! - bulk insert: one transaction per batch

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{DivisionNominationRow, DivisionRecord, DivisionRow, InsertedDivisions};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence operations the division service depends on.
#[async_trait]
pub trait DivisionRepository: Send + Sync {
    /// All divisions attached to the election, in insertion order.
    async fn fetch_divisions_by_election_id(
        &self,
        election_id: &str,
    ) -> Result<Vec<DivisionRow>, DbError>;

    /// Divisions eligible for nomination in the election, with the team's
    /// nominations joined in.
    async fn fetch_divisions_with_nomination(
        &self,
        election_id: &str,
        team_id: &str,
    ) -> Result<Vec<DivisionNominationRow>, DbError>;

    /// Insert a batch of division records.
    async fn insert_divisions_by_module_id(
        &self,
        divisions: Vec<DivisionRecord>,
    ) -> Result<InsertedDivisions, DbError>;
}

/// PostgreSQL-backed division repository
#[derive(Clone)]
pub struct PgDivisionRepo {
    pool: PgPool,
}

impl PgDivisionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DivisionRepository for PgDivisionRepo {
    async fn fetch_divisions_by_election_id(
        &self,
        election_id: &str,
    ) -> Result<Vec<DivisionRow>, DbError> {
        let rows = sqlx::query_as::<_, DivisionRow>(
            r#"
            SELECT d.id, d.name, d.code, d.no_of_candidates, d.module_id
            FROM divisions d
            JOIN elections e ON e.module_id = d.module_id
            WHERE e.id = $1
            ORDER BY d.seq
            "#,
        )
        .bind(election_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn fetch_divisions_with_nomination(
        &self,
        election_id: &str,
        team_id: &str,
    ) -> Result<Vec<DivisionNominationRow>, DbError> {
        // Single query, no N+1: nominations ride along on the division rows
        let rows = sqlx::query_as::<_, DivisionNominationRow>(
            r#"
            SELECT
                d.id,
                d.name,
                d.code,
                d.no_of_candidates,
                d.module_id,
                n.id AS nomination_id,
                n.team_id,
                n.status AS nomination_status
            FROM divisions d
            JOIN elections e ON e.module_id = d.module_id
            LEFT JOIN nominations n
                ON n.division_id = d.id
                AND n.election_id = e.id
                AND n.team_id = $2
            WHERE e.id = $1
            ORDER BY d.seq, n.created_at, n.id
            "#,
        )
        .bind(election_id)
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn insert_divisions_by_module_id(
        &self,
        divisions: Vec<DivisionRecord>,
    ) -> Result<InsertedDivisions, DbError> {
        if divisions.is_empty() {
            return Ok(InsertedDivisions {
                inserted: 0,
                divisions,
            });
        }

        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for division in &divisions {
            let result = sqlx::query(
                r#"
                INSERT INTO divisions (id, name, code, no_of_candidates, module_id)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(&division.id)
            .bind(&division.name)
            .bind(&division.code)
            .bind(division.no_of_candidates)
            .bind(&division.module_id)
            .execute(&mut *tx)
            .await?;

            inserted += result.rows_affected();
        }

        tx.commit().await?;

        Ok(InsertedDivisions {
            inserted,
            divisions,
        })
    }
}
