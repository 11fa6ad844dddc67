use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{JobId, WorkerId};

/// A worker. The job link is not a column on the workers table: it is
/// derived from the assignment mapping, so every select joins through
/// `job_assignments`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    pub role: String,
    pub job_id: Option<JobId>,
}

/// A row in the job/worker assignment mapping. `worker_id` is the primary
/// key: a worker holds at most one assignment, and reassignment rewrites
/// the row in place.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Assignment {
    pub worker_id: WorkerId,
    pub job_id: JobId,
    pub assigned_at: DateTime<Utc>,
}

/// Validated creation input for a worker.
#[derive(Debug, Clone)]
pub struct NewWorker {
    pub name: String,
    pub role: String,
    pub job_id: Option<JobId>,
}

/// Filters for worker listings. Name and role match as case-insensitive
/// substrings; job_id matches exactly.
#[derive(Debug, Clone, Default)]
pub struct WorkerFilter {
    pub name: Option<String>,
    pub role: Option<String>,
    pub job_id: Option<JobId>,
}

const SELECT_WORKER: &str = r#"
    SELECT w.id, w.name, w.role, a.job_id
    FROM workers w
    LEFT JOIN job_assignments a ON a.worker_id = w.id
"#;

// =============================================================================
// Worker Queries
// =============================================================================

impl Worker {
    /// Creates the worker and, when a job link is given, the assignment row
    /// in the same transaction. A missing job surfaces as a foreign-key
    /// failure from the store.
    pub async fn create(new_worker: &NewWorker, pool: &PgPool) -> Result<Self> {
        let mut tx = pool.begin().await?;

        let (id,): (WorkerId,) =
            sqlx::query_as("INSERT INTO workers (name, role) VALUES ($1, $2) RETURNING id")
                .bind(&new_worker.name)
                .bind(&new_worker.role)
                .fetch_one(&mut *tx)
                .await?;

        if let Some(job_id) = new_worker.job_id {
            sqlx::query("INSERT INTO job_assignments (worker_id, job_id) VALUES ($1, $2)")
                .bind(id)
                .bind(job_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(Self {
            id,
            name: new_worker.name.clone(),
            role: new_worker.role.clone(),
            job_id: new_worker.job_id,
        })
    }

    pub async fn find_by_id(id: WorkerId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(&format!("{SELECT_WORKER} WHERE w.id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn list(filter: &WorkerFilter, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(&format!(
            r#"
            {SELECT_WORKER}
            WHERE ($1::text IS NULL OR w.name ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR w.role ILIKE '%' || $2 || '%')
              AND ($3::bigint IS NULL OR a.job_id = $3)
            ORDER BY w.id
            "#
        ))
        .bind(filter.name.as_deref())
        .bind(filter.role.as_deref())
        .bind(filter.job_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Workers assigned to a job. Callers are responsible for checking that
    /// the job itself exists.
    pub async fn find_for_job(job_id: JobId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(&format!(
            "{SELECT_WORKER} WHERE a.job_id = $1 ORDER BY w.id"
        ))
        .bind(job_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Batch variant used to embed workers into job listings without a
    /// per-job query.
    pub async fn find_for_jobs(job_ids: &[JobId], pool: &PgPool) -> Result<Vec<Self>> {
        if job_ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw_ids: Vec<i64> = job_ids.iter().map(|id| i64::from(*id)).collect();
        sqlx::query_as::<_, Self>(&format!(
            "{SELECT_WORKER} WHERE a.job_id = ANY($1) ORDER BY w.id"
        ))
        .bind(&raw_ids)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Rewrites the worker's assignment in one transaction. The mapping
    /// upsert replaces any existing row, so reassignment and first
    /// assignment are the same operation.
    pub async fn assign(worker_id: WorkerId, job_id: JobId, pool: &PgPool) -> Result<Self> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO job_assignments (worker_id, job_id)
            VALUES ($1, $2)
            ON CONFLICT (worker_id) DO UPDATE
            SET job_id = EXCLUDED.job_id, assigned_at = now()
            "#,
        )
        .bind(worker_id)
        .bind(job_id)
        .execute(&mut *tx)
        .await?;

        let worker = sqlx::query_as::<_, Self>(&format!("{SELECT_WORKER} WHERE w.id = $1"))
            .bind(worker_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(worker)
    }

    /// Removes the worker's assignment row, if any.
    pub async fn unassign(worker_id: WorkerId, pool: &PgPool) -> Result<()> {
        sqlx::query("DELETE FROM job_assignments WHERE worker_id = $1")
            .bind(worker_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Deletes the worker; its assignment row goes with it via the store
    /// cascade.
    pub async fn delete(id: WorkerId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            "DELETE FROM workers WHERE id = $1 RETURNING id, name, role, NULL::bigint AS job_id",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }
}

// =============================================================================
// Assignment Queries
// =============================================================================

impl Assignment {
    /// The worker's current mapping row, if any.
    pub async fn find_for_worker(worker_id: WorkerId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM job_assignments WHERE worker_id = $1")
            .bind(worker_id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }
}
