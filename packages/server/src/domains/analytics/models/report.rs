use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;
use sqlx::PgPool;

use crate::domains::jobs::models::JobStatus;

/// Bucket name for jobs without a status.
const UNSPECIFIED: &str = "Unspecified";

/// Aggregate snapshot of the current jobs and workers tables.
///
/// Recomputed from the table contents on every call; there is no caching
/// and no staleness window. The status buckets are always present, even at
/// zero; role buckets exist only for roles actually present.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsReport {
    pub total_jobs: i64,
    pub jobs_by_status: BTreeMap<String, i64>,
    pub total_workers: i64,
    pub workers_by_role: BTreeMap<String, i64>,
}

impl AnalyticsReport {
    pub async fn compute(pool: &PgPool) -> Result<Self> {
        let (total_jobs,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM jobs")
            .fetch_one(pool)
            .await?;

        let mut jobs_by_status: BTreeMap<String, i64> = JobStatus::ALL
            .iter()
            .map(|status| (status.as_str().to_string(), 0))
            .collect();
        jobs_by_status.insert(UNSPECIFIED.to_string(), 0);

        let status_counts: Vec<(Option<JobStatus>, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM jobs GROUP BY status")
                .fetch_all(pool)
                .await?;
        for (status, count) in status_counts {
            let bucket = match status {
                Some(status) => status.as_str().to_string(),
                None => UNSPECIFIED.to_string(),
            };
            jobs_by_status.insert(bucket, count);
        }

        let (total_workers,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM workers")
            .fetch_one(pool)
            .await?;

        let role_counts: Vec<(String, i64)> =
            sqlx::query_as("SELECT role, COUNT(*) FROM workers GROUP BY role")
                .fetch_all(pool)
                .await?;
        let workers_by_role = role_counts.into_iter().collect();

        Ok(Self {
            total_jobs,
            jobs_by_status,
            total_workers,
            workers_by_role,
        })
    }
}
