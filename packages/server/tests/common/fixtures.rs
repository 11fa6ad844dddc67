//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.

use anyhow::Result;
use server_core::common::{JobId, WorkerId};
use server_core::domains::jobs::models::{Job, JobStatus, NewJob};
use server_core::domains::workers::models::{NewWorker, Worker};
use sqlx::PgPool;

/// Create a test job with just a name and customer.
pub async fn create_test_job(pool: &PgPool, name: &str, customer: &str) -> Result<JobId> {
    create_test_job_full(pool, name, customer, None, None, None).await
}

/// Create a test job with an optional date range and status.
pub async fn create_test_job_full(
    pool: &PgPool,
    name: &str,
    customer: &str,
    start_date: Option<&str>,
    end_date: Option<&str>,
    status: Option<JobStatus>,
) -> Result<JobId> {
    let job = Job::create(
        &NewJob {
            name: name.to_string(),
            customer: customer.to_string(),
            start_date: start_date.map(|d| d.parse().expect("fixture date")),
            end_date: end_date.map(|d| d.parse().expect("fixture date")),
            status,
        },
        pool,
    )
    .await?;

    Ok(job.id)
}

/// Create a test worker, optionally linked to a job.
pub async fn create_test_worker(
    pool: &PgPool,
    name: &str,
    role: &str,
    job_id: Option<JobId>,
) -> Result<WorkerId> {
    let worker = Worker::create(
        &NewWorker {
            name: name.to_string(),
            role: role.to_string(),
            job_id,
        },
        pool,
    )
    .await?;

    Ok(worker.id)
}
