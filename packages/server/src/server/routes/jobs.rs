//! Handlers for the job endpoints.

use std::collections::HashMap;

use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::Json;

use crate::common::{ApiError, JobId};
use crate::domains::jobs::data::{CreateJobRequest, JobData, ListJobsQuery};
use crate::domains::jobs::models::Job;
use crate::domains::workers::data::WorkerData;
use crate::domains::workers::models::Worker;
use crate::server::app::AppState;

/// POST /jobs/
pub async fn create_job(
    Extension(state): Extension<AppState>,
    Json(payload): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<JobData>), ApiError> {
    let new_job = payload.validate()?;
    let job = Job::create(&new_job, &state.db_pool).await?;
    tracing::debug!(job_id = %job.id, "job created");
    Ok((StatusCode::CREATED, Json(JobData::from_parts(job, Vec::new()))))
}

/// GET /jobs/
pub async fn list_jobs(
    Extension(state): Extension<AppState>,
    Query(query): Query<ListJobsQuery>,
) -> Result<Json<Vec<JobData>>, ApiError> {
    let (filter, sort) = query.validate()?;
    let jobs = Job::list(&filter, sort, &state.db_pool).await?;

    // One batch query for the workers of every listed job.
    let job_ids: Vec<JobId> = jobs.iter().map(|job| job.id).collect();
    let workers = Worker::find_for_jobs(&job_ids, &state.db_pool).await?;
    let mut by_job: HashMap<JobId, Vec<Worker>> = HashMap::new();
    for worker in workers {
        if let Some(job_id) = worker.job_id {
            by_job.entry(job_id).or_default().push(worker);
        }
    }

    let data = jobs
        .into_iter()
        .map(|job| {
            let assigned = by_job.remove(&job.id).unwrap_or_default();
            JobData::from_parts(job, assigned)
        })
        .collect();

    Ok(Json(data))
}

/// GET /jobs/{id}
pub async fn get_job(
    Extension(state): Extension<AppState>,
    Path(id): Path<JobId>,
) -> Result<Json<JobData>, ApiError> {
    let job = Job::find_by_id(id, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::not_found("Job", id))?;
    let workers = Worker::find_for_job(id, &state.db_pool).await?;
    Ok(Json(JobData::from_parts(job, workers)))
}

/// DELETE /jobs/{id}
///
/// Removes the job and its assignment rows in one atomic statement.
/// Assigned workers are left in place and become unassigned.
pub async fn delete_job(
    Extension(state): Extension<AppState>,
    Path(id): Path<JobId>,
) -> Result<Json<JobData>, ApiError> {
    let job = Job::delete(id, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::not_found("Job", id))?;
    tracing::debug!(job_id = %job.id, "job deleted");
    Ok(Json(JobData::from_parts(job, Vec::new())))
}

/// GET /jobs/{id}/workers/
pub async fn list_job_workers(
    Extension(state): Extension<AppState>,
    Path(id): Path<JobId>,
) -> Result<Json<Vec<WorkerData>>, ApiError> {
    Job::find_by_id(id, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::not_found("Job", id))?;
    let workers = Worker::find_for_job(id, &state.db_pool).await?;
    Ok(Json(workers.into_iter().map(WorkerData::from).collect()))
}
