//! Handlers for the worker endpoints.

use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::Json;

use crate::common::{fk_violation_as_not_found, ApiError, JobId, WorkerId};
use crate::domains::jobs::models::Job;
use crate::domains::workers::data::{CreateWorkerRequest, ListWorkersQuery, WorkerData};
use crate::domains::workers::models::Worker;
use crate::server::app::AppState;

/// POST /workers/
pub async fn create_worker(
    Extension(state): Extension<AppState>,
    Json(payload): Json<CreateWorkerRequest>,
) -> Result<(StatusCode, Json<WorkerData>), ApiError> {
    let new_worker = payload.validate()?;

    if let Some(job_id) = new_worker.job_id {
        Job::find_by_id(job_id, &state.db_pool)
            .await?
            .ok_or_else(|| ApiError::not_found("Job", job_id))?;
    }

    let worker = match Worker::create(&new_worker, &state.db_pool).await {
        Ok(worker) => worker,
        Err(error) => {
            // The job can disappear between the check above and the insert;
            // the resulting foreign-key failure is still "job not found".
            let job_id = new_worker.job_id.map(i64::from).unwrap_or_default();
            return Err(fk_violation_as_not_found(error, "Job", job_id));
        }
    };

    tracing::debug!(worker_id = %worker.id, "worker created");
    Ok((StatusCode::CREATED, Json(WorkerData::from(worker))))
}

/// GET /workers/
pub async fn list_workers(
    Extension(state): Extension<AppState>,
    Query(query): Query<ListWorkersQuery>,
) -> Result<Json<Vec<WorkerData>>, ApiError> {
    let filter = query.validate()?;
    let workers = Worker::list(&filter, &state.db_pool).await?;
    Ok(Json(workers.into_iter().map(WorkerData::from).collect()))
}

/// PUT /workers/{worker_id}/assign/{job_id}
pub async fn assign_worker(
    Extension(state): Extension<AppState>,
    Path((worker_id, job_id)): Path<(WorkerId, JobId)>,
) -> Result<Json<WorkerData>, ApiError> {
    Worker::find_by_id(worker_id, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::not_found("Worker", worker_id))?;
    Job::find_by_id(job_id, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::not_found("Job", job_id))?;

    let worker = Worker::assign(worker_id, job_id, &state.db_pool)
        .await
        .map_err(|error| fk_violation_as_not_found(error, "Job", i64::from(job_id)))?;

    tracing::debug!(worker_id = %worker.id, job_id = %job_id, "worker assigned");
    Ok(Json(WorkerData::from(worker)))
}

/// DELETE /workers/{worker_id}/assign
pub async fn unassign_worker(
    Extension(state): Extension<AppState>,
    Path(worker_id): Path<WorkerId>,
) -> Result<Json<WorkerData>, ApiError> {
    Worker::find_by_id(worker_id, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::not_found("Worker", worker_id))?;

    Worker::unassign(worker_id, &state.db_pool).await?;

    let worker = Worker::find_by_id(worker_id, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::not_found("Worker", worker_id))?;
    Ok(Json(WorkerData::from(worker)))
}

/// DELETE /workers/{worker_id}
pub async fn delete_worker(
    Extension(state): Extension<AppState>,
    Path(worker_id): Path<WorkerId>,
) -> Result<Json<WorkerData>, ApiError> {
    let worker = Worker::delete(worker_id, &state.db_pool)
        .await?
        .ok_or_else(|| ApiError::not_found("Worker", worker_id))?;
    tracing::debug!(worker_id = %worker.id, "worker deleted");
    Ok(Json(WorkerData::from(worker)))
}
