//! Wire-facing shaping for the jobs domain: response records and raw
//! request payloads with their validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{check_length, parse_date, ApiError, FieldError, JobId};
use crate::domains::jobs::models::{Job, JobFilter, JobSort, JobStatus, NewJob, SortField};
use crate::domains::workers::data::WorkerData;
use crate::domains::workers::models::Worker;

/// Wire representation of a job, embedding its assigned workers.
#[derive(Debug, Clone, Serialize)]
pub struct JobData {
    pub id: JobId,
    pub name: String,
    pub customer: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<JobStatus>,
    pub workers: Vec<WorkerData>,
}

impl JobData {
    pub fn from_parts(job: Job, workers: Vec<Worker>) -> Self {
        Self {
            id: job.id,
            name: job.name,
            customer: job.customer,
            start_date: job.start_date,
            end_date: job.end_date,
            status: job.status,
            workers: workers.into_iter().map(WorkerData::from).collect(),
        }
    }
}

/// Raw creation payload. `validate` produces a typed record or a
/// field-level validation error, without touching the store.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJobRequest {
    pub name: String,
    pub customer: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl CreateJobRequest {
    pub fn validate(self) -> Result<NewJob, ApiError> {
        let mut errors = Vec::new();

        check_length("name", &self.name, &mut errors);
        check_length("customer", &self.customer, &mut errors);

        let start_date = parse_date("start_date", self.start_date.as_deref(), &mut errors);
        let end_date = parse_date("end_date", self.end_date.as_deref(), &mut errors);
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                errors.push(FieldError::new("end_date", "must not be before start_date"));
            }
        }

        let status = parse_status(self.status.as_deref(), &mut errors);

        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        Ok(NewJob {
            name: self.name,
            customer: self.customer,
            start_date,
            end_date,
            status,
        })
    }
}

/// Raw query string for job listings; validated into a filter and an
/// optional sort.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListJobsQuery {
    pub keyword: Option<String>,
    pub status: Option<String>,
    pub start_after: Option<String>,
    pub end_before: Option<String>,
    pub sort_by: Option<String>,
    #[serde(default)]
    pub desc: bool,
}

impl ListJobsQuery {
    pub fn validate(self) -> Result<(JobFilter, Option<JobSort>), ApiError> {
        let mut errors = Vec::new();

        let status = parse_status(self.status.as_deref(), &mut errors);

        let start_after = parse_date("start_after", self.start_after.as_deref(), &mut errors);
        let end_before = parse_date("end_before", self.end_before.as_deref(), &mut errors);
        if let (Some(start), Some(end)) = (start_after, end_before) {
            if start > end {
                errors.push(FieldError::new("start_after", "must not be after end_before"));
            }
        }

        let sort = match self.sort_by.as_deref() {
            None => None,
            Some(raw) => match raw.parse::<SortField>() {
                Ok(field) => Some(JobSort {
                    field,
                    descending: self.desc,
                }),
                Err(()) => {
                    errors.push(FieldError::new(
                        "sort_by",
                        "must be one of: name, start_date, customer, status",
                    ));
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        let filter = JobFilter {
            keyword: self.keyword.filter(|keyword| !keyword.is_empty()),
            status,
            start_after,
            end_before,
        };
        Ok((filter, sort))
    }
}

fn parse_status(raw: Option<&str>, errors: &mut Vec<FieldError>) -> Option<JobStatus> {
    let raw = raw?;
    match raw.parse::<JobStatus>() {
        Ok(status) => Some(status),
        Err(()) => {
            errors.push(FieldError::new(
                "status",
                "must be one of: In Progress, Completed, Cancelled",
            ));
            None
        }
    }
}
