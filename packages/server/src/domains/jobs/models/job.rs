use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::fmt;
use std::str::FromStr;

use crate::common::JobId;

// =============================================================================
// Enums
// =============================================================================

/// Closed set of job statuses. A job may also carry no status at all, which
/// analytics reports under an "Unspecified" bucket; storage is NULL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_status")]
pub enum JobStatus {
    #[serde(rename = "In Progress")]
    #[sqlx(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    #[sqlx(rename = "Completed")]
    Completed,
    #[serde(rename = "Cancelled")]
    #[sqlx(rename = "Cancelled")]
    Cancelled,
}

impl JobStatus {
    pub const ALL: [JobStatus; 3] = [
        JobStatus::InProgress,
        JobStatus::Completed,
        JobStatus::Cancelled,
    ];

    /// Wire and storage spelling of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::InProgress => "In Progress",
            JobStatus::Completed => "Completed",
            JobStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = ();

    // Case-sensitive: only the three enumerated spellings are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "In Progress" => Ok(JobStatus::InProgress),
            "Completed" => Ok(JobStatus::Completed),
            "Cancelled" => Ok(JobStatus::Cancelled),
            _ => Err(()),
        }
    }
}

/// Whitelisted sort columns for job listings. Only these spellings are ever
/// interpolated into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    StartDate,
    Customer,
    Status,
}

impl SortField {
    fn column(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::StartDate => "start_date",
            SortField::Customer => "customer",
            SortField::Status => "status",
        }
    }
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "start_date" => Ok(SortField::StartDate),
            "customer" => Ok(SortField::Customer),
            "status" => Ok(SortField::Status),
            _ => Err(()),
        }
    }
}

/// Requested ordering for a job listing.
#[derive(Debug, Clone, Copy)]
pub struct JobSort {
    pub field: SortField,
    pub descending: bool,
}

impl JobSort {
    /// ORDER BY clause for this sort, tie-broken by id so the order is
    /// stable across equal keys.
    pub fn order_by(&self) -> String {
        let direction = if self.descending { "DESC" } else { "ASC" };
        format!("{} {}, id ASC", self.field.column(), direction)
    }
}

/// Stable default order when no sort is requested.
pub const DEFAULT_ORDER: &str = "id ASC";

// =============================================================================
// Job Model
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: JobId,
    pub name: String,
    pub customer: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<JobStatus>,
}

/// Validated creation input for a job.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub name: String,
    pub customer: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<JobStatus>,
}

/// Filters for job listings. All bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub keyword: Option<String>,
    pub status: Option<JobStatus>,
    pub start_after: Option<NaiveDate>,
    pub end_before: Option<NaiveDate>,
}

// =============================================================================
// Job Queries
// =============================================================================

impl Job {
    pub async fn create(new_job: &NewJob, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO jobs (name, customer, start_date, end_date, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&new_job.name)
        .bind(&new_job.customer)
        .bind(new_job.start_date)
        .bind(new_job.end_date)
        .bind(new_job.status)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_by_id(id: JobId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// List jobs matching the filter. `keyword` matches name or customer,
    /// case-insensitively. Sorting falls back to id ascending when no sort
    /// is requested.
    pub async fn list(filter: &JobFilter, sort: Option<JobSort>, pool: &PgPool) -> Result<Vec<Self>> {
        let order_by = sort
            .map(|s| s.order_by())
            .unwrap_or_else(|| DEFAULT_ORDER.to_string());
        let query = format!(
            r#"
            SELECT * FROM jobs
            WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%' OR customer ILIKE '%' || $1 || '%')
              AND ($2::job_status IS NULL OR status = $2)
              AND ($3::date IS NULL OR start_date >= $3)
              AND ($4::date IS NULL OR end_date <= $4)
            ORDER BY {order_by}
            "#,
        );
        sqlx::query_as::<_, Self>(&query)
            .bind(filter.keyword.as_deref())
            .bind(filter.status)
            .bind(filter.start_after)
            .bind(filter.end_before)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Deletes the job. The store cascade removes the job's assignment rows
    /// in the same statement; assigned workers are left in place,
    /// unassigned.
    pub async fn delete(id: JobId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("DELETE FROM jobs WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }
}
