pub mod data;
pub mod models;

pub use data::{CreateJobRequest, JobData, ListJobsQuery};
pub use models::{Job, JobFilter, JobSort, JobStatus, NewJob, SortField};
