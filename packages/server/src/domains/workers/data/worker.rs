//! Wire-facing shaping for the workers domain.

use serde::{Deserialize, Serialize};

use crate::common::{check_length, ApiError, JobId, WorkerId};
use crate::domains::workers::models::{NewWorker, Worker, WorkerFilter};

/// Wire representation of a worker.
#[derive(Debug, Clone, Serialize)]
pub struct WorkerData {
    pub id: WorkerId,
    pub name: String,
    pub role: String,
    pub job_id: Option<JobId>,
}

impl From<Worker> for WorkerData {
    fn from(worker: Worker) -> Self {
        Self {
            id: worker.id,
            name: worker.name,
            role: worker.role,
            job_id: worker.job_id,
        }
    }
}

/// Raw creation payload. `validate` produces a typed record or a
/// field-level validation error, without touching the store.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkerRequest {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub job_id: Option<i64>,
}

impl CreateWorkerRequest {
    pub fn validate(self) -> Result<NewWorker, ApiError> {
        let mut errors = Vec::new();

        check_length("name", &self.name, &mut errors);
        check_length("role", &self.role, &mut errors);

        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        Ok(NewWorker {
            name: self.name,
            role: self.role,
            job_id: self.job_id.map(JobId::from_raw),
        })
    }
}

/// Raw query string for worker listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListWorkersQuery {
    pub name: Option<String>,
    pub role: Option<String>,
    pub job_id: Option<String>,
}

impl ListWorkersQuery {
    pub fn validate(self) -> Result<WorkerFilter, ApiError> {
        let job_id = match self.job_id.as_deref() {
            None => None,
            Some(raw) => match raw.parse::<JobId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    return Err(ApiError::invalid_field("job_id", "must be an integer"));
                }
            },
        };

        Ok(WorkerFilter {
            name: self.name.filter(|name| !name.is_empty()),
            role: self.role.filter(|role| !role.is_empty()),
            job_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_payload_produces_typed_record() {
        let request = CreateWorkerRequest {
            name: "Sam".to_string(),
            role: "Carpenter".to_string(),
            job_id: Some(3),
        };

        let new_worker = request.validate().unwrap();
        assert_eq!(new_worker.name, "Sam");
        assert_eq!(new_worker.job_id, Some(JobId::from_raw(3)));
    }

    #[test]
    fn empty_name_and_oversized_role_are_both_reported() {
        let request = CreateWorkerRequest {
            name: String::new(),
            role: "r".repeat(101),
            job_id: None,
        };

        let Err(ApiError::Validation(fields)) = request.validate() else {
            panic!("expected validation error");
        };
        let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, vec!["name", "role"]);
    }

    #[test]
    fn query_job_id_must_be_an_integer() {
        let query = ListWorkersQuery {
            job_id: Some("seven".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            query.validate(),
            Err(ApiError::Validation(fields)) if fields[0].field == "job_id"
        ));
    }

    #[test]
    fn query_parses_numeric_job_id() {
        let query = ListWorkersQuery {
            job_id: Some("7".to_string()),
            ..Default::default()
        };

        let filter = query.validate().unwrap();
        assert_eq!(filter.job_id, Some(JobId::from_raw(7)));
    }
}
