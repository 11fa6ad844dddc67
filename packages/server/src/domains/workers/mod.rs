pub mod data;
pub mod models;

pub use data::{CreateWorkerRequest, ListWorkersQuery, WorkerData};
pub use models::{Assignment, NewWorker, Worker, WorkerFilter};
