// Job & Crew Tracking - API Core
//
// This crate provides the backend API for tracking jobs and the workers
// assigned to them. Architecture follows domain-driven design: each domain
// owns its models (database queries) and data (wire-facing shaping).

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
