//! Typed ID definitions for all domain entities.
//!
//! This module defines type aliases for each domain entity, providing
//! compile-time type safety for ID usage throughout the application.
//!
//! # Example
//!
//! ```rust
//! use server_core::common::{JobId, WorkerId};
//!
//! // These are incompatible types - compiler prevents mixing them up
//! let job_id: JobId = JobId::from_raw(1);
//! let worker_id: WorkerId = WorkerId::from_raw(1);
//!
//! // This would be a compile error:
//! // let wrong: WorkerId = job_id;
//! ```

// Re-export the core Id type
pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Job entities.
pub struct Job;

/// Marker type for Worker entities.
pub struct Worker;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Job entities.
pub type JobId = Id<Job>;

/// Typed ID for Worker entities.
pub type WorkerId = Id<Worker>;
