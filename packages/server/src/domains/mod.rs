// Business domains
pub mod analytics;
pub mod jobs;
pub mod workers;
