pub mod models;

pub use models::AnalyticsReport;
