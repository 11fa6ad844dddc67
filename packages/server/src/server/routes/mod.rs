// HTTP routes
pub mod analytics;
pub mod health;
pub mod jobs;
pub mod workers;

pub use analytics::*;
pub use health::*;
pub use jobs::*;
pub use workers::*;
