//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::routes::{
    analytics_handler, assign_worker, create_job, create_worker, delete_job, delete_worker,
    get_job, health_handler, list_job_workers, list_jobs, list_workers, unassign_worker,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool) -> Router {
    let app_state = AppState { db_pool: pool };

    // CORS configuration - allow any origin (the service fronts browser
    // clients served from other origins)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/jobs/", post(create_job).get(list_jobs))
        .route("/jobs/:id", get(get_job).delete(delete_job))
        .route("/jobs/:id/workers/", get(list_job_workers))
        .route("/workers/", post(create_worker).get(list_workers))
        .route("/workers/:worker_id", delete(delete_worker))
        .route("/workers/:worker_id/assign", delete(unassign_worker))
        .route("/workers/:worker_id/assign/:job_id", put(assign_worker))
        .route("/analytics/", get(analytics_handler))
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
