//! Handler for the analytics endpoint.

use axum::extract::Extension;
use axum::Json;

use crate::common::ApiError;
use crate::domains::analytics::models::AnalyticsReport;
use crate::server::app::AppState;

/// GET /analytics/
///
/// Recomputed from the current table contents on every call.
pub async fn analytics_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<AnalyticsReport>, ApiError> {
    let report = AnalyticsReport::compute(&state.db_pool).await?;
    Ok(Json(report))
}
