// Axum API Server Module
//
// Purpose: JSON endpoints over the yield estimator plus the synthetic
// historical/climate generators consumed by the dashboard.

#[cfg(feature = "api")]
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

#[cfg(feature = "api")]
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

#[cfg(feature = "api")]
use chrono::Datelike;

#[cfg(feature = "api")]
use crate::adapter::DashboardRequest;

#[cfg(feature = "api")]
use crate::climate::{climate_insights, historical_series};

#[cfg(feature = "api")]
use crate::data::{find_district, DISTRICTS};

#[cfg(feature = "api")]
use crate::estimator::estimate;

#[cfg(feature = "api")]
use crate::types::PredictionInput;

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router() -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Estimation endpoints (JSON)
        .route("/api/predict", post(predict))
        .route("/api/dashboard/predict", post(dashboard_predict))

        // Reference data + synthetic series (JSON)
        .route("/api/districts", get(get_districts))
        .route("/api/historical/:district", get(get_historical))
        .route("/api/climate/:district", get(get_climate))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive()) // Allow all origins (adjust for production)
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(feature = "api")]
async fn predict(
    Json(input): Json<PredictionInput>,
) -> Result<Json<serde_json::Value>, AppError> {
    let output = estimate(&input).map_err(|e| AppError::InvalidInput(e.to_string()))?;

    tracing::debug!(
        predicted_yield = output.predicted_yield,
        confidence = output.confidence,
        "estimated yield"
    );

    Ok(Json(serde_json::json!({
        "success": true,
        "data": output
    })))
}

#[cfg(feature = "api")]
async fn dashboard_predict(
    Json(request): Json<DashboardRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let input = request.to_prediction_input();
    let output = estimate(&input).map_err(|e| AppError::InvalidInput(e.to_string()))?;

    tracing::debug!(
        district = %request.district,
        season = %request.season,
        predicted_yield = output.predicted_yield,
        "estimated yield for dashboard request"
    );

    Ok(Json(serde_json::json!({
        "success": true,
        "data": output
    })))
}

#[cfg(feature = "api")]
async fn get_districts() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "data": DISTRICTS
    }))
}

#[cfg(feature = "api")]
#[derive(Debug, serde::Deserialize)]
struct HistoricalQuery {
    years: Option<usize>,
}

#[cfg(feature = "api")]
async fn get_historical(
    Path(district): Path<String>,
    Query(params): Query<HistoricalQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let district = find_district(&district)
        .ok_or_else(|| AppError::NotFound(format!("District {} not found", district)))?;

    let years = params.years.unwrap_or(5).clamp(1, 20);
    let current_year = chrono::Utc::now().year();
    let series = historical_series(current_year, years, &mut rand::thread_rng());

    tracing::debug!(district, years, "generated historical series");

    Ok(Json(serde_json::json!({
        "success": true,
        "data": series
    })))
}

#[cfg(feature = "api")]
async fn get_climate(
    Path(district): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let district = find_district(&district)
        .ok_or_else(|| AppError::NotFound(format!("District {} not found", district)))?;

    let insights = climate_insights(district, &mut rand::thread_rng());

    Ok(Json(serde_json::json!({
        "success": true,
        "data": insights
    })))
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
enum AppError {
    InvalidInput(String),
    NotFound(String),
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(serde_json::json!({
            "success": false,
            "error": message
        }));

        (status, body).into_response()
    }
}
