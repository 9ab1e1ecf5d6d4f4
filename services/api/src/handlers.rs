//! Axum Handlers for the REST API
//!
//! This module contains the logic for handling HTTP requests for the health
//! check and the template-backed content endpoints. It uses `utoipa` doc
//! comments to generate OpenAPI documentation.

use axum::{
    extract::{State, rejection::BytesRejection},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use eduagent_core::{
    analysis::{PerformanceAnalysis, PerformanceRequest},
    doubt::{DoubtRequest, DoubtResolution},
    insights::{InsightsRequest, StudentInsights},
    worksheet::{Worksheet, WorksheetRequest},
};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{
    extract::JsonBody,
    models::{ErrorResponse, HealthResponse},
    state::AppState,
};

#[derive(Debug)]
pub enum ApiError {
    /// The request body was not valid JSON.
    InvalidInput(String),
    /// The body could not be read at all, e.g. it exceeded the size limit.
    UnreadableBody(BytesRejection),
    UnsupportedMethod,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidInput(details) => {
                debug!(details = %details, "Rejecting unparsable request body");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "Invalid JSON in request body".to_string(),
                        details: Some(details),
                    }),
                )
                    .into_response()
            }
            ApiError::UnreadableBody(rejection) => {
                debug!(status = %rejection.status(), "Failed to read request body");
                rejection.into_response()
            }
            ApiError::UnsupportedMethod => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(ErrorResponse {
                    error: "Method not allowed".to_string(),
                    details: None,
                }),
            )
                .into_response(),
        }
    }
}

/// Report service status and the advertised AI features.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is online", body = HealthResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse)
    )
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::new(&state.config, Utc::now()))
}

/// Generate a templated practice worksheet.
#[utoipa::path(
    post,
    path = "/api/worksheets/ai-generate",
    request_body = WorksheetRequest,
    responses(
        (status = 200, description = "Worksheet generated", body = Worksheet),
        (status = 400, description = "Request body is not valid JSON", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse)
    )
)]
pub async fn generate_worksheet(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<WorksheetRequest>,
) -> Json<Worksheet> {
    Json(state.tutor.generate_worksheet(request).await)
}

/// Answer a student's doubt with a templated explanation.
#[utoipa::path(
    post,
    path = "/api/doubts/ai-ask",
    request_body = DoubtRequest,
    responses(
        (status = 200, description = "Doubt answered", body = DoubtResolution),
        (status = 400, description = "Request body is not valid JSON", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse)
    )
)]
pub async fn ask_doubt(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<DoubtRequest>,
) -> Json<DoubtResolution> {
    Json(state.tutor.resolve_doubt(request).await)
}

/// Analyze a submitted academic history.
#[utoipa::path(
    post,
    path = "/api/analytics/performance",
    request_body = PerformanceRequest,
    responses(
        (status = 200, description = "Performance analysis", body = PerformanceAnalysis),
        (status = 400, description = "Request body is not valid JSON", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse)
    )
)]
pub async fn analyze_performance(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<PerformanceRequest>,
) -> Json<PerformanceAnalysis> {
    Json(
        state
            .tutor
            .analyze_performance(request.academic_history)
            .await,
    )
}

/// Build a coaching summary and study plan from a submitted history.
#[utoipa::path(
    post,
    path = "/api/analytics/insights",
    request_body = InsightsRequest,
    responses(
        (status = 200, description = "Student insights", body = StudentInsights),
        (status = 400, description = "Request body is not valid JSON", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse)
    )
)]
pub async fn student_insights(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<InsightsRequest>,
) -> Json<StudentInsights> {
    Json(state.tutor.student_insights(request).await)
}

/// Fallback for any method a route does not serve.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    warn!(%method, path = %uri.path(), "Unsupported method");
    ApiError::UnsupportedMethod
}
