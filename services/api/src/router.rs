//! Axum Router Configuration
//!
//! This module defines the complete HTTP routing for the application,
//! including the REST API, CORS and request tracing, and the OpenAPI
//! documentation.

use crate::{handlers, models::ErrorResponse, models::HealthResponse, state::AppState};

use axum::{
    Router,
    routing::{get, post},
};
use eduagent_core::{
    Difficulty,
    analysis::{AcademicRecord, PerformanceAnalysis, PerformanceRequest},
    doubt::{AiResponse, DoubtRequest, DoubtResolution, QuestionAnalysis},
    insights::{
        InsightsRequest, LearningInsights, SessionSuggestion, StudentInsights, StudyPlan,
        Trajectory,
    },
    worksheet::{Problem, QuestionMode, Worksheet, WorksheetRequest},
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::generate_worksheet,
        handlers::ask_doubt,
        handlers::analyze_performance,
        handlers::student_insights,
    ),
    components(
        schemas(
            HealthResponse, ErrorResponse, WorksheetRequest, Worksheet, Problem, QuestionMode,
            Difficulty, DoubtRequest, DoubtResolution, AiResponse, QuestionAnalysis,
            PerformanceRequest, AcademicRecord, PerformanceAnalysis, InsightsRequest,
            StudentInsights, LearningInsights, StudyPlan, SessionSuggestion, Trajectory
        )
    ),
    tags(
        (name = "EduAgent API", description = "Template-backed worksheets, doubt answers and performance analysis")
    )
)]
pub struct ApiDoc;

/// Creates the main Axum router for the application.
///
/// Every route answers methods it does not serve with a JSON 405. CORS is
/// fully permissive and answers preflight requests itself.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route(
            "/",
            get(handlers::health).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/health",
            get(handlers::health).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/worksheets/ai-generate",
            post(handlers::generate_worksheet).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/doubts/ai-ask",
            post(handlers::ask_doubt).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/analytics/performance",
            post(handlers::analyze_performance).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/analytics/insights",
            post(handlers::student_insights).fallback(handlers::method_not_allowed),
        )
        .with_state(app_state);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_router)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
