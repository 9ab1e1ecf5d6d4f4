//! Tutor Service
//!
//! The seam between the HTTP layer and content generation. Handlers only see
//! `dyn TutorService`, so a model-backed implementation can replace the
//! template one without touching the router.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::{
    analysis::{self, AcademicRecord, PerformanceAnalysis},
    doubt::{self, DoubtRequest, DoubtResolution},
    insights::{self, InsightsRequest, StudentInsights},
    worksheet::{self, Worksheet, WorksheetRequest},
};

/// Defines the contract for anything that can produce learning content.
#[async_trait]
pub trait TutorService: Send + Sync {
    /// Builds a practice worksheet for the requested subject and topic.
    async fn generate_worksheet(&self, request: WorksheetRequest) -> Worksheet;

    /// Answers a student's question.
    async fn resolve_doubt(&self, request: DoubtRequest) -> DoubtResolution;

    /// Summarises an academic history.
    async fn analyze_performance(&self, records: Vec<AcademicRecord>) -> PerformanceAnalysis;

    /// Builds a coaching summary and study plan from an academic history.
    async fn student_insights(&self, request: InsightsRequest) -> StudentInsights;
}

/// A `TutorService` that answers from the static template tables.
///
/// The clock is injectable so timestamp-derived ids can be asserted in tests.
pub struct TemplateTutor {
    clock: fn() -> DateTime<Utc>,
}

impl TemplateTutor {
    pub fn new() -> Self {
        Self { clock: Utc::now }
    }

    pub fn with_clock(clock: fn() -> DateTime<Utc>) -> Self {
        Self { clock }
    }
}

impl Default for TemplateTutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TutorService for TemplateTutor {
    async fn generate_worksheet(&self, request: WorksheetRequest) -> Worksheet {
        let worksheet = worksheet::generate_worksheet(&request, (self.clock)());
        info!(
            worksheet_id = %worksheet.worksheet_id,
            subject = %worksheet.subject,
            topic = %worksheet.topic,
            problems = worksheet.problems.len(),
            "Generated worksheet"
        );
        worksheet
    }

    async fn resolve_doubt(&self, request: DoubtRequest) -> DoubtResolution {
        let resolution = doubt::resolve_doubt(&request, (self.clock)());
        info!(
            query_id = %resolution.query_id,
            question_type = ?resolution.question_analysis.question_type,
            urgency = ?resolution.question_analysis.urgency_level,
            "Resolved doubt"
        );
        resolution
    }

    async fn analyze_performance(&self, records: Vec<AcademicRecord>) -> PerformanceAnalysis {
        let analysis = analysis::analyze_performance(&records);
        info!(
            records = records.len(),
            overall_level = analysis.overall_level,
            "Analyzed performance"
        );
        analysis
    }

    async fn student_insights(&self, request: InsightsRequest) -> StudentInsights {
        let insights = insights::student_insights(&request);
        info!(
            student_id = request.student_id.as_deref().unwrap_or("-"),
            records = request.academic_history.len(),
            trajectory = ?insights.learning_insights.learning_trajectory,
            "Built student insights"
        );
        insights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Difficulty;
    use chrono::TimeZone;

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 8, 5, 9).unwrap()
    }

    #[tokio::test]
    async fn test_template_tutor_uses_clock_for_ids() {
        let tutor = TemplateTutor::with_clock(fixed_clock);

        let worksheet = tutor.generate_worksheet(WorksheetRequest::default()).await;
        assert_eq!(worksheet.worksheet_id, "ai_worksheet_20250301_080509");

        let resolution = tutor.resolve_doubt(DoubtRequest::default()).await;
        assert_eq!(resolution.query_id, "ai_doubt_20250301_080509");
        assert_eq!(resolution.created_at, fixed_clock());
    }

    #[tokio::test]
    async fn test_tutor_behind_trait_object() {
        let tutor: Box<dyn TutorService> = Box::new(TemplateTutor::default());

        let analysis = tutor
            .analyze_performance(vec![AcademicRecord::new("Science", 90.0, 100.0)])
            .await;
        assert_eq!(analysis.recommended_difficulty, Difficulty::Hard);
        assert_eq!(analysis.strengths, vec!["Science"]);

        let insights = tutor
            .student_insights(InsightsRequest {
                academic_history: vec![AcademicRecord::new("Science", 90.0, 100.0)],
                ..InsightsRequest::default()
            })
            .await;
        assert_eq!(
            insights.personalized_recommendations,
            vec![
                "Spend extra time on Advanced concepts",
                "Leverage your strength in Science"
            ]
        );
    }
}
