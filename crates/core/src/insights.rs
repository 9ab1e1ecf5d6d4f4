//! Student Insights
//!
//! A templated coaching summary layered on top of [`analyze_performance`]:
//! learning insights, recommendations, a study plan and a suggestion for the
//! next session. Like the analysis itself it works on a history submitted
//! with the request.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    Difficulty,
    analysis::{AcademicRecord, PerformanceAnalysis, analyze_performance},
    lenient::{self, Lenient},
};

pub const DEFAULT_STUDENT_NAME: &str = "Learner";
pub const DEFAULT_LEARNING_STYLE: &str = "visual";
pub const IMPROVING_ABOVE: f64 = 60.0;
pub const TARGET_CEILING: f64 = 95.0;
pub const TARGET_STEP: f64 = 10.0;
pub const SESSION_MINUTES: u32 = 30;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct InsightsRequest {
    #[serde(deserialize_with = "lenient::string")]
    #[schema(example = "student_001")]
    pub student_id: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    #[schema(example = "Asha")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    #[schema(example = "visual")]
    pub learning_style: Option<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub academic_history: Vec<AcademicRecord>,
}

impl Lenient for InsightsRequest {
    const ALIASES: &'static [(&'static str, &'static [&'static str])] = &[
        ("student_id", &["studentId"]),
        ("name", &["student_name", "studentName"]),
        ("learning_style", &["learningStyle"]),
        ("academic_history", &["academicHistory"]),
    ];
}

impl InsightsRequest {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_STUDENT_NAME)
    }

    pub fn learning_style(&self) -> &str {
        self.learning_style.as_deref().unwrap_or(DEFAULT_LEARNING_STYLE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Trajectory {
    Improving,
    NeedsSupport,
}

impl Trajectory {
    pub fn for_level(level: f64) -> Self {
        if level > IMPROVING_ABOVE {
            Trajectory::Improving
        } else {
            Trajectory::NeedsSupport
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LearningInsights {
    pub current_level: f64,
    pub learning_trajectory: Trajectory,
    #[schema(example = "30-45 minutes")]
    pub optimal_study_time: String,
    pub best_learning_approach: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StudyPlan {
    pub daily_goals: Vec<String>,
    pub weekly_goals: Vec<String>,
    pub monthly_goals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SessionSuggestion {
    pub recommended_subject: String,
    pub recommended_topic: String,
    /// Minutes.
    pub estimated_time: u32,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StudentInsights {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    pub ai_analysis: PerformanceAnalysis,
    pub learning_insights: LearningInsights,
    pub personalized_recommendations: Vec<String>,
    pub study_plan: StudyPlan,
    pub motivation_message: String,
    pub next_learning_session_suggestion: SessionSuggestion,
}

/// The level a student is asked to reach within a month.
pub fn target_level(level: f64) -> f64 {
    ((level + TARGET_STEP) * 10.0).round() / 10.0
}

pub fn student_insights(request: &InsightsRequest) -> StudentInsights {
    let analysis = analyze_performance(&request.academic_history);
    let level = analysis.overall_level;
    let style = request.learning_style();

    let optimal_study_time = if style.eq_ignore_ascii_case(DEFAULT_LEARNING_STYLE) {
        "30-45 minutes"
    } else {
        "20-30 minutes"
    };

    let personalized_recommendations = analysis
        .focus_areas
        .iter()
        .take(3)
        .map(|area| format!("Spend extra time on {}", area))
        .chain(
            analysis
                .strengths
                .iter()
                .take(2)
                .map(|strength| format!("Leverage your strength in {}", strength)),
        )
        .collect();

    let first_focus: Vec<&str> = analysis.focus_areas.iter().take(2).map(String::as_str).collect();
    let strongest = analysis
        .strengths
        .first()
        .map(String::as_str)
        .unwrap_or("your strong subjects");

    let study_plan = StudyPlan {
        daily_goals: first_focus
            .iter()
            .map(|area| format!("Practice {} for 15 minutes", area))
            .collect(),
        weekly_goals: vec![
            "Complete 2 worksheets on weak subjects".to_string(),
            "Ask 3 questions about challenging topics".to_string(),
            format!("Review and strengthen {}", strongest),
        ],
        monthly_goals: vec![
            format!(
                "Improve overall level from {}% to {}%",
                level,
                target_level(level).min(TARGET_CEILING)
            ),
            format!("Master fundamentals in {}", join_or(&first_focus, "key subjects")),
        ],
    };

    let strengths: Vec<&str> = analysis.strengths.iter().map(String::as_str).collect();
    let motivation_message = format!(
        "Great progress, {}! You're doing well in {}. Keep working on {} and you'll see amazing improvement!",
        request.name(),
        join_or(&strengths, "your studies"),
        join_or(&first_focus, "new topics"),
    );

    let next_learning_session_suggestion = SessionSuggestion {
        recommended_subject: analysis
            .focus_areas
            .first()
            .cloned()
            .unwrap_or_else(|| "Mathematics".to_string()),
        recommended_topic: "Fundamentals review".to_string(),
        estimated_time: SESSION_MINUTES,
        difficulty: analysis.recommended_difficulty,
    };

    StudentInsights {
        student_id: request.student_id.clone(),
        learning_insights: LearningInsights {
            current_level: level,
            learning_trajectory: Trajectory::for_level(level),
            optimal_study_time: optimal_study_time.to_string(),
            best_learning_approach: format!("Focus on {} learning methods", style),
        },
        personalized_recommendations,
        study_plan,
        motivation_message,
        next_learning_session_suggestion,
        ai_analysis: analysis,
    }
}

fn join_or(items: &[&str], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}
