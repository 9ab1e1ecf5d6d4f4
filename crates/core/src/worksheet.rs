//! Worksheet Generation
//!
//! Builds a practice worksheet from the static template tables. The number
//! of problems is capped at three; in `mixed` mode the problem types
//! alternate, starting with a multiple-choice question.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::{
    Difficulty,
    lenient::{self, Lenient},
    templates::{self, render},
};

pub const DEFAULT_SUBJECT: &str = "Mathematics";
pub const DEFAULT_TOPIC: &str = "General Concepts";
pub const DEFAULT_NUM_QUESTIONS: u32 = 5;
pub const MAX_PROBLEMS: usize = 3;
pub const MINUTES_PER_QUESTION: u64 = 3;

/// Which kinds of problems a worksheet should contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum QuestionMode {
    Mcq,
    Short,
    #[default]
    Mixed,
}

impl QuestionMode {
    /// Unrecognised modes are treated as `mixed`.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "mcq" => QuestionMode::Mcq,
            "short" => QuestionMode::Short,
            _ => QuestionMode::Mixed,
        }
    }
}

/// Incoming worksheet form. Every field is optional and leniently coerced.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct WorksheetRequest {
    #[serde(deserialize_with = "lenient::string")]
    #[schema(example = "Science")]
    pub subject: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    #[schema(example = "Photosynthesis")]
    pub topic: Option<String>,
    #[serde(deserialize_with = "lenient::count")]
    #[schema(example = 3)]
    pub num_questions: Option<u32>,
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    #[schema(example = "mixed")]
    pub question_type: Option<String>,
    /// Accepted for compatibility with older clients; the generated
    /// worksheet is always `medium`.
    #[serde(deserialize_with = "lenient::string")]
    pub difficulty_level: Option<String>,
}

impl Lenient for WorksheetRequest {
    const ALIASES: &'static [(&'static str, &'static [&'static str])] = &[
        ("num_questions", &["numQuestions", "questions"]),
        ("type", &["questionType", "question_type"]),
        ("difficulty_level", &["difficultyLevel"]),
    ];
}

impl WorksheetRequest {
    pub fn subject(&self) -> &str {
        self.subject.as_deref().unwrap_or(DEFAULT_SUBJECT)
    }

    pub fn topic(&self) -> &str {
        self.topic.as_deref().unwrap_or(DEFAULT_TOPIC)
    }

    pub fn num_questions(&self) -> u32 {
        self.num_questions.unwrap_or(DEFAULT_NUM_QUESTIONS)
    }

    pub fn mode(&self) -> QuestionMode {
        self.question_type
            .as_deref()
            .map(QuestionMode::from_key)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Problem {
    MultipleChoice {
        id: u32,
        question: String,
        options: Vec<String>,
        correct_answer: String,
    },
    ShortAnswer {
        id: u32,
        question: String,
        expected_length: String,
    },
}

impl Problem {
    pub fn id(&self) -> u32 {
        match self {
            Problem::MultipleChoice { id, .. } | Problem::ShortAnswer { id, .. } => *id,
        }
    }

    pub fn question(&self) -> &str {
        match self {
            Problem::MultipleChoice { question, .. } | Problem::ShortAnswer { question, .. } => {
                question
            }
        }
    }

    pub fn is_multiple_choice(&self) -> bool {
        matches!(self, Problem::MultipleChoice { .. })
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Worksheet {
    #[schema(example = "ai_worksheet_20240115_103000")]
    pub worksheet_id: String,
    pub title: String,
    pub subject: String,
    pub topic: String,
    pub difficulty_level: Difficulty,
    pub estimated_time_minutes: u64,
    pub question_type: QuestionMode,
    pub ai_generated: bool,
    pub problems: Vec<Problem>,
    pub learning_objectives: Vec<String>,
}

/// Builds a worksheet for the request. `now` seeds the worksheet id.
pub fn generate_worksheet(request: &WorksheetRequest, now: DateTime<Utc>) -> Worksheet {
    let subject = request.subject();
    let topic = request.topic();
    let num_questions = request.num_questions();
    let mode = request.mode();

    if let Some(requested) = &request.difficulty_level {
        debug!(requested = %requested, "Ignoring requested difficulty level");
    }

    let count = (num_questions as usize).min(MAX_PROBLEMS);
    let problems = build_problems(subject, topic, mode, count);

    Worksheet {
        worksheet_id: format!("ai_worksheet_{}", now.format("%Y%m%d_%H%M%S")),
        title: format!("AI-Personalized {} - {} Worksheet", subject, topic),
        subject: subject.to_string(),
        topic: topic.to_string(),
        difficulty_level: Difficulty::Medium,
        estimated_time_minutes: u64::from(num_questions) * MINUTES_PER_QUESTION,
        question_type: mode,
        ai_generated: true,
        problems,
        learning_objectives: learning_objectives(subject, topic),
    }
}

/// Picks `count` problems from the subject's templates, cycling with `i % len`.
pub fn build_problems(subject: &str, topic: &str, mode: QuestionMode, count: usize) -> Vec<Problem> {
    let table = templates::templates_for(subject);

    (0..count)
        .map(|i| {
            let id = i as u32 + 1;
            let use_mcq = match mode {
                QuestionMode::Mcq => true,
                QuestionMode::Short => false,
                QuestionMode::Mixed => i % 2 == 0,
            };

            if use_mcq {
                let t = &table.mcq[i % table.mcq.len()];
                Problem::MultipleChoice {
                    id,
                    question: render(t.question, topic),
                    options: t.options.iter().map(|o| o.to_string()).collect(),
                    correct_answer: t.correct_answer.to_string(),
                }
            } else {
                let t = &table.short[i % table.short.len()];
                Problem::ShortAnswer {
                    id,
                    question: render(t.question, topic),
                    expected_length: t.expected_length.to_string(),
                }
            }
        })
        .collect()
}

fn learning_objectives(subject: &str, topic: &str) -> Vec<String> {
    vec![
        format!("Master key concepts of {}", topic),
        format!("Apply {} knowledge to solve problems", topic),
        format!("Build confidence in {}", subject),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::Subject;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    fn request(value: serde_json::Value) -> WorksheetRequest {
        lenient::from_value_or_default(value)
    }

    #[test]
    fn test_problem_count_is_capped_at_three() {
        for (requested, expected) in [(0, 0), (1, 1), (2, 2), (3, 3), (5, 3), (40, 3)] {
            let ws = generate_worksheet(
                &request(json!({"subject": "Science", "topic": "Cells", "num_questions": requested})),
                fixed_now(),
            );
            assert_eq!(ws.problems.len(), expected, "requested {}", requested);
        }
    }

    #[test]
    fn test_estimated_time_scales_with_requested_count() {
        let ws = generate_worksheet(&request(json!({"numQuestions": 10})), fixed_now());
        assert_eq!(ws.estimated_time_minutes, 10 * MINUTES_PER_QUESTION);

        let ws = generate_worksheet(&WorksheetRequest::default(), fixed_now());
        assert_eq!(
            ws.estimated_time_minutes,
            u64::from(DEFAULT_NUM_QUESTIONS) * MINUTES_PER_QUESTION
        );
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let ws = generate_worksheet(&WorksheetRequest::default(), fixed_now());

        assert_eq!(ws.worksheet_id, "ai_worksheet_20240115_103000");
        assert_eq!(ws.subject, DEFAULT_SUBJECT);
        assert_eq!(ws.topic, DEFAULT_TOPIC);
        assert_eq!(ws.title, "AI-Personalized Mathematics - General Concepts Worksheet");
        assert_eq!(ws.difficulty_level, Difficulty::Medium);
        assert_eq!(ws.question_type, QuestionMode::Mixed);
        assert!(ws.ai_generated);
        assert_eq!(ws.problems.len(), 3);
        assert_eq!(ws.learning_objectives.len(), 3);
    }

    #[test]
    fn test_mixed_mode_alternates_types() {
        let problems = build_problems("science", "Light", QuestionMode::Mixed, 3);
        let kinds: Vec<bool> = problems.iter().map(Problem::is_multiple_choice).collect();
        assert_eq!(kinds, vec![true, false, true]);

        let ids: Vec<u32> = problems.iter().map(Problem::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_mixed_mode_indexes_templates_by_position() {
        let table = Subject::Science.templates();
        let problems = build_problems("science", "Light", QuestionMode::Mixed, 3);

        assert_eq!(problems[0].question(), render(table.mcq[0].question, "Light"));
        assert_eq!(problems[1].question(), render(table.short[1].question, "Light"));
        assert_eq!(problems[2].question(), render(table.mcq[2].question, "Light"));
    }

    #[test]
    fn test_single_type_modes() {
        let mcq = build_problems("english", "Grammar", QuestionMode::Mcq, 3);
        assert!(mcq.iter().all(Problem::is_multiple_choice));

        let short = build_problems("english", "Grammar", QuestionMode::Short, 3);
        assert!(short.iter().all(|p| !p.is_multiple_choice()));
        match &short[0] {
            Problem::ShortAnswer { expected_length, .. } => {
                assert_eq!(expected_length, "5-6 sentences")
            }
            other => panic!("Expected a short answer, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_subject_uses_mathematics_templates() {
        let ws = generate_worksheet(
            &request(json!({"subject": "Astronomy", "topic": "Stars", "type": "mcq", "num_questions": 3})),
            fixed_now(),
        );
        let maths = Subject::Mathematics.templates();

        for (i, problem) in ws.problems.iter().enumerate() {
            assert_eq!(problem.question(), render(maths.mcq[i].question, "Stars"));
        }
        // The requested subject is still echoed back.
        assert_eq!(ws.subject, "Astronomy");
    }

    #[test]
    fn test_question_mode_parsing() {
        assert_eq!(QuestionMode::from_key("MCQ"), QuestionMode::Mcq);
        assert_eq!(QuestionMode::from_key(" short "), QuestionMode::Short);
        assert_eq!(QuestionMode::from_key("essay"), QuestionMode::Mixed);
        assert_eq!(request(json!({"questionType": "short"})).mode(), QuestionMode::Short);
        assert_eq!(request(json!({"question_type": "mcq"})).mode(), QuestionMode::Mcq);
    }

    #[test]
    fn test_malformed_fields_coerce_to_defaults() {
        let req = request(json!({"subject": 12, "topic": "", "questions": "lots", "type": null}));
        assert_eq!(req.subject(), "12");
        assert_eq!(req.topic(), DEFAULT_TOPIC);
        assert_eq!(req.num_questions(), DEFAULT_NUM_QUESTIONS);
        assert_eq!(req.mode(), QuestionMode::Mixed);
    }

    #[test]
    fn test_repeated_field_spellings_keep_the_rest_of_the_request() {
        let req = request(json!({
            "subject": "Science",
            "topic": "Cells",
            "num_questions": 2,
            "questions": 9
        }));
        assert_eq!(req.subject(), "Science");
        assert_eq!(req.topic(), "Cells");
        assert_eq!(req.num_questions(), 2);

        let req = request(json!({"subject": "History", "type": "mcq", "questionType": "short"}));
        assert_eq!(req.subject(), "History");
        assert_eq!(req.mode(), QuestionMode::Mcq);

        let req = request(json!({"numQuestions": 1, "questions": 4, "question_type": "short", "questionType": "mcq"}));
        assert_eq!(req.num_questions(), 1);
        assert_eq!(req.mode(), QuestionMode::Mcq);
    }

    #[test]
    fn test_problem_serialization_shape() {
        let problems = build_problems("history", "Independence", QuestionMode::Mixed, 2);
        let value = serde_json::to_value(&problems).unwrap();

        assert_eq!(value[0]["type"], "multiple_choice");
        assert_eq!(value[0]["correct_answer"], "B");
        assert_eq!(value[0]["options"].as_array().unwrap().len(), 4);
        assert!(value[0].get("expected_length").is_none());

        assert_eq!(value[1]["type"], "short_answer");
        assert_eq!(value[1]["expected_length"], "3-4 sentences");
        assert!(value[1].get("options").is_none());
    }

    #[test]
    fn test_worksheet_serializes_medium_difficulty() {
        let ws = generate_worksheet(&WorksheetRequest::default(), fixed_now());
        let value = serde_json::to_value(&ws).unwrap();
        assert_eq!(value["difficulty_level"], "medium");
        assert_eq!(value["question_type"], "mixed");
    }
}
