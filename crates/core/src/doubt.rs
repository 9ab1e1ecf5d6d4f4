//! Doubt Resolution
//!
//! Answers a student's question with fixed templates. The question is run
//! through a few keyword heuristics first so the explanation can open with a
//! guidance sentence that suits the kind of question being asked.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::lenient::{self, Lenient};

pub const DEFAULT_SUBJECT: &str = "General Studies";
pub const DEFAULT_TOPIC: &str = "this concept";
pub const CONFIDENCE_SCORE: f64 = 0.85;

const ENCOURAGEMENT: &str = "You're asking great questions! Keep exploring and learning.";
const MAX_KEY_CONCEPTS: usize = 5;
const STOP_WORDS: [&str; 14] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];
const URGENCY_INDICATORS: [&str; 7] = [
    "urgent", "exam", "test", "tomorrow", "help", "stuck", "confused",
];

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct DoubtRequest {
    #[serde(deserialize_with = "lenient::string")]
    #[schema(example = "Why do plants need sunlight?")]
    pub question: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    #[schema(example = "Science")]
    pub subject: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    #[schema(example = "Photosynthesis")]
    pub topic: Option<String>,
}

impl Lenient for DoubtRequest {}

impl DoubtRequest {
    pub fn question(&self) -> &str {
        self.question.as_deref().unwrap_or("")
    }

    pub fn subject(&self) -> &str {
        self.subject.as_deref().unwrap_or(DEFAULT_SUBJECT)
    }

    pub fn topic(&self) -> &str {
        self.topic.as_deref().unwrap_or(DEFAULT_TOPIC)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Definition,
    Procedure,
    Explanation,
    ExampleRequest,
    ProblemSolving,
    Comparison,
    GeneralInquiry,
}

impl QuestionType {
    /// Keyword classification; the first matching group wins.
    pub fn classify(question: &str) -> Self {
        let q = question.to_lowercase();
        let has_any = |words: &[&str]| words.iter().any(|w| q.contains(w));

        if has_any(&["what", "define", "meaning"]) {
            QuestionType::Definition
        } else if has_any(&["how", "steps", "process"]) {
            QuestionType::Procedure
        } else if has_any(&["why", "reason", "because"]) {
            QuestionType::Explanation
        } else if has_any(&["example", "instance", "show me"]) {
            QuestionType::ExampleRequest
        } else if has_any(&["solve", "calculate", "find"]) {
            QuestionType::ProblemSolving
        } else if has_any(&["difference", "compare", "versus"]) {
            QuestionType::Comparison
        } else {
            QuestionType::GeneralInquiry
        }
    }

    fn guidance(self) -> &'static str {
        match self {
            QuestionType::Definition => {
                "Let's start with a clear definition and then see what it means in practice."
            }
            QuestionType::Procedure => "We'll walk through the process one step at a time.",
            QuestionType::Explanation => {
                "Let's think about why this happens by connecting it to something familiar."
            }
            QuestionType::ExampleRequest => "Here are some examples you can relate to.",
            QuestionType::ProblemSolving => {
                "Let's break the problem into smaller parts and solve each one."
            }
            QuestionType::Comparison => "Let's compare the ideas side by side.",
            QuestionType::GeneralInquiry => "Let's explore it together.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    pub fn assess(question: &str) -> Self {
        match question.split_whitespace().count() {
            n if n < 10 => Complexity::Simple,
            n if n < 20 => Complexity::Medium,
            _ => Complexity::Complex,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn assess(question: &str) -> Self {
        let q = question.to_lowercase();
        match URGENCY_INDICATORS.iter().filter(|w| q.contains(*w)).count() {
            0 => Urgency::Low,
            1 => Urgency::Medium,
            _ => Urgency::High,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct QuestionAnalysis {
    pub question_type: QuestionType,
    pub complexity_level: Complexity,
    pub urgency_level: Urgency,
    pub key_concepts: Vec<String>,
}

impl QuestionAnalysis {
    pub fn of(question: &str) -> Self {
        Self {
            question_type: QuestionType::classify(question),
            complexity_level: Complexity::assess(question),
            urgency_level: Urgency::assess(question),
            key_concepts: key_concepts(question),
        }
    }
}

/// The first five lowercase words longer than three characters that are not
/// stop words, in question order.
pub fn key_concepts(question: &str) -> Vec<String> {
    question
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|token| token.chars().count() > 3 && !STOP_WORDS.contains(token))
        .take(MAX_KEY_CONCEPTS)
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AiResponse {
    #[serde(rename = "type")]
    #[schema(example = "personalized_explanation")]
    pub kind: String,
    pub content: String,
    pub encouragement: String,
    pub follow_up_suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DoubtResolution {
    #[schema(example = "ai_doubt_20240115_103000")]
    pub query_id: String,
    pub question: String,
    pub subject: String,
    pub topic: String,
    pub ai_response: AiResponse,
    pub confidence_score: f64,
    pub question_analysis: QuestionAnalysis,
    pub related_topics: Vec<String>,
    pub recommended_next_steps: Vec<String>,
    pub created_at: DateTime<Utc>,
}

pub fn resolve_doubt(request: &DoubtRequest, now: DateTime<Utc>) -> DoubtResolution {
    let question = request.question();
    let subject = request.subject();
    let topic = request.topic();
    let analysis = QuestionAnalysis::of(question);

    let content = format!(
        "Great question about {topic}! Let me help you understand this step by step. \
         This concept is important for your {subject} studies and I can see you're \
         thinking deeply about it. {}",
        analysis.question_type.guidance()
    );

    DoubtResolution {
        query_id: format!("ai_doubt_{}", now.format("%Y%m%d_%H%M%S")),
        question: question.to_string(),
        subject: subject.to_string(),
        topic: topic.to_string(),
        ai_response: AiResponse {
            kind: "personalized_explanation".to_string(),
            content,
            encouragement: ENCOURAGEMENT.to_string(),
            follow_up_suggestions: vec![
                format!("Should we practice some examples to make {} clearer?", topic),
                format!("Would a visual explanation help you understand {} better?", topic),
                format!("Would you like to see how {} connects to other {} topics?", topic, subject),
            ],
        },
        confidence_score: CONFIDENCE_SCORE,
        question_analysis: analysis,
        related_topics: vec![
            format!("Advanced {}", topic),
            format!("{} applications", topic),
            format!("{} in real life", topic),
        ],
        recommended_next_steps: vec![
            format!("Practice {} with worksheets", topic),
            format!("Explore {} examples", topic),
            format!("Connect {} to your interests", topic),
        ],
        created_at: now,
    }
}
