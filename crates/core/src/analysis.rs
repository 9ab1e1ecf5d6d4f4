//! Performance Analysis
//!
//! Summarises an academic history into an overall level, per-subject
//! averages and a recommended difficulty. Nothing is stored; the history is
//! supplied with every request.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::{
    Difficulty,
    lenient::{self, Lenient},
};

pub const DEFAULT_LEVEL: f64 = 50.0;
pub const STRENGTH_THRESHOLD: f64 = 75.0;
pub const WEAKNESS_THRESHOLD: f64 = 65.0;
const DEFAULT_RECORD_SUBJECT: &str = "General";
const DEFAULT_MAX_SCORE: f64 = 100.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct AcademicRecord {
    #[serde(deserialize_with = "lenient::string")]
    #[schema(example = "Mathematics")]
    pub subject: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    #[schema(example = "Algebra")]
    pub topic: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    #[schema(example = 85.0)]
    pub score: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    #[schema(example = 100.0)]
    pub max_score: Option<f64>,
}

impl Lenient for AcademicRecord {
    const ALIASES: &'static [(&'static str, &'static [&'static str])] =
        &[("max_score", &["maxScore"])];
}

impl AcademicRecord {
    pub fn new(subject: &str, score: f64, max_score: f64) -> Self {
        Self {
            subject: Some(subject.to_string()),
            topic: None,
            score: Some(score),
            max_score: Some(max_score),
        }
    }

    pub fn subject(&self) -> &str {
        self.subject.as_deref().unwrap_or(DEFAULT_RECORD_SUBJECT)
    }

    pub fn score(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }

    pub fn max_score(&self) -> f64 {
        self.max_score.unwrap_or(DEFAULT_MAX_SCORE)
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct PerformanceRequest {
    #[serde(deserialize_with = "lenient::list")]
    pub academic_history: Vec<AcademicRecord>,
}

impl Lenient for PerformanceRequest {
    const ALIASES: &'static [(&'static str, &'static [&'static str])] =
        &[("academic_history", &["academicHistory"])];
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PerformanceAnalysis {
    pub overall_level: f64,
    pub recommended_difficulty: Difficulty,
    pub subject_performance: BTreeMap<String, f64>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub focus_areas: Vec<String>,
    pub learning_path: Vec<String>,
}

impl Difficulty {
    /// Maps an overall percentage to the difficulty a student should practice at.
    pub fn for_level(level: f64) -> Self {
        if level >= 85.0 {
            Difficulty::Hard
        } else if level >= 70.0 {
            Difficulty::Medium
        } else {
            Difficulty::Easy
        }
    }
}

pub fn analyze_performance(records: &[AcademicRecord]) -> PerformanceAnalysis {
    if records.is_empty() {
        return PerformanceAnalysis {
            overall_level: DEFAULT_LEVEL,
            recommended_difficulty: Difficulty::Medium,
            subject_performance: BTreeMap::new(),
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            focus_areas: vec!["Basic concepts".to_string()],
            learning_path: vec!["Start with fundamentals".to_string()],
        };
    }

    let total_score: f64 = records.iter().map(AcademicRecord::score).sum();
    let total_possible: f64 = records.iter().map(AcademicRecord::max_score).sum();
    let overall = if total_possible > 0.0 {
        total_score / total_possible * 100.0
    } else {
        DEFAULT_LEVEL
    };

    let mut per_subject: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for record in records.iter().filter(|r| r.max_score() > 0.0) {
        per_subject
            .entry(record.subject().to_string())
            .or_default()
            .push(record.score() / record.max_score() * 100.0);
    }

    let averages: BTreeMap<String, f64> = per_subject
        .into_iter()
        .map(|(subject, scores)| {
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            (subject, mean)
        })
        .collect();

    let strengths: Vec<String> = averages
        .iter()
        .filter(|(_, avg)| **avg >= STRENGTH_THRESHOLD)
        .map(|(subject, _)| subject.clone())
        .collect();
    let weaknesses: Vec<String> = averages
        .iter()
        .filter(|(_, avg)| **avg < WEAKNESS_THRESHOLD)
        .map(|(subject, _)| subject.clone())
        .collect();

    let focus_areas = if weaknesses.is_empty() {
        vec!["Advanced concepts".to_string()]
    } else {
        weaknesses.clone()
    };
    let learning_path = weaknesses
        .iter()
        .take(3)
        .map(|area| format!("Focus on {}", area))
        .collect();

    PerformanceAnalysis {
        overall_level: round1(overall),
        recommended_difficulty: Difficulty::for_level(overall),
        subject_performance: averages,
        strengths,
        weaknesses,
        focus_areas,
        learning_path,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
