//! API Models
//!
//! Response shapes owned by the HTTP layer. Worksheet, doubt and analysis
//! payloads live in `eduagent_core`; this module only adds the health check
//! and the error envelope.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::Config;

pub const HEALTH_MESSAGE: &str = "AI Education Agent API is running";

pub const AI_FEATURES: [&str; 6] = [
    "Personalized Content Generation",
    "Adaptive Difficulty Adjustment",
    "Intelligent Worksheet Creation",
    "Smart Doubt Resolution",
    "Performance Analytics",
    "Learning Path Optimization",
];

#[derive(Serialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OpenAiStatus {
    Connected,
    NotConfigured,
}

#[derive(Serialize, ToSchema, Debug, Clone)]
pub struct HealthResponse {
    #[schema(example = "online")]
    pub status: String,
    pub message: String,
    #[schema(example = "2.0.0")]
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub ai_features: Vec<String>,
    pub openai_status: OpenAiStatus,
}

impl HealthResponse {
    pub fn new(config: &Config, timestamp: DateTime<Utc>) -> Self {
        Self {
            status: "online".to_string(),
            message: HEALTH_MESSAGE.to_string(),
            version: config.api_version.clone(),
            timestamp,
            ai_features: AI_FEATURES.iter().map(|f| f.to_string()).collect(),
            openai_status: if config.openai_configured() {
                OpenAiStatus::Connected
            } else {
                OpenAiStatus::NotConfigured
            },
        }
    }
}

#[derive(Serialize, ToSchema, Debug)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_health_response_reports_online() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let health = HealthResponse::new(&Config::default(), now);

        assert_eq!(health.status, "online");
        assert_eq!(health.message, HEALTH_MESSAGE);
        assert_eq!(health.version, "2.0.0");
        assert_eq!(health.ai_features.len(), AI_FEATURES.len());
        assert_eq!(health.openai_status, OpenAiStatus::NotConfigured);

        let json = serde_json::to_value(&health).unwrap();
        assert_eq!(json["openai_status"], "not_configured");
        assert_eq!(json["timestamp"], "2024-01-01T12:00:00Z");
    }

    #[test]
    fn test_health_response_with_openai_key() {
        let config = Config {
            openai_api_key: Some("sk-test".to_string()),
            ..Config::default()
        };
        let health = HealthResponse::new(&config, Utc::now());
        assert_eq!(health.openai_status, OpenAiStatus::Connected);
        assert_eq!(
            serde_json::to_value(&health).unwrap()["openai_status"],
            "connected"
        );
    }

    #[test]
    fn test_error_response_serialization() {
        let error = ErrorResponse {
            error: "Method not allowed".to_string(),
            details: None,
        };
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"error":"Method not allowed"}"#);

        let error = ErrorResponse {
            error: "Invalid JSON in request body".to_string(),
            details: Some("EOF while parsing".to_string()),
        };
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["details"], "EOF while parsing");
    }
}
