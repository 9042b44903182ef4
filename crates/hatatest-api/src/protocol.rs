//! Wire payloads exchanged with the test backend
//!
//! Request bodies are serialized exactly as the backend expects them;
//! reply shapes tolerate missing optional fields.

use chrono::NaiveDateTime;
use hatatest_core::Provider;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/questions`.
#[derive(Debug, Clone, Serialize)]
pub struct NewQuestion {
    pub category_id: i64,
    pub question_text: String,
}

/// Body of `POST /api/test`: one question against one model.
#[derive(Debug, Clone, Serialize)]
pub struct TestRequest {
    pub question_id: i64,
    pub model_name: String,
    pub provider: Provider,
}

/// Reply of `POST /api/test`.
///
/// On success the backend echoes the response text and timing; on a
/// per-model failure it carries `success: false` with an `error` message
/// and no stored record.
#[derive(Debug, Clone, Deserialize)]
pub struct TestOutcome {
    pub success: bool,
    #[serde(default)]
    pub result_id: Option<i64>,
    pub model_name: String,
    pub provider: Provider,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub response_time: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Reply of `POST /api/questions`. Leaner than the list shape: the
/// denormalized category fields and counters are absent.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedQuestion {
    pub id: i64,
    pub category_id: i64,
    pub question_text: String,
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_request_wire_shape() {
        let request = TestRequest {
            question_id: 7,
            model_name: "gemini-2.5-flash".to_string(),
            provider: Provider::Gemini,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["question_id"], 7);
        assert_eq!(json["model_name"], "gemini-2.5-flash");
        assert_eq!(json["provider"], "gemini");
    }

    #[test]
    fn test_outcome_success_reply() {
        let json = r#"{
            "success": true,
            "result_id": 42,
            "model_name": "gemini-2.5-flash",
            "provider": "gemini",
            "response": "Evet, satır 3'te noktalı virgül eksik.",
            "response_time": 1.2
        }"#;
        let outcome: TestOutcome = serde_json::from_str(json).unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.result_id, Some(42));
        assert_eq!(outcome.response_time, Some(1.2));
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_outcome_failure_reply_has_no_timing() {
        let json = r#"{
            "success": false,
            "error": "Gemini API key not configured",
            "model_name": "gemini-2.5-flash",
            "provider": "gemini"
        }"#;
        let outcome: TestOutcome = serde_json::from_str(json).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("Gemini API key not configured"));
        assert!(outcome.result_id.is_none());
        assert!(outcome.response.is_none());
    }

    #[test]
    fn test_created_question_reply() {
        let json = r#"{
            "id": 12,
            "category_id": 3,
            "question_text": "Null pointer nedir?",
            "created_at": "2026-08-07T09:15:00"
        }"#;
        let created: CreatedQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(created.id, 12);
        assert_eq!(created.category_id, 3);
    }
}
