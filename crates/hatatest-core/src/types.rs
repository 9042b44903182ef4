//! Domain view models for the test dashboard
//!
//! These mirror the JSON the backend serves. All of them are transient:
//! fetched fresh on view activation, never written back, never persisted.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Language-model backend family for a given model.
///
/// The backend only ever emits `"gemini"` or `"huggingface"`, but a value
/// outside the contract must still render without crashing, so unknown
/// strings are captured verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Gemini,
    Huggingface,
    #[serde(untagged)]
    Other(String),
}

impl Provider {
    /// Wire value of the provider.
    pub fn as_str(&self) -> &str {
        match self {
            Provider::Gemini => "gemini",
            Provider::Huggingface => "huggingface",
            Provider::Other(raw) => raw,
        }
    }

    /// Fixed display label per known provider; unknown values render raw.
    pub fn label(&self) -> String {
        match self {
            Provider::Gemini => "🌟 Gemini".to_string(),
            Provider::Huggingface => "🤗 HuggingFace".to_string(),
            Provider::Other(raw) => raw.clone(),
        }
    }
}

/// An error category card.
///
/// `category_code` is displayed, never validated client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub category_code: String,
    pub category_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_count: usize,
    #[serde(default)]
    pub question_count: usize,
}

/// An error-type label under a category. Fetched lazily on expand,
/// not cached across categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorTypeInfo {
    pub id: i64,
    pub error_type: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// `GET /api/categories/{id}` reply: the category with its error types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub id: i64,
    pub category_code: String,
    pub category_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_types: Vec<ErrorTypeInfo>,
}

/// A test question attached to a category.
///
/// `category_code`/`category_name` are denormalized for display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub category_id: i64,
    #[serde(default)]
    pub category_code: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    pub question_text: String,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub result_count: usize,
}

impl Question {
    /// Display label used in selection widgets: `[CODE] text…`.
    ///
    /// The question text is truncated to 60 characters here and only here;
    /// the full-card view never truncates.
    pub fn picker_label(&self) -> String {
        let code = self.category_code.as_deref().unwrap_or("-");
        format!("[{}] {}", code, truncate_chars(&self.question_text, 60))
    }
}

/// One testable model identifier with its provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRef {
    pub name: String,
    pub provider: Provider,
}

impl ModelRef {
    /// Checkbox label: Hugging Face model ids drop the org prefix.
    pub fn short_name(&self) -> &str {
        match self.provider {
            Provider::Huggingface => self.name.rsplit('/').next().unwrap_or(&self.name),
            _ => &self.name,
        }
    }
}

/// `GET /api/models` reply. Refreshed once at startup and treated as
/// read-mostly for the session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelCatalog {
    #[serde(default)]
    pub gemini: Vec<String>,
    #[serde(default)]
    pub huggingface: Vec<String>,
    #[serde(default)]
    pub all: Vec<ModelRef>,
}

impl ModelCatalog {
    pub fn is_empty(&self) -> bool {
        self.all.is_empty() && self.gemini.is_empty() && self.huggingface.is_empty()
    }

    /// Flattened checkbox order: gemini first, then huggingface, matching
    /// the order the panel renders them in. Test dispatch follows this order.
    pub fn entries(&self) -> Vec<ModelRef> {
        let mut entries = Vec::with_capacity(self.gemini.len() + self.huggingface.len());
        for name in &self.gemini {
            entries.push(ModelRef {
                name: name.clone(),
                provider: Provider::Gemini,
            });
        }
        for name in &self.huggingface {
            entries.push(ModelRef {
                name: name.clone(),
                provider: Provider::Huggingface,
            });
        }
        entries
    }
}

/// A stored test record from `GET /api/results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub id: i64,
    pub question_id: i64,
    #[serde(default)]
    pub question_text: Option<String>,
    pub model_name: String,
    pub model_provider: Provider,
    pub response: String,
    pub response_time: f64,
    pub tested_at: NaiveDateTime,
}

/// Aggregate per-model statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStat {
    pub model_name: String,
    pub provider: Provider,
    pub test_count: u64,
    pub avg_response_time: f64,
}

/// `GET /api/stats` reply.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total_categories: u64,
    #[serde(default)]
    pub total_questions: u64,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub model_stats: Vec<ModelStat>,
}

/// Truncate to `max` characters, appending an ellipsis when shortened.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_wire_values() {
        assert_eq!(
            serde_json::to_string(&Provider::Gemini).unwrap(),
            "\"gemini\""
        );
        assert_eq!(
            serde_json::to_string(&Provider::Huggingface).unwrap(),
            "\"huggingface\""
        );

        let p: Provider = serde_json::from_str("\"gemini\"").unwrap();
        assert_eq!(p, Provider::Gemini);
        let p: Provider = serde_json::from_str("\"huggingface\"").unwrap();
        assert_eq!(p, Provider::Huggingface);
    }

    #[test]
    fn test_provider_unknown_value_is_preserved() {
        let p: Provider = serde_json::from_str("\"openai\"").unwrap();
        assert_eq!(p, Provider::Other("openai".to_string()));
        assert_eq!(p.label(), "openai");
        assert_eq!(p.as_str(), "openai");
    }

    #[test]
    fn test_provider_labels() {
        assert_eq!(Provider::Gemini.label(), "🌟 Gemini");
        assert_eq!(Provider::Huggingface.label(), "🤗 HuggingFace");
    }

    #[test]
    fn test_category_from_backend_json() {
        let json = r#"{
            "id": 1,
            "category_code": "SYN",
            "category_name": "Syntax",
            "description": null,
            "error_count": 3,
            "question_count": 2
        }"#;
        let c: Category = serde_json::from_str(json).unwrap();
        assert_eq!(c.category_code, "SYN");
        assert_eq!(c.error_count, 3);
        assert_eq!(c.question_count, 2);
        assert!(c.description.is_none());
    }

    #[test]
    fn test_question_from_backend_json() {
        // created_at is a naive isoformat timestamp, no timezone suffix
        let json = r#"{
            "id": 7,
            "category_id": 1,
            "category_name": "Syntax",
            "category_code": "SYN",
            "question_text": "Bu kodda hata var mı?",
            "created_at": "2026-08-01T14:30:00",
            "result_count": 4
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.id, 7);
        assert_eq!(q.category_code.as_deref(), Some("SYN"));
        assert_eq!(q.result_count, 4);
    }

    #[test]
    fn test_question_picker_label_truncates_to_sixty() {
        let long_text = "x".repeat(80);
        let q = Question {
            id: 1,
            category_id: 1,
            category_code: Some("SYN".to_string()),
            category_name: None,
            question_text: long_text,
            created_at: NaiveDateTime::parse_from_str("2026-08-01T00:00:00", "%Y-%m-%dT%H:%M:%S")
                .unwrap(),
            result_count: 0,
        };
        let label = q.picker_label();
        assert!(label.starts_with("[SYN] "));
        assert!(label.ends_with('…'));
        // "[SYN] " + 60 chars + ellipsis
        assert_eq!(label.chars().count(), 6 + 60 + 1);
    }

    #[test]
    fn test_model_ref_short_name() {
        let hf = ModelRef {
            name: "Qwen/Qwen2.5-Coder-32B-Instruct".to_string(),
            provider: Provider::Huggingface,
        };
        assert_eq!(hf.short_name(), "Qwen2.5-Coder-32B-Instruct");

        let gemini = ModelRef {
            name: "gemini-2.5-flash".to_string(),
            provider: Provider::Gemini,
        };
        assert_eq!(gemini.short_name(), "gemini-2.5-flash");
    }

    #[test]
    fn test_model_catalog_entries_order() {
        let catalog = ModelCatalog {
            gemini: vec!["gemini-2.5-flash-lite".into(), "gemini-2.5-flash".into()],
            huggingface: vec!["meta-llama/Llama-3.2-3B-Instruct".into()],
            all: vec![],
        };
        let entries = catalog.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].provider, Provider::Gemini);
        assert_eq!(entries[1].name, "gemini-2.5-flash");
        assert_eq!(entries[2].provider, Provider::Huggingface);
    }

    #[test]
    fn test_stats_defaults_when_fields_missing() {
        let stats: Stats = serde_json::from_str("{}").unwrap();
        assert_eq!(stats.total_categories, 0);
        assert!(stats.model_stats.is_empty());
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("kısa", 60), "kısa");
        let long = "a".repeat(61);
        let cut = truncate_chars(&long, 60);
        assert_eq!(cut.chars().count(), 61); // 60 kept + ellipsis
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("çağrı yığını", 5), "çağrı…");
    }
}
