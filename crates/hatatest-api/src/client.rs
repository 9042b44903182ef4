//! HTTP client for the test backend
//!
//! Thin wrapper over reqwest. Every request carries a JSON content-type;
//! non-2xx statuses surface as [`Error::Http`] with the numeric status and
//! the body is never inspected. One attempt per call: no retries, no
//! backoff, no client-side timeout.

use reqwest::header;
use serde::de::DeserializeOwned;
use serde::Serialize;

use hatatest_core::prelude::*;
use hatatest_core::{Category, CategoryDetail, ModelCatalog, Question, Stats, TestResult};

use crate::protocol::{CreatedQuestion, NewQuestion, TestOutcome, TestRequest};
use crate::QaBackend;

/// Client for the dashboard backend REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. `http://127.0.0.1:8000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: reqwest::RequestBuilder) -> Result<T> {
        let response = builder
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| Error::connect(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::protocol(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send_json(self.http.get(self.url(path))).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        self.send_json(self.http.post(self.url(path)).json(body))
            .await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.url(path))
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| Error::connect(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http(status.as_u16()));
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Endpoints
    // ─────────────────────────────────────────────────────────

    pub async fn fetch_stats(&self) -> Result<Stats> {
        self.get_json("/api/stats").await
    }

    pub async fn fetch_models(&self) -> Result<ModelCatalog> {
        self.get_json("/api/models").await
    }

    pub async fn fetch_categories(&self) -> Result<Vec<Category>> {
        self.get_json("/api/categories").await
    }

    pub async fn fetch_category(&self, category_id: i64) -> Result<CategoryDetail> {
        self.get_json(&format!("/api/categories/{category_id}"))
            .await
    }

    pub async fn fetch_questions(&self, category_id: Option<i64>) -> Result<Vec<Question>> {
        let path = match category_id {
            Some(id) => format!("/api/questions?category_id={id}"),
            None => "/api/questions".to_string(),
        };
        self.get_json(&path).await
    }

    pub async fn create_question(&self, question: &NewQuestion) -> Result<CreatedQuestion> {
        let created: CreatedQuestion = self.post_json("/api/questions", question).await?;
        debug!("Created question {} in category {}", created.id, created.category_id);
        Ok(created)
    }

    pub async fn delete_question(&self, question_id: i64) -> Result<()> {
        self.delete(&format!("/api/questions/{question_id}")).await
    }

    pub async fn fetch_results(&self, question_id: Option<i64>) -> Result<Vec<TestResult>> {
        let path = match question_id {
            Some(id) => format!("/api/results?question_id={id}"),
            None => "/api/results".to_string(),
        };
        self.get_json(&path).await
    }

    pub async fn delete_result(&self, result_id: i64) -> Result<()> {
        self.delete(&format!("/api/results/{result_id}")).await
    }
}

impl QaBackend for ApiClient {
    async fn run_test(&self, request: &TestRequest) -> Result<TestOutcome> {
        self.post_json("/api/test", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/api/stats"), "http://localhost:8000/api/stats");
    }

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://10.0.0.5:9001");
        assert_eq!(
            client.url("/api/categories/3"),
            "http://10.0.0.5:9001/api/categories/3"
        );
    }

    #[test]
    fn test_question_query_paths() {
        // Mirrors the paths fetch_questions builds
        let with_filter = format!("/api/questions?category_id={}", 5);
        assert_eq!(with_filter, "/api/questions?category_id=5");
        let without = "/api/questions".to_string();
        assert_eq!(without, "/api/questions");
    }
}
