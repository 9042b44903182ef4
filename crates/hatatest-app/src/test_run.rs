//! Test run progress and result cards
//!
//! One user-initiated run dispatches the selected question against each
//! selected model sequentially; every completed dispatch (success or
//! failure) becomes a [`TestCard`] appended to the output stream.

use hatatest_api::protocol::TestOutcome;
use hatatest_core::{Error, ModelRef, Provider};

/// Outcome half of a rendered result card.
#[derive(Debug, Clone, PartialEq)]
pub enum CardBody {
    Success {
        response: String,
        response_time: f64,
    },
    Failure {
        /// Full display message, e.g. `Hata: timeout` or
        /// `Bağlantı hatası: connection refused`.
        message: String,
    },
}

/// One streamed result card for a (question, model) dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCard {
    pub model_name: String,
    pub provider: Provider,
    pub body: CardBody,
}

impl TestCard {
    /// Card for a reply the backend produced (which may itself report a
    /// per-model failure via `success: false`).
    pub fn from_outcome(outcome: TestOutcome) -> Self {
        let body = if outcome.success {
            CardBody::Success {
                response: outcome.response.unwrap_or_default(),
                response_time: outcome.response_time.unwrap_or(0.0),
            }
        } else {
            CardBody::Failure {
                message: format!(
                    "Hata: {}",
                    outcome.error.unwrap_or_else(|| "Unknown error".to_string())
                ),
            }
        };
        Self {
            model_name: outcome.model_name,
            provider: outcome.provider,
            body,
        }
    }

    /// Locally-built card for a transport failure; the remaining models in
    /// the run are unaffected.
    pub fn connect_failure(model: &ModelRef, error: &Error) -> Self {
        Self {
            model_name: model.name.clone(),
            provider: model.provider.clone(),
            body: CardBody::Failure {
                message: format!("Bağlantı hatası: {error}"),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.body, CardBody::Success { .. })
    }
}

/// Progress of the run currently in flight.
#[derive(Debug, Clone, Default)]
pub struct TestRunState {
    pub total: usize,
    pub completed: usize,
    pub current_model: Option<String>,
}

impl TestRunState {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            completed: 0,
            current_model: None,
        }
    }
}
