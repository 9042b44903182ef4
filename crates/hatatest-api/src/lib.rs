//! # hatatest-api - Backend REST Client
//!
//! Outbound HTTP for the dashboard: a thin [`ApiClient`] over reqwest plus
//! the typed wire payloads (`protocol`). The test-dispatch surface is also
//! expressed as the [`QaBackend`] trait so the sequential test runner (and
//! its tests) do not depend on the HTTP transport.

pub mod client;
pub mod protocol;

use hatatest_core::Result;
use protocol::{TestOutcome, TestRequest};

/// Test dispatch seam used by the sequential runner.
///
/// `QaBackend` is the Send variant used by the background tasks;
/// [`ApiClient`] is the production implementation and tests substitute
/// scripted doubles.
#[trait_variant::make(QaBackend: Send)]
pub trait LocalQaBackend {
    /// Dispatch one question against one model and await the outcome.
    async fn run_test(&self, request: &TestRequest) -> Result<TestOutcome>;
}

pub use client::ApiClient;
pub use protocol::{CreatedQuestion, NewQuestion};
