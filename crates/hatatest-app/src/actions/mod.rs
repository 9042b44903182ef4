//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action becomes one tokio task that talks to the backend and
//! reports back through the message channel. Exactly one attempt per call;
//! failures are surfaced as messages, never panics.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::warn;

use hatatest_api::protocol::TestRequest;
use hatatest_api::{ApiClient, NewQuestion, QaBackend};
use hatatest_core::ModelRef;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::test_run::TestCard;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, api: &Arc<ApiClient>, msg_tx: &mpsc::Sender<Message>) {
    let api = Arc::clone(api);
    let tx = msg_tx.clone();

    match action {
        UpdateAction::LoadStats { generation } => {
            tokio::spawn(async move {
                match api.fetch_stats().await {
                    Ok(stats) => {
                        let _ = tx.send(Message::StatsLoaded { generation, stats }).await;
                    }
                    Err(e) => {
                        let _ = tx
                            .send(Message::StatsLoadFailed {
                                generation,
                                error: e.to_string(),
                            })
                            .await;
                    }
                }
            });
        }

        UpdateAction::LoadModels { generation } => {
            tokio::spawn(async move {
                match api.fetch_models().await {
                    Ok(catalog) => {
                        let _ = tx
                            .send(Message::ModelsLoaded {
                                generation,
                                catalog,
                            })
                            .await;
                    }
                    Err(e) => {
                        let _ = tx
                            .send(Message::ModelsLoadFailed {
                                generation,
                                error: e.to_string(),
                            })
                            .await;
                    }
                }
            });
        }

        UpdateAction::LoadCategories { generation } => {
            tokio::spawn(async move {
                match api.fetch_categories().await {
                    Ok(categories) => {
                        let _ = tx
                            .send(Message::CategoriesLoaded {
                                generation,
                                categories,
                            })
                            .await;
                    }
                    Err(e) => {
                        let _ = tx
                            .send(Message::CategoriesLoadFailed {
                                generation,
                                error: e.to_string(),
                            })
                            .await;
                    }
                }
            });
        }

        UpdateAction::LoadQuestions {
            generation,
            category_id,
        } => {
            tokio::spawn(async move {
                match api.fetch_questions(category_id).await {
                    Ok(questions) => {
                        let _ = tx
                            .send(Message::QuestionsLoaded {
                                generation,
                                questions,
                            })
                            .await;
                    }
                    Err(e) => {
                        let _ = tx
                            .send(Message::QuestionsLoadFailed {
                                generation,
                                error: e.to_string(),
                            })
                            .await;
                    }
                }
            });
        }

        UpdateAction::LoadResults {
            generation,
            question_id,
        } => {
            tokio::spawn(async move {
                match api.fetch_results(question_id).await {
                    Ok(results) => {
                        let _ = tx
                            .send(Message::ResultsLoaded {
                                generation,
                                results,
                            })
                            .await;
                    }
                    Err(e) => {
                        let _ = tx
                            .send(Message::ResultsLoadFailed {
                                generation,
                                error: e.to_string(),
                            })
                            .await;
                    }
                }
            });
        }

        UpdateAction::LoadCategoryDetail {
            generation,
            category_id,
        } => {
            tokio::spawn(async move {
                match api.fetch_category(category_id).await {
                    Ok(detail) => {
                        let _ = tx
                            .send(Message::CategoryDetailLoaded { generation, detail })
                            .await;
                    }
                    Err(e) => {
                        let _ = tx
                            .send(Message::CategoryDetailLoadFailed {
                                generation,
                                error: e.to_string(),
                            })
                            .await;
                    }
                }
            });
        }

        UpdateAction::SubmitQuestion {
            category_id,
            question_text,
        } => {
            tokio::spawn(async move {
                let body = NewQuestion {
                    category_id,
                    question_text,
                };
                match api.create_question(&body).await {
                    Ok(_) => {
                        let _ = tx.send(Message::QuestionCreated).await;
                    }
                    Err(e) => {
                        let _ = tx
                            .send(Message::QuestionCreateFailed {
                                error: e.to_string(),
                            })
                            .await;
                    }
                }
            });
        }

        UpdateAction::DeleteQuestion { question_id } => {
            tokio::spawn(async move {
                match api.delete_question(question_id).await {
                    Ok(()) => {
                        let _ = tx.send(Message::QuestionDeleted).await;
                    }
                    Err(e) => {
                        let _ = tx
                            .send(Message::QuestionDeleteFailed {
                                error: e.to_string(),
                            })
                            .await;
                    }
                }
            });
        }

        UpdateAction::DeleteResult { result_id } => {
            tokio::spawn(async move {
                match api.delete_result(result_id).await {
                    Ok(()) => {
                        let _ = tx.send(Message::ResultDeleted).await;
                    }
                    Err(e) => {
                        let _ = tx
                            .send(Message::ResultDeleteFailed {
                                error: e.to_string(),
                            })
                            .await;
                    }
                }
            });
        }

        UpdateAction::RunTests {
            question_id,
            models,
        } => {
            tokio::spawn(async move {
                run_tests(api.as_ref(), &tx, question_id, models).await;
            });
        }
    }
}

/// Sequential test runner.
///
/// Dispatches the question against each model in selection order, awaiting
/// every reply before starting the next call. This bounds backend load from
/// a single user action and streams cards in a stable order; do not turn
/// this into concurrent dispatch.
///
/// A per-model transport failure produces a locally-built error card and the
/// loop continues with the remaining models.
pub async fn run_tests<B: QaBackend + Sync>(
    backend: &B,
    msg_tx: &mpsc::Sender<Message>,
    question_id: i64,
    models: Vec<ModelRef>,
) {
    let total = models.len();
    for (index, model) in models.into_iter().enumerate() {
        let _ = msg_tx
            .send(Message::TestModelStarted {
                index,
                total,
                model_name: model.name.clone(),
            })
            .await;

        let request = TestRequest {
            question_id,
            model_name: model.name.clone(),
            provider: model.provider.clone(),
        };

        let card = match backend.run_test(&request).await {
            Ok(outcome) => TestCard::from_outcome(outcome),
            Err(e) => {
                warn!("Test dispatch failed for {}: {e}", model.name);
                TestCard::connect_failure(&model, &e)
            }
        };

        let _ = msg_tx.send(Message::TestCardReady { card }).await;
    }

    let _ = msg_tx.send(Message::TestRunFinished).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    use hatatest_api::protocol::TestOutcome;
    use hatatest_core::{Error, Provider, Result};

    use crate::test_run::CardBody;

    /// Recorded call window of one scripted dispatch.
    struct CallWindow {
        model_name: String,
        started: Instant,
        finished: Instant,
    }

    /// Hand-written backend double: pops one scripted reply per call and
    /// records when each call was in flight.
    struct ScriptedBackend {
        replies: Mutex<VecDeque<Result<TestOutcome>>>,
        calls: Mutex<Vec<CallWindow>>,
    }

    impl ScriptedBackend {
        fn new(replies: Vec<Result<TestOutcome>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl QaBackend for ScriptedBackend {
        async fn run_test(&self, request: &TestRequest) -> Result<TestOutcome> {
            let started = Instant::now();
            tokio::time::sleep(Duration::from_millis(15)).await;
            let reply = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("more calls than scripted replies");
            self.calls.lock().unwrap().push(CallWindow {
                model_name: request.model_name.clone(),
                started,
                finished: Instant::now(),
            });
            reply
        }
    }

    fn success_outcome(model_name: &str, provider: Provider, response_time: f64) -> TestOutcome {
        TestOutcome {
            success: true,
            result_id: Some(1),
            model_name: model_name.to_string(),
            provider,
            response: Some("ok".to_string()),
            response_time: Some(response_time),
            error: None,
        }
    }

    fn failed_outcome(model_name: &str, provider: Provider, error: &str) -> TestOutcome {
        TestOutcome {
            success: false,
            result_id: None,
            model_name: model_name.to_string(),
            provider,
            response: None,
            response_time: None,
            error: Some(error.to_string()),
        }
    }

    fn model(name: &str, provider: Provider) -> ModelRef {
        ModelRef {
            name: name.to_string(),
            provider,
        }
    }

    async fn drain(rx: &mut mpsc::Receiver<Message>) -> Vec<Message> {
        let mut messages = Vec::new();
        while let Ok(message) = rx.try_recv() {
            messages.push(message);
        }
        messages
    }

    #[tokio::test]
    async fn test_runner_issues_exactly_n_sequential_calls() {
        let backend = ScriptedBackend::new(vec![
            Ok(success_outcome("m1", Provider::Gemini, 0.5)),
            Ok(success_outcome("m2", Provider::Gemini, 0.6)),
            Ok(success_outcome("m3", Provider::Huggingface, 0.7)),
        ]);
        let (tx, mut rx) = mpsc::channel(64);

        let models = vec![
            model("m1", Provider::Gemini),
            model("m2", Provider::Gemini),
            model("m3", Provider::Huggingface),
        ];
        run_tests(&backend, &tx, 7, models).await;

        let calls = backend.calls.lock().unwrap();
        assert_eq!(calls.len(), 3);

        // Dispatch order matches selection order.
        let names: Vec<&str> = calls.iter().map(|c| c.model_name.as_str()).collect();
        assert_eq!(names, vec!["m1", "m2", "m3"]);

        // Call windows are strictly increasing and non-overlapping: each
        // call finishes before the next one begins.
        for pair in calls.windows(2) {
            assert!(
                pair[0].finished <= pair[1].started,
                "calls overlapped: {} vs {}",
                pair[0].model_name,
                pair[1].model_name
            );
        }
        drop(calls);

        // One card per model, in order, then the finish marker.
        let messages = drain(&mut rx).await;
        let cards: Vec<&TestCard> = messages
            .iter()
            .filter_map(|m| match m {
                Message::TestCardReady { card } => Some(card),
                _ => None,
            })
            .collect();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].model_name, "m1");
        assert_eq!(cards[2].model_name, "m3");
        assert!(matches!(messages.last(), Some(Message::TestRunFinished)));
    }

    #[tokio::test]
    async fn test_runner_transport_failure_does_not_abort_remaining_models() {
        let backend = ScriptedBackend::new(vec![
            Ok(success_outcome("m1", Provider::Gemini, 0.5)),
            Err(Error::connect("connection refused")),
            Ok(success_outcome("m3", Provider::Huggingface, 0.7)),
        ]);
        let (tx, mut rx) = mpsc::channel(64);

        let models = vec![
            model("m1", Provider::Gemini),
            model("m2", Provider::Huggingface),
            model("m3", Provider::Huggingface),
        ];
        run_tests(&backend, &tx, 7, models).await;

        // All three models were attempted despite the failure in the middle.
        assert_eq!(backend.calls.lock().unwrap().len(), 3);

        let messages = drain(&mut rx).await;
        let cards: Vec<&TestCard> = messages
            .iter()
            .filter_map(|m| match m {
                Message::TestCardReady { card } => Some(card),
                _ => None,
            })
            .collect();
        assert_eq!(cards.len(), 3);

        // The failed model's card names the provider and connectivity.
        let failed = cards[1];
        assert_eq!(failed.model_name, "m2");
        assert_eq!(failed.provider, Provider::Huggingface);
        match &failed.body {
            CardBody::Failure { message } => {
                assert!(message.contains("Bağlantı hatası"));
            }
            CardBody::Success { .. } => panic!("expected failure card"),
        }
    }

    #[tokio::test]
    async fn test_runner_example_scenario_success_then_backend_failure() {
        // Question 7 against ["gemini-pro", "org/model-a"]: the first
        // succeeds in 1.2s, the second fails with "timeout".
        let backend = ScriptedBackend::new(vec![
            Ok(success_outcome("gemini-pro", Provider::Gemini, 1.2)),
            Ok(failed_outcome("org/model-a", Provider::Huggingface, "timeout")),
        ]);
        let (tx, mut rx) = mpsc::channel(64);

        let models = vec![
            model("gemini-pro", Provider::Gemini),
            model("org/model-a", Provider::Huggingface),
        ];
        run_tests(&backend, &tx, 7, models).await;

        let messages = drain(&mut rx).await;
        let cards: Vec<&TestCard> = messages
            .iter()
            .filter_map(|m| match m {
                Message::TestCardReady { card } => Some(card),
                _ => None,
            })
            .collect();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].model_name, "gemini-pro");
        assert_eq!(
            cards[0].body,
            CardBody::Success {
                response: "ok".to_string(),
                response_time: 1.2
            }
        );
        assert_eq!(cards[1].model_name, "org/model-a");
        assert_eq!(
            cards[1].body,
            CardBody::Failure {
                message: "Hata: timeout".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_runner_reports_progress_before_each_dispatch() {
        let backend = ScriptedBackend::new(vec![
            Ok(success_outcome("m1", Provider::Gemini, 0.5)),
            Ok(success_outcome("m2", Provider::Gemini, 0.5)),
        ]);
        let (tx, mut rx) = mpsc::channel(64);

        run_tests(
            &backend,
            &tx,
            1,
            vec![model("m1", Provider::Gemini), model("m2", Provider::Gemini)],
        )
        .await;

        let messages = drain(&mut rx).await;
        // Started(0), Card, Started(1), Card, Finished
        assert!(matches!(
            &messages[0],
            Message::TestModelStarted { index: 0, total: 2, model_name } if model_name == "m1"
        ));
        assert!(matches!(&messages[1], Message::TestCardReady { .. }));
        assert!(matches!(
            &messages[2],
            Message::TestModelStarted { index: 1, total: 2, model_name } if model_name == "m2"
        ));
        assert!(matches!(&messages[3], Message::TestCardReady { .. }));
        assert!(matches!(&messages[4], Message::TestRunFinished));
    }
}
