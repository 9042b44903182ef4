//! Main update function: message dispatch (TEA)

use tracing::debug;

use crate::message::Message;
use crate::state::{AppState, UiMode, View};

use super::{data, keys, UpdateAction, UpdateResult};

/// Process one message against the state, returning follow-up work.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => keys::handle_key(state, key),

        Message::Tick => {
            state.on_tick();
            UpdateResult::none()
        }

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Bootstrap => {
            state.show_loading("Veriler yükleniyor...");
            let stats_generation = state.store.stats.begin_fetch();
            let models_generation = state.store.models.begin_fetch();
            UpdateResult::actions(vec![
                UpdateAction::LoadStats {
                    generation: stats_generation,
                },
                UpdateAction::LoadModels {
                    generation: models_generation,
                },
            ])
        }

        Message::SwitchView(view) => switch_view(state, view),

        // ─────────────────────────────────────────────────────
        // Loader completions
        // ─────────────────────────────────────────────────────
        Message::StatsLoaded { generation, stats } => data::handle_stats_loaded(state, generation, stats),
        Message::StatsLoadFailed { generation, error } => {
            data::handle_stats_load_failed(state, generation, error)
        }
        Message::ModelsLoaded {
            generation,
            catalog,
        } => data::handle_models_loaded(state, generation, catalog),
        Message::ModelsLoadFailed { generation, error } => {
            data::handle_models_load_failed(state, generation, error)
        }
        Message::CategoriesLoaded {
            generation,
            categories,
        } => data::handle_categories_loaded(state, generation, categories),
        Message::CategoriesLoadFailed { generation, error } => {
            data::handle_categories_load_failed(state, generation, error)
        }
        Message::QuestionsLoaded {
            generation,
            questions,
        } => data::handle_questions_loaded(state, generation, questions),
        Message::QuestionsLoadFailed { generation, error } => {
            data::handle_questions_load_failed(state, generation, error)
        }
        Message::ResultsLoaded {
            generation,
            results,
        } => data::handle_results_loaded(state, generation, results),
        Message::ResultsLoadFailed { generation, error } => {
            data::handle_results_load_failed(state, generation, error)
        }
        Message::CategoryDetailLoaded { generation, detail } => {
            data::handle_category_detail_loaded(state, generation, detail)
        }
        Message::CategoryDetailLoadFailed { generation, error } => {
            data::handle_category_detail_load_failed(state, generation, error)
        }

        // ─────────────────────────────────────────────────────
        // Mutations
        // ─────────────────────────────────────────────────────
        Message::QuestionCreated => data::handle_question_created(state),
        Message::QuestionCreateFailed { error } => data::handle_question_create_failed(state, error),

        Message::ConfirmedDeleteQuestion { question_id } => {
            state.show_loading("Soru siliniyor...");
            UpdateResult::action(UpdateAction::DeleteQuestion { question_id })
        }
        Message::QuestionDeleted => data::handle_question_deleted(state),
        Message::QuestionDeleteFailed { error } => data::handle_question_delete_failed(state, error),

        Message::ConfirmedDeleteResult { result_id } => {
            state.show_loading("Sonuç siliniyor...");
            UpdateResult::action(UpdateAction::DeleteResult { result_id })
        }
        Message::ResultDeleted => data::handle_result_deleted(state),
        Message::ResultDeleteFailed { error } => data::handle_result_delete_failed(state, error),

        // ─────────────────────────────────────────────────────
        // Test runner progress
        // ─────────────────────────────────────────────────────
        Message::TestModelStarted {
            index,
            total,
            model_name,
        } => {
            if let Some(ref mut run) = state.test_view.run {
                run.total = total;
                run.completed = index;
                run.current_model = Some(model_name.clone());
            }
            state.update_loading_message(&format!("Test: {model_name}..."));
            UpdateResult::none()
        }

        Message::TestCardReady { card } => {
            state.test_view.cards.push(card);
            if let Some(ref mut run) = state.test_view.run {
                run.completed += 1;
            }
            UpdateResult::none()
        }

        Message::TestRunFinished => {
            state.test_view.run = None;
            state.hide_loading();
            let generation = state.store.stats.begin_fetch();
            UpdateResult::action(UpdateAction::LoadStats { generation })
        }
    }
}

/// Activate a view and dispatch its loader.
///
/// Loaders re-fetch from the backend rather than trusting the store, except
/// the lazy fallbacks: the Questions/Test/Results views populate the
/// category/question stores only when they are empty.
pub(crate) fn switch_view(state: &mut AppState, view: View) -> UpdateResult {
    debug!("Switching view: {:?} -> {:?}", state.view, view);
    state.view = view;
    state.ui_mode = UiMode::Normal;

    let mut actions = Vec::new();
    match view {
        View::Dashboard => {
            actions.push(UpdateAction::LoadStats {
                generation: state.store.stats.begin_fetch(),
            });
        }
        View::Categories => {
            actions.push(UpdateAction::LoadCategories {
                generation: state.store.categories.begin_fetch(),
            });
        }
        View::Questions => {
            if state.store.categories.get().is_empty() {
                actions.push(UpdateAction::LoadCategories {
                    generation: state.store.categories.begin_fetch(),
                });
            }
            actions.push(UpdateAction::LoadQuestions {
                generation: state.store.questions.begin_fetch(),
                category_id: state.questions_view.filter,
            });
        }
        View::Test => {
            if state.store.questions.get().is_empty() {
                if state.store.categories.get().is_empty() {
                    actions.push(UpdateAction::LoadCategories {
                        generation: state.store.categories.begin_fetch(),
                    });
                }
                actions.push(UpdateAction::LoadQuestions {
                    generation: state.store.questions.begin_fetch(),
                    category_id: None,
                });
            }
        }
        View::Results => {
            if state.store.questions.get().is_empty() {
                actions.push(UpdateAction::LoadQuestions {
                    generation: state.store.questions.begin_fetch(),
                    category_id: None,
                });
            }
            actions.push(UpdateAction::LoadResults {
                generation: state.store.results.begin_fetch(),
                question_id: state.results_view.filter,
            });
        }
    }
    UpdateResult::actions(actions)
}
