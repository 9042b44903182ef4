//! Loader and mutation completion handlers
//!
//! Every loader completion carries the generation issued at fetch time;
//! the store rejects stale ones, which is logged and otherwise ignored.

use tracing::{debug, warn};

use hatatest_core::{Category, CategoryDetail, ModelCatalog, Question, Stats, TestResult};

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub(super) fn handle_stats_loaded(
    state: &mut AppState,
    generation: u64,
    stats: Stats,
) -> UpdateResult {
    if !state.store.stats.complete(generation, stats) {
        debug!("Discarding stale stats reply (generation {generation})");
    }
    state.maybe_finish_bootstrap();
    UpdateResult::none()
}

pub(super) fn handle_stats_load_failed(
    state: &mut AppState,
    generation: u64,
    error: String,
) -> UpdateResult {
    warn!("Stats load failed: {error}");
    if state.store.stats.fail(generation) {
        state.notify_error("İstatistikler yüklenemedi");
    }
    state.maybe_finish_bootstrap();
    UpdateResult::none()
}

pub(super) fn handle_models_loaded(
    state: &mut AppState,
    generation: u64,
    catalog: ModelCatalog,
) -> UpdateResult {
    if state.store.models.complete(generation, catalog) {
        let entry_count = state.model_entries().len();
        state.test_view.selection.clamp(entry_count);
    } else {
        debug!("Discarding stale model catalog reply (generation {generation})");
    }
    state.maybe_finish_bootstrap();
    UpdateResult::none()
}

pub(super) fn handle_models_load_failed(
    state: &mut AppState,
    generation: u64,
    error: String,
) -> UpdateResult {
    warn!("Model catalog load failed: {error}");
    if state.store.models.fail(generation) {
        state.notify_error("Modeller yüklenemedi");
    }
    state.maybe_finish_bootstrap();
    UpdateResult::none()
}

pub(super) fn handle_categories_loaded(
    state: &mut AppState,
    generation: u64,
    categories: Vec<Category>,
) -> UpdateResult {
    if state.store.categories.complete(generation, categories) {
        let count = state.store.categories.get().len();
        clamp_selection(&mut state.categories_view.selected, count);
        // The expanded card may be gone after a reload.
        let expanded_id = state.categories_view.expanded.as_ref().map(|d| d.id);
        if let Some(id) = expanded_id {
            let still_present = state
                .store
                .categories
                .get()
                .iter()
                .any(|category| category.id == id);
            if !still_present {
                state.categories_view.collapse();
            }
        }
        if let Some(ref mut form) = state.question_form {
            if count > 0 && form.category_idx >= count {
                form.category_idx = count - 1;
            }
        }
    } else {
        debug!("Discarding stale categories reply (generation {generation})");
    }
    UpdateResult::none()
}

pub(super) fn handle_categories_load_failed(
    state: &mut AppState,
    generation: u64,
    error: String,
) -> UpdateResult {
    warn!("Categories load failed: {error}");
    if state.store.categories.fail(generation) {
        state.notify_error("Kategoriler yüklenemedi");
    }
    UpdateResult::none()
}

pub(super) fn handle_questions_loaded(
    state: &mut AppState,
    generation: u64,
    questions: Vec<Question>,
) -> UpdateResult {
    if state.store.questions.complete(generation, questions) {
        let count = state.store.questions.get().len();
        clamp_selection(&mut state.questions_view.selected, count);
        if let Some(idx) = state.test_view.question_idx {
            if idx >= count {
                state.test_view.question_idx = None;
            }
        }
    } else {
        debug!("Discarding stale questions reply (generation {generation})");
    }
    UpdateResult::none()
}

pub(super) fn handle_questions_load_failed(
    state: &mut AppState,
    generation: u64,
    error: String,
) -> UpdateResult {
    warn!("Questions load failed: {error}");
    if state.store.questions.fail(generation) {
        state.notify_error("Sorular yüklenemedi");
    }
    UpdateResult::none()
}

pub(super) fn handle_results_loaded(
    state: &mut AppState,
    generation: u64,
    results: Vec<TestResult>,
) -> UpdateResult {
    if state.store.results.complete(generation, results) {
        let count = state.store.results.get().len();
        clamp_selection(&mut state.results_view.selected, count);
    } else {
        debug!("Discarding stale results reply (generation {generation})");
    }
    UpdateResult::none()
}

pub(super) fn handle_results_load_failed(
    state: &mut AppState,
    generation: u64,
    error: String,
) -> UpdateResult {
    warn!("Results load failed: {error}");
    if state.store.results.fail(generation) {
        state.notify_error("Sonuçlar yüklenemedi");
    }
    UpdateResult::none()
}

pub(super) fn handle_category_detail_loaded(
    state: &mut AppState,
    generation: u64,
    detail: CategoryDetail,
) -> UpdateResult {
    if !state.categories_view.accept_detail(generation, detail) {
        debug!("Discarding stale category detail reply (generation {generation})");
    }
    UpdateResult::none()
}

pub(super) fn handle_category_detail_load_failed(
    state: &mut AppState,
    generation: u64,
    error: String,
) -> UpdateResult {
    warn!("Category detail load failed: {error}");
    if state.categories_view.fail_detail(generation) {
        state.notify_error("Hata tipleri yüklenemedi");
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────
// Mutation completions
// ─────────────────────────────────────────────────────────────

/// Close the modal, drop its text buffer, and reflect the new counts by
/// reloading both the question list and the aggregate stats.
pub(super) fn handle_question_created(state: &mut AppState) -> UpdateResult {
    state.question_form = None;
    state.ui_mode = crate::state::UiMode::Normal;
    state.hide_loading();
    UpdateResult::actions(vec![
        UpdateAction::LoadQuestions {
            generation: state.store.questions.begin_fetch(),
            category_id: state.questions_view.filter,
        },
        UpdateAction::LoadStats {
            generation: state.store.stats.begin_fetch(),
        },
    ])
}

pub(super) fn handle_question_create_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Question create failed: {error}");
    state.hide_loading();
    // The modal stays open so the input is not lost.
    state.notify_error("Soru eklenirken hata oluştu!");
    UpdateResult::none()
}

pub(super) fn handle_question_deleted(state: &mut AppState) -> UpdateResult {
    state.hide_loading();
    UpdateResult::actions(vec![
        UpdateAction::LoadQuestions {
            generation: state.store.questions.begin_fetch(),
            category_id: state.questions_view.filter,
        },
        UpdateAction::LoadStats {
            generation: state.store.stats.begin_fetch(),
        },
    ])
}

pub(super) fn handle_question_delete_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Question delete failed: {error}");
    state.hide_loading();
    state.notify_error("Soru silinirken hata oluştu!");
    UpdateResult::none()
}

pub(super) fn handle_result_deleted(state: &mut AppState) -> UpdateResult {
    state.hide_loading();
    UpdateResult::actions(vec![
        UpdateAction::LoadResults {
            generation: state.store.results.begin_fetch(),
            question_id: state.results_view.filter,
        },
        UpdateAction::LoadStats {
            generation: state.store.stats.begin_fetch(),
        },
    ])
}

pub(super) fn handle_result_delete_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Result delete failed: {error}");
    state.hide_loading();
    state.notify_error("Sonuç silinirken hata oluştu!");
    UpdateResult::none()
}

fn clamp_selection(selected: &mut usize, count: usize) {
    if count == 0 {
        *selected = 0;
    } else if *selected >= count {
        *selected = count - 1;
    }
}
