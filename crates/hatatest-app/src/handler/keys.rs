//! Key event handlers for UI modes and views

use crate::confirm_dialog::ConfirmDialogState;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::question_form::{FormField, QuestionFormState};
use crate::state::{AppState, UiMode, View};
use crate::test_run::TestRunState;

use super::{update::switch_view, UpdateAction, UpdateResult};

/// Route a key press to the overlay or view that owns the keyboard.
pub fn handle_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match state.ui_mode {
        UiMode::ConfirmDialog => handle_confirm_key(state, key),
        UiMode::QuestionForm => handle_form_key(state, key),
        UiMode::Normal => handle_normal_key(state, key),
    }
}

// ─────────────────────────────────────────────────────────────
// Normal mode
// ─────────────────────────────────────────────────────────────

fn handle_normal_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => UpdateResult::message(Message::Quit),

        InputKey::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            match View::from_index(index) {
                Some(view) => UpdateResult::message(Message::SwitchView(view)),
                None => UpdateResult::none(),
            }
        }

        InputKey::Tab => UpdateResult::message(Message::SwitchView(state.view.next())),
        InputKey::BackTab => UpdateResult::message(Message::SwitchView(state.view.prev())),

        // Re-run the active view's loader
        InputKey::Char('r') => switch_view(state, state.view),

        _ => match state.view {
            View::Dashboard => UpdateResult::none(),
            View::Categories => handle_categories_key(state, key),
            View::Questions => handle_questions_key(state, key),
            View::Test => handle_test_key(state, key),
            View::Results => handle_results_key(state, key),
        },
    }
}

fn handle_categories_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    let count = state.store.categories.get().len();
    match key {
        InputKey::Up => {
            state.categories_view.selected = state.categories_view.selected.saturating_sub(1);
            UpdateResult::none()
        }
        InputKey::Down => {
            if count > 0 && state.categories_view.selected + 1 < count {
                state.categories_view.selected += 1;
            }
            UpdateResult::none()
        }
        InputKey::Enter => toggle_category_expansion(state),
        _ => UpdateResult::none(),
    }
}

/// Expand the selected card (lazy error-type fetch) or collapse it again.
fn toggle_category_expansion(state: &mut AppState) -> UpdateResult {
    let target = state
        .store
        .categories
        .get()
        .get(state.categories_view.selected)
        .map(|category| category.id);
    let Some(category_id) = target else {
        return UpdateResult::none();
    };

    if state.categories_view.expanded.as_ref().map(|d| d.id) == Some(category_id) {
        state.categories_view.collapse();
        UpdateResult::none()
    } else {
        let generation = state.categories_view.begin_detail_fetch();
        UpdateResult::action(UpdateAction::LoadCategoryDetail {
            generation,
            category_id,
        })
    }
}

fn handle_questions_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    let count = state.store.questions.get().len();
    match key {
        InputKey::Up => {
            state.questions_view.selected = state.questions_view.selected.saturating_sub(1);
            UpdateResult::none()
        }
        InputKey::Down => {
            if count > 0 && state.questions_view.selected + 1 < count {
                state.questions_view.selected += 1;
            }
            UpdateResult::none()
        }
        InputKey::Char('n') => open_question_form(state),
        InputKey::Char('d') => request_delete_question(state),
        InputKey::Char('t') => quick_test(state),
        InputKey::Char('f') => cycle_question_filter(state),
        _ => UpdateResult::none(),
    }
}

/// Guard: the add-question modal needs categories for its picker. An empty
/// store refuses the action with a notice; it does not auto-fetch.
fn open_question_form(state: &mut AppState) -> UpdateResult {
    if state.store.categories.get().is_empty() {
        state.notify_error("Önce kategoriler yüklenmelidir!");
        return UpdateResult::none();
    }
    state.question_form = Some(QuestionFormState::new());
    state.ui_mode = UiMode::QuestionForm;
    UpdateResult::none()
}

fn request_delete_question(state: &mut AppState) -> UpdateResult {
    let target = state
        .store
        .questions
        .get()
        .get(state.questions_view.selected)
        .map(|question| question.id);
    let Some(question_id) = target else {
        return UpdateResult::none();
    };

    if state.settings.behavior.confirm_delete {
        state.confirm_dialog = Some(ConfirmDialogState::delete_question(question_id));
        state.ui_mode = UiMode::ConfirmDialog;
        UpdateResult::none()
    } else {
        UpdateResult::message(Message::ConfirmedDeleteQuestion { question_id })
    }
}

/// Jump to the Test view with the selected question preloaded.
fn quick_test(state: &mut AppState) -> UpdateResult {
    let index = state.questions_view.selected;
    if state.store.questions.get().get(index).is_none() {
        return UpdateResult::none();
    }
    state.test_view.question_idx = Some(index);
    UpdateResult::message(Message::SwitchView(View::Test))
}

fn cycle_question_filter(state: &mut AppState) -> UpdateResult {
    let ids: Vec<i64> = state
        .store
        .categories
        .get()
        .iter()
        .map(|category| category.id)
        .collect();
    state.questions_view.filter = next_filter(state.questions_view.filter, &ids);
    state.questions_view.selected = 0;
    let generation = state.store.questions.begin_fetch();
    UpdateResult::action(UpdateAction::LoadQuestions {
        generation,
        category_id: state.questions_view.filter,
    })
}

fn handle_test_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    let entry_count = state.model_entries().len();
    match key {
        InputKey::Up => {
            state.test_view.selection.move_up();
            UpdateResult::none()
        }
        InputKey::Down => {
            state.test_view.selection.move_down(entry_count);
            UpdateResult::none()
        }
        InputKey::Char(' ') => {
            if entry_count > 0 {
                state.test_view.selection.toggle_cursor();
            }
            UpdateResult::none()
        }
        InputKey::Char('a') => {
            state.test_view.selection.select_all(entry_count);
            UpdateResult::none()
        }
        InputKey::Char('c') => {
            state.test_view.selection.clear();
            UpdateResult::none()
        }
        InputKey::Left => {
            state.cycle_test_question(false);
            UpdateResult::none()
        }
        InputKey::Right => {
            state.cycle_test_question(true);
            UpdateResult::none()
        }
        InputKey::Enter => start_test_run(state),
        _ => UpdateResult::none(),
    }
}

/// Validate the preconditions and kick off the sequential run.
fn start_test_run(state: &mut AppState) -> UpdateResult {
    if state.test_view.run.is_some() {
        return UpdateResult::none();
    }
    let Some(question_id) = state.test_question().map(|question| question.id) else {
        state.notify_error("Lütfen bir soru seçin!");
        return UpdateResult::none();
    };
    let entries = state.model_entries();
    let models = state.test_view.selection.selected_models(&entries);
    if models.is_empty() {
        state.notify_error("Lütfen en az bir model seçin!");
        return UpdateResult::none();
    }

    state.test_view.cards.clear();
    state.test_view.run = Some(TestRunState::new(models.len()));
    state.show_loading("Testler çalıştırılıyor...");
    UpdateResult::action(UpdateAction::RunTests {
        question_id,
        models,
    })
}

fn handle_results_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    let count = state.store.results.get().len();
    match key {
        InputKey::Up => {
            state.results_view.selected = state.results_view.selected.saturating_sub(1);
            UpdateResult::none()
        }
        InputKey::Down => {
            if count > 0 && state.results_view.selected + 1 < count {
                state.results_view.selected += 1;
            }
            UpdateResult::none()
        }
        InputKey::Char('d') => request_delete_result(state),
        InputKey::Char('f') => cycle_result_filter(state),
        _ => UpdateResult::none(),
    }
}

fn request_delete_result(state: &mut AppState) -> UpdateResult {
    let target = state
        .store
        .results
        .get()
        .get(state.results_view.selected)
        .map(|result| result.id);
    let Some(result_id) = target else {
        return UpdateResult::none();
    };

    if state.settings.behavior.confirm_delete {
        state.confirm_dialog = Some(ConfirmDialogState::delete_result(result_id));
        state.ui_mode = UiMode::ConfirmDialog;
        UpdateResult::none()
    } else {
        UpdateResult::message(Message::ConfirmedDeleteResult { result_id })
    }
}

fn cycle_result_filter(state: &mut AppState) -> UpdateResult {
    let ids: Vec<i64> = state
        .store
        .questions
        .get()
        .iter()
        .map(|question| question.id)
        .collect();
    state.results_view.filter = next_filter(state.results_view.filter, &ids);
    state.results_view.selected = 0;
    let generation = state.store.results.begin_fetch();
    UpdateResult::action(UpdateAction::LoadResults {
        generation,
        question_id: state.results_view.filter,
    })
}

/// Cycle: all → first id → … → last id → all.
fn next_filter(current: Option<i64>, ids: &[i64]) -> Option<i64> {
    match current {
        None => ids.first().copied(),
        Some(current) => match ids.iter().position(|&id| id == current) {
            Some(position) if position + 1 < ids.len() => Some(ids[position + 1]),
            _ => None,
        },
    }
}

// ─────────────────────────────────────────────────────────────
// Confirm dialog mode
// ─────────────────────────────────────────────────────────────

fn handle_confirm_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Char('y') | InputKey::Enter => {
            state.ui_mode = UiMode::Normal;
            match state.confirm_dialog.take() {
                Some(dialog) => UpdateResult::message(dialog.on_confirm),
                None => UpdateResult::none(),
            }
        }
        InputKey::Char('n') | InputKey::Esc => {
            state.confirm_dialog = None;
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }
        _ => UpdateResult::none(),
    }
}

// ─────────────────────────────────────────────────────────────
// Add-question form mode
// ─────────────────────────────────────────────────────────────

fn handle_form_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Esc => {
            state.question_form = None;
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }
        InputKey::Tab | InputKey::BackTab => {
            if let Some(ref mut form) = state.question_form {
                form.next_field();
            }
            UpdateResult::none()
        }
        InputKey::Enter => submit_question_form(state),
        InputKey::Up => {
            if let Some(ref mut form) = state.question_form {
                if form.focus == FormField::Category {
                    form.category_up();
                }
            }
            UpdateResult::none()
        }
        InputKey::Down => {
            let count = state.store.categories.get().len();
            if let Some(ref mut form) = state.question_form {
                if form.focus == FormField::Category {
                    form.category_down(count);
                }
            }
            UpdateResult::none()
        }
        InputKey::Backspace => {
            if let Some(ref mut form) = state.question_form {
                if form.focus == FormField::Text {
                    form.backspace();
                }
            }
            UpdateResult::none()
        }
        InputKey::Char(c) => {
            if let Some(ref mut form) = state.question_form {
                if form.focus == FormField::Text {
                    form.input_char(c);
                }
            }
            UpdateResult::none()
        }
        _ => UpdateResult::none(),
    }
}

/// Validate and submit: both a category selection and non-empty trimmed
/// text are required; a validation failure issues no network call.
fn submit_question_form(state: &mut AppState) -> UpdateResult {
    let submission = {
        let Some(form) = state.question_form.as_ref() else {
            return UpdateResult::none();
        };
        let category_id = state
            .store
            .categories
            .get()
            .get(form.category_idx)
            .map(|category| category.id);
        (category_id, form.trimmed_text().to_string())
    };

    let (Some(category_id), question_text) = submission else {
        state.notify_error("Lütfen tüm alanları doldurun!");
        return UpdateResult::none();
    };
    if question_text.is_empty() {
        state.notify_error("Lütfen tüm alanları doldurun!");
        return UpdateResult::none();
    }

    state.show_loading("Soru ekleniyor...");
    UpdateResult::action(UpdateAction::SubmitQuestion {
        category_id,
        question_text,
    })
}
