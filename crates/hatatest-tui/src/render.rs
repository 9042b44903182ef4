//! Frame composition: header, nav, active view, overlays

use ratatui::{
    layout::{Constraint, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use hatatest_app::{AppState, View};

use crate::theme::styles;
use crate::widgets::{
    CategoryList, ConfirmDialog, Dashboard, LoadingOverlay, NavBar, QuestionList, QuestionModal,
    ResultList, StatusBar, TestPanel,
};

/// Render one frame from the current state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Length(1), // Nav tabs
        Constraint::Min(0),    // Active view
        Constraint::Length(1), // Status bar
    ])
    .split(frame.area());

    let header = Line::from(vec![
        Span::styled(" hatatest ", styles::accent_bold()),
        Span::styled("· hata türleri test paneli", styles::text_muted()),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    frame.render_widget(NavBar::new(state.view), chunks[1]);

    let body = chunks[2];
    match state.view {
        View::Dashboard => {
            let catalog = state.store.models.get();
            let model_count = if catalog.all.is_empty() {
                catalog.entries().len()
            } else {
                catalog.all.len()
            };
            frame.render_widget(Dashboard::new(state.store.stats.get(), model_count), body);
        }
        View::Categories => {
            frame.render_widget(
                CategoryList::new(state.store.categories.get(), &state.categories_view),
                body,
            );
        }
        View::Questions => {
            frame.render_widget(
                QuestionList::new(
                    state.store.questions.get(),
                    state.store.categories.get(),
                    &state.questions_view,
                    &state.settings.ui.date_format,
                ),
                body,
            );
        }
        View::Test => {
            frame.render_widget(
                TestPanel::new(
                    state.store.models.get(),
                    &state.test_view,
                    state.test_question(),
                ),
                body,
            );
        }
        View::Results => {
            frame.render_widget(
                ResultList::new(
                    state.store.results.get(),
                    state.store.questions.get(),
                    &state.results_view,
                    &state.settings.ui.datetime_format,
                ),
                body,
            );
        }
    }

    frame.render_widget(StatusBar::new(state), chunks[3]);

    // Overlays, bottom to top: form, confirm dialog, loading.
    if let Some(ref form) = state.question_form {
        frame.render_widget(
            QuestionModal::new(form, state.store.categories.get()),
            frame.area(),
        );
    }
    if let Some(ref dialog) = state.confirm_dialog {
        frame.render_widget(ConfirmDialog::new(dialog), frame.area());
    }
    if let Some(ref loading) = state.loading {
        frame.render_widget(LoadingOverlay::new(loading), frame.area());
    }
}
