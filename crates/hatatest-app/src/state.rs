//! Application state (Model in TEA pattern)

use hatatest_core::{CategoryDetail, ModelRef, Question};

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::model_select::ModelSelection;
use crate::question_form::QuestionFormState;
use crate::store::Store;
use crate::test_run::{TestCard, TestRunState};

/// The five top-level screens. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Categories,
    Questions,
    Test,
    Results,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Dashboard,
        View::Categories,
        View::Questions,
        View::Test,
        View::Results,
    ];

    /// Navigation label shown in the tab bar.
    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Categories => "Kategoriler",
            View::Questions => "Sorular",
            View::Test => "Test",
            View::Results => "Sonuçlar",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<View> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> View {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> View {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which overlay owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Active view receives keys
    #[default]
    Normal,

    /// Add-question modal form
    QuestionForm,

    /// Confirmation dialog (delete question/result)
    ConfirmDialog,
}

/// Categories view: list selection plus the one expanded card.
///
/// Expansion is lazy: the error-type list is fetched on first expand and
/// dropped on collapse, never cached across categories. The detail fetch
/// has its own generation counter so a late reply for a card the user
/// already collapsed (or re-targeted) is discarded.
#[derive(Debug, Clone, Default)]
pub struct CategoriesViewState {
    pub selected: usize,
    pub expanded: Option<CategoryDetail>,
    detail_generation: u64,
    pub detail_loading: bool,
}

impl CategoriesViewState {
    pub fn begin_detail_fetch(&mut self) -> u64 {
        self.detail_generation += 1;
        self.detail_loading = true;
        self.detail_generation
    }

    /// Accept a fetched detail if its generation is still current.
    pub fn accept_detail(&mut self, generation: u64, detail: CategoryDetail) -> bool {
        if generation != self.detail_generation {
            return false;
        }
        self.detail_loading = false;
        self.expanded = Some(detail);
        true
    }

    pub fn fail_detail(&mut self, generation: u64) -> bool {
        if generation != self.detail_generation {
            return false;
        }
        self.detail_loading = false;
        true
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
        // A fetch still in flight is superseded by the collapse.
        self.detail_generation += 1;
        self.detail_loading = false;
    }
}

/// Questions view: list selection and the optional category filter.
#[derive(Debug, Clone, Default)]
pub struct QuestionsViewState {
    pub selected: usize,
    pub filter: Option<i64>,
}

/// Results view: list selection and the optional question filter.
#[derive(Debug, Clone, Default)]
pub struct ResultsViewState {
    pub selected: usize,
    pub filter: Option<i64>,
}

/// Test view: question picker, model checkboxes, and the result stream.
#[derive(Debug, Clone, Default)]
pub struct TestViewState {
    /// Index into the question store, None until a question is picked.
    pub question_idx: Option<usize>,
    pub selection: ModelSelection,
    /// Cards streamed by the current/most recent run, in dispatch order.
    pub cards: Vec<TestCard>,
    /// Progress of the run in flight, None when idle.
    pub run: Option<TestRunState>,
}

/// Kind of status-bar notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Transient status-bar notice; expires after a few ticks.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    age_ticks: u64,
}

/// Ticks before a notice disappears (50ms event poll → ~6 seconds).
const NOTICE_TTL_TICKS: u64 = 120;

impl Notice {
    fn new(text: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            text: text.into(),
            kind,
            age_ticks: 0,
        }
    }

    fn tick(&mut self) -> bool {
        self.age_ticks += 1;
        self.age_ticks < NOTICE_TTL_TICKS
    }
}

/// Full-screen loading overlay shown around long operations.
///
/// A modal affordance, not a lock: the event loop keeps running underneath.
#[derive(Debug, Clone)]
pub struct LoadingState {
    pub message: String,
    pub animation_frame: u64,
}

impl LoadingState {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            animation_frame: 0,
        }
    }

    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Active top-level view
    pub view: View,

    /// Which overlay owns the keyboard
    pub ui_mode: UiMode,

    /// Application settings from config file
    pub settings: Settings,

    /// All backend-fetched data, with per-resource request generations
    pub store: Store,

    pub categories_view: CategoriesViewState,
    pub questions_view: QuestionsViewState,
    pub results_view: ResultsViewState,
    pub test_view: TestViewState,

    /// Add-question modal form state (Some while the modal is open)
    pub question_form: Option<QuestionFormState>,

    /// Confirmation dialog state
    pub confirm_dialog: Option<ConfirmDialogState>,

    /// Loading overlay (shown while Some)
    pub loading: Option<LoadingState>,

    /// Transient status-bar notice
    pub notice: Option<Notice>,

    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            view: View::Dashboard,
            ui_mode: UiMode::Normal,
            settings,
            store: Store::default(),
            categories_view: CategoriesViewState::default(),
            questions_view: QuestionsViewState::default(),
            results_view: ResultsViewState::default(),
            test_view: TestViewState::default(),
            question_form: None,
            confirm_dialog: None,
            loading: None,
            notice: None,
            quitting: false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    /// Periodic tick: advance the loading spinner, expire the notice.
    pub fn on_tick(&mut self) {
        if let Some(ref mut loading) = self.loading {
            loading.tick();
        }
        if let Some(ref mut notice) = self.notice {
            if !notice.tick() {
                self.notice = None;
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    // Notices & Loading Overlay
    // ─────────────────────────────────────────────────────────

    pub fn notify_info(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::new(text, NoticeKind::Info));
    }

    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::new(text, NoticeKind::Error));
    }

    pub fn show_loading(&mut self, message: &str) {
        self.loading = Some(LoadingState::new(message));
    }

    pub fn update_loading_message(&mut self, message: &str) {
        if let Some(ref mut loading) = self.loading {
            loading.set_message(message);
        }
    }

    pub fn hide_loading(&mut self) {
        self.loading = None;
    }

    /// Drop the bootstrap overlay once both eager startup fetches settled.
    pub fn maybe_finish_bootstrap(&mut self) {
        if !self.store.stats.is_loading() && !self.store.models.is_loading() {
            self.hide_loading();
        }
    }

    // ─────────────────────────────────────────────────────────
    // Derived Accessors
    // ─────────────────────────────────────────────────────────

    /// Flattened checkbox entries in render (and dispatch) order.
    pub fn model_entries(&self) -> Vec<ModelRef> {
        self.store.models.get().entries()
    }

    /// Question currently picked in the test view.
    pub fn test_question(&self) -> Option<&Question> {
        self.test_view
            .question_idx
            .and_then(|idx| self.store.questions.get().get(idx))
    }

    /// Cycle the test view's question picker forward/backward.
    pub fn cycle_test_question(&mut self, forward: bool) {
        let count = self.store.questions.get().len();
        if count == 0 {
            self.test_view.question_idx = None;
            return;
        }
        self.test_view.question_idx = Some(match (self.test_view.question_idx, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(idx), true) => (idx + 1) % count,
            (Some(idx), false) => (idx + count - 1) % count,
        });
    }
}
