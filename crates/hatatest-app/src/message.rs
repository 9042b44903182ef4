//! Message types for the application (TEA pattern)

use hatatest_core::{Category, CategoryDetail, ModelCatalog, Question, Stats, TestResult};

use crate::input_key::InputKey;
use crate::state::View;
use crate::test_run::TestCard;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (loading spinner, notice expiry)
    Tick,

    /// Quit the application
    Quit,

    /// Dispatched once after the terminal is up: eagerly load stats and the
    /// model catalog in parallel before anything is interactive
    Bootstrap,

    /// Activate a view and run its loader
    SwitchView(View),

    // ─────────────────────────────────────────────────────────
    // Loader Completions
    // Every completion carries the request generation issued by the store;
    // stale generations are discarded by the handler.
    // ─────────────────────────────────────────────────────────
    StatsLoaded { generation: u64, stats: Stats },
    StatsLoadFailed { generation: u64, error: String },

    ModelsLoaded { generation: u64, catalog: ModelCatalog },
    ModelsLoadFailed { generation: u64, error: String },

    CategoriesLoaded {
        generation: u64,
        categories: Vec<Category>,
    },
    CategoriesLoadFailed { generation: u64, error: String },

    QuestionsLoaded {
        generation: u64,
        questions: Vec<Question>,
    },
    QuestionsLoadFailed { generation: u64, error: String },

    ResultsLoaded {
        generation: u64,
        results: Vec<TestResult>,
    },
    ResultsLoadFailed { generation: u64, error: String },

    /// Error types for an expanded category card (lazy, per expand)
    CategoryDetailLoaded {
        generation: u64,
        detail: CategoryDetail,
    },
    CategoryDetailLoadFailed { generation: u64, error: String },

    // ─────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────
    /// Question was created; close the modal and reload questions + stats
    QuestionCreated,
    QuestionCreateFailed { error: String },

    /// Confirmed via dialog: issue the delete call
    ConfirmedDeleteQuestion { question_id: i64 },
    QuestionDeleted,
    QuestionDeleteFailed { error: String },

    /// Confirmed via dialog: issue the delete call
    ConfirmedDeleteResult { result_id: i64 },
    ResultDeleted,
    ResultDeleteFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Test Runner Progress
    // ─────────────────────────────────────────────────────────
    /// The runner is about to dispatch model `index` of `total`
    TestModelStarted {
        index: usize,
        total: usize,
        model_name: String,
    },

    /// One dispatch finished (success or per-model failure); append its card
    TestCardReady { card: TestCard },

    /// All selected models were attempted; refresh aggregate stats once
    TestRunFinished,
}
