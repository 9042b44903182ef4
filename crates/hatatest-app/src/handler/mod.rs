//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes and views
//! - `data`: Loader/mutation completion handlers

pub(crate) mod data;
pub(crate) mod keys;
pub(crate) mod update;


use hatatest_core::ModelRef;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
///
/// Every loader action carries the request generation the handler obtained
/// from the store; the spawned task echoes it back in its completion
/// message so stale replies can be discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    LoadStats {
        generation: u64,
    },

    LoadModels {
        generation: u64,
    },

    LoadCategories {
        generation: u64,
    },

    LoadQuestions {
        generation: u64,
        category_id: Option<i64>,
    },

    LoadResults {
        generation: u64,
        question_id: Option<i64>,
    },

    /// Lazy error-type fetch for an expanded category card
    LoadCategoryDetail {
        generation: u64,
        category_id: i64,
    },

    /// `POST /api/questions`
    SubmitQuestion {
        category_id: i64,
        question_text: String,
    },

    /// `DELETE /api/questions/{id}`
    DeleteQuestion {
        question_id: i64,
    },

    /// `DELETE /api/results/{id}`
    DeleteResult {
        result_id: i64,
    },

    /// Dispatch the question against the selected models, sequentially,
    /// in selection order
    RunTests {
        question_id: i64,
        models: Vec<ModelRef>,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<crate::message::Message>,
    /// Actions for the event loop to perform
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(message: crate::message::Message) -> Self {
        Self {
            message: Some(message),
            actions: Vec::new(),
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            actions: vec![action],
        }
    }

    pub fn actions(actions: Vec<UpdateAction>) -> Self {
        Self {
            message: None,
            actions,
        }
    }
}
