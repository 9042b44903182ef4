//! # hatatest-app - Application State and Orchestration
//!
//! The Elm-architecture core of the dashboard:
//!
//! - [`state::AppState`] is the Model: the domain [`store::Store`] (with
//!   per-resource request generations), the active [`state::View`], and the
//!   overlay states (form, confirm dialog, loading).
//! - [`message::Message`] is everything that can happen: key presses,
//!   ticks, loader completions, test-runner progress.
//! - [`handler::update`] folds a message into the state and returns
//!   [`handler::UpdateAction`]s for the event loop.
//! - [`actions::handle_action`] executes actions as background tokio tasks
//!   that report back through the message channel, including the sequential
//!   multi-model test runner ([`actions::run_tests`]).

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod model_select;
pub mod question_form;
pub mod state;
pub mod store;
pub mod test_run;

pub use actions::handle_action;
pub use config::{load_settings, Settings};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, UiMode, View};
