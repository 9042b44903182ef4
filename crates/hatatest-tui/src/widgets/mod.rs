//! UI widgets, one per view plus overlays

pub mod categories;
pub mod confirm_dialog;
pub mod dashboard;
pub mod loading;
pub mod nav;
pub mod question_modal;
pub mod questions;
pub mod results;
pub mod status_bar;
pub mod test_panel;

pub use categories::CategoryList;
pub use confirm_dialog::ConfirmDialog;
pub use dashboard::Dashboard;
pub use loading::LoadingOverlay;
pub use nav::NavBar;
pub use question_modal::QuestionModal;
pub use questions::QuestionList;
pub use results::ResultList;
pub use status_bar::StatusBar;
pub use test_panel::TestPanel;
