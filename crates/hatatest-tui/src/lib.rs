//! # hatatest-tui - Terminal UI
//!
//! Rendering and terminal lifecycle for the dashboard: the ratatui widgets
//! (one per view plus overlays), the theme, crossterm event polling, and
//! the main run loop.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
