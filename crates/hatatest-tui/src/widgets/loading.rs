//! Full-screen loading overlay
//!
//! A modal affordance shown around long operations (bootstrap, mutations,
//! test runs). The event loop keeps running underneath; this only covers
//! the screen.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use hatatest_app::state::LoadingState;

use crate::theme::styles;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct LoadingOverlay<'a> {
    state: &'a LoadingState,
}

impl<'a> LoadingOverlay<'a> {
    pub fn new(state: &'a LoadingState) -> Self {
        Self { state }
    }

    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }
}

impl Widget for LoadingOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = (self.state.message.chars().count() as u16 + 8).clamp(24, area.width);
        let modal_area = Self::centered_rect(width, 3, area);

        Clear.render(modal_area, buf);
        let block = styles::modal_block("");
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let spinner =
            SPINNER_FRAMES[(self.state.animation_frame as usize) % SPINNER_FRAMES.len()];
        let line = Line::from(vec![
            Span::styled(spinner, styles::accent_bold()),
            Span::raw(" "),
            Span::styled(self.state.message.clone(), styles::text_bright()),
        ]);

        let chunks = Layout::vertical([Constraint::Length(1)]).split(inner);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(chunks[0], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_loading_overlay_shows_message() {
        let state = LoadingState::new("Veriler yükleniyor...");
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(LoadingOverlay::new(&state), area);

        assert!(term.buffer_contains("Veriler yükleniyor..."));
    }

    #[test]
    fn test_loading_overlay_spinner_advances() {
        let mut state = LoadingState::new("Test: gemini-2.5-flash...");
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(LoadingOverlay::new(&state), area);
        assert!(term.buffer_contains("⠋"));

        state.tick();
        term.clear();
        term.render_widget(LoadingOverlay::new(&state), area);
        assert!(term.buffer_contains("⠙"));
    }

    #[test]
    fn test_loading_overlay_fits_small_terminal() {
        let state = LoadingState::new("Soru ekleniyor...");
        let mut term = TestTerminal::compact();
        let area = term.area();
        term.render_widget(LoadingOverlay::new(&state), area);
        assert!(!term.content().is_empty());
    }
}
