//! Confirmation dialog widget for delete confirmations

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use hatatest_app::confirm_dialog::ConfirmDialogState;

use crate::theme::{palette, styles};

/// Confirmation dialog widget
pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDialogState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDialogState) -> Self {
        Self { state }
    }

    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_width = 50;
        let modal_height = 7;
        let modal_area = Self::centered_rect(modal_width, modal_height, area);

        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(format!(" {} ", self.state.title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED)
            .style(Style::default().bg(palette::POPUP_BG));

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Message
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

        let message = Paragraph::new(self.state.message.as_str())
            .alignment(Alignment::Center)
            .style(styles::status_yellow());
        message.render(chunks[1], buf);

        let buttons = Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled(
                "y",
                styles::status_green().add_modifier(Modifier::BOLD),
            ),
            Span::styled("] Evet  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("n", styles::status_red().add_modifier(Modifier::BOLD)),
            Span::styled("] Hayır", styles::text_muted()),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_confirm_dialog_renders_title_and_message() {
        let state = ConfirmDialogState::delete_question(7);
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(ConfirmDialog::new(&state), area);

        assert!(term.buffer_contains("Soruyu Sil"));
        assert!(term.buffer_contains("emin misiniz"));
    }

    #[test]
    fn test_confirm_dialog_shows_options() {
        let state = ConfirmDialogState::delete_result(3);
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(ConfirmDialog::new(&state), area);

        assert!(term.buffer_contains("Evet"));
        assert!(term.buffer_contains("Hayır"));
    }

    #[test]
    fn test_confirm_dialog_compact_terminal() {
        let state = ConfirmDialogState::delete_question(1);
        let mut term = TestTerminal::compact();
        let area = term.area();
        term.render_widget(ConfirmDialog::new(&state), area);
        assert!(!term.content().is_empty());
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = ConfirmDialog::centered_rect(40, 10, area);
        assert_eq!(modal.x, 30);
        assert_eq!(modal.y, 20);
        assert_eq!(modal.width, 40);
        assert_eq!(modal.height, 10);
    }

    #[test]
    fn test_centered_rect_small_area() {
        let area = Rect::new(0, 0, 30, 8);
        let modal = ConfirmDialog::centered_rect(50, 10, area);
        assert_eq!(modal.width, 30);
        assert_eq!(modal.height, 8);
    }
}
