//! Bottom status bar: key hints on the left, notice or server on the right

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use hatatest_app::state::{AppState, NoticeKind};
use hatatest_app::{UiMode, View};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static str {
        match self.state.ui_mode {
            UiMode::ConfirmDialog => "[y] evet  [n] hayır",
            UiMode::QuestionForm => "[Tab] alan  [Enter] kaydet  [Esc] iptal",
            UiMode::Normal => match self.state.view {
                View::Dashboard => "[1-5] görünüm  [r] yenile  [q] çıkış",
                View::Categories => "[↑↓] seç  [Enter] hata tipleri  [r] yenile  [q] çıkış",
                View::Questions => {
                    "[↑↓] seç  [n] yeni  [d] sil  [t] test  [f] filtre  [q] çıkış"
                }
                View::Test => {
                    "[←→] soru  [↑↓] model  [Boşluk] seç  [a] tümü  [c] temizle  [Enter] çalıştır"
                }
                View::Results => "[↑↓] seç  [d] sil  [f] filtre  [r] yenile  [q] çıkış",
            },
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hints = Span::styled(format!(" {}", self.hints()), styles::text_muted());

        let right_text = match &self.state.notice {
            Some(notice) => Span::styled(
                format!("{} ", notice.text),
                match notice.kind {
                    NoticeKind::Info => styles::status_green(),
                    NoticeKind::Error => styles::status_red(),
                },
            ),
            None => Span::styled(
                format!("{} ", self.state.settings.server.base_url),
                styles::text_muted(),
            ),
        };

        let hint_width = area.width.saturating_sub(right_text.width() as u16);
        Paragraph::new(Line::from(hints)).render(
            Rect {
                width: hint_width,
                ..area
            },
            buf,
        );
        Paragraph::new(Line::from(right_text))
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_status_bar_shows_view_hints() {
        let mut state = AppState::new();
        state.view = View::Questions;
        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 80, 1));

        assert!(term.buffer_contains("yeni"));
        assert!(term.buffer_contains("filtre"));
    }

    #[test]
    fn test_status_bar_shows_server_when_idle() {
        let state = AppState::new();
        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 80, 1));

        assert!(term.buffer_contains("http://127.0.0.1:8000"));
    }

    #[test]
    fn test_status_bar_prefers_notice_over_server() {
        let mut state = AppState::new();
        state.notify_error("Lütfen bir soru seçin!");
        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 80, 1));

        assert!(term.buffer_contains("Lütfen bir soru seçin!"));
        assert!(!term.buffer_contains("http://127.0.0.1:8000"));
    }

    #[test]
    fn test_status_bar_confirm_mode_hints() {
        let mut state = AppState::new();
        state.ui_mode = UiMode::ConfirmDialog;
        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&state), Rect::new(0, 0, 80, 1));

        assert!(term.buffer_contains("evet"));
        assert!(term.buffer_contains("hayır"));
    }
}
