//! Shared helpers for widget render tests

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Terminal;

/// Small wrapper over a [`TestBackend`] terminal for widget assertions.
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
    area: Rect,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(80, 24)
    }

    pub fn compact() -> Self {
        Self::with_size(40, 12)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).unwrap();
        Self {
            terminal,
            area: Rect::new(0, 0, width, height),
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .unwrap();
    }

    /// Flattened buffer content (all cell symbols concatenated).
    pub fn content(&self) -> String {
        self.terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    pub fn buffer_contains(&self, needle: &str) -> bool {
        self.content().contains(needle)
    }

    pub fn clear(&mut self) {
        self.terminal.clear().unwrap();
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}
