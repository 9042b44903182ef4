//! Top navigation tabs for the five views

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use hatatest_app::View;

use crate::theme::styles;

/// Tab bar marking the active view.
pub struct NavBar {
    active: View,
}

impl NavBar {
    pub fn new(active: View) -> Self {
        Self { active }
    }

    fn tab_titles() -> Vec<Line<'static>> {
        View::ALL
            .iter()
            .enumerate()
            .map(|(index, view)| {
                Line::from(vec![
                    Span::styled(format!(" {} ", index + 1), styles::text_muted()),
                    Span::raw(format!("{} ", view.title())),
                ])
            })
            .collect()
    }
}

impl Widget for NavBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let tabs = Tabs::new(Self::tab_titles())
            .select(self.active.index())
            .highlight_style(styles::focused_selected())
            .divider("│");

        let padded_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        };
        tabs.render(padded_area, buf);
    }
}
