//! Add-question modal form

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use hatatest_app::question_form::{FormField, QuestionFormState};
use hatatest_core::Category;

use crate::theme::styles;

pub struct QuestionModal<'a> {
    form: &'a QuestionFormState,
    categories: &'a [Category],
}

impl<'a> QuestionModal<'a> {
    pub fn new(form: &'a QuestionFormState, categories: &'a [Category]) -> Self {
        Self { form, categories }
    }

    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }

    fn category_label(&self) -> String {
        match self.categories.get(self.form.category_idx) {
            Some(category) => {
                format!("{} - {}", category.category_code, category.category_name)
            }
            None => "-".to_string(),
        }
    }
}

impl Widget for QuestionModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = Self::centered_rect(60, 9, area);
        Clear.render(modal_area, buf);

        let block = styles::modal_block(" Yeni Soru Ekle ").title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Category picker
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Text input
            Constraint::Min(0),
        ])
        .split(inner);

        let category_focused = self.form.focus == FormField::Category;
        let category_line = Line::from(vec![
            Span::styled("Kategori: ", styles::text_secondary()),
            Span::styled(
                format!("◂ {} ▸", self.category_label()),
                if category_focused {
                    styles::focused_selected()
                } else {
                    styles::text_primary()
                },
            ),
        ]);
        Paragraph::new(category_line).render(chunks[1], buf);

        let text_focused = self.form.focus == FormField::Text;
        let cursor = if text_focused { "▏" } else { "" };
        let text_line = Line::from(vec![
            Span::styled("Soru:     ", styles::text_secondary()),
            Span::styled(
                format!("{}{}", self.form.text, cursor),
                if text_focused {
                    styles::text_bright()
                } else {
                    styles::text_primary()
                },
            ),
        ]);
        Paragraph::new(text_line).render(chunks[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn categories() -> Vec<Category> {
        vec![
            Category {
                id: 1,
                category_code: "SYN".to_string(),
                category_name: "Syntax".to_string(),
                description: None,
                error_count: 0,
                question_count: 0,
            },
            Category {
                id: 2,
                category_code: "LOG".to_string(),
                category_name: "Logic".to_string(),
                description: None,
                error_count: 0,
                question_count: 0,
            },
        ]
    }

    #[test]
    fn test_modal_shows_title_and_fields() {
        let form = QuestionFormState::new();
        let categories = categories();
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(QuestionModal::new(&form, &categories), area);

        assert!(term.buffer_contains("Yeni Soru Ekle"));
        assert!(term.buffer_contains("Kategori:"));
        assert!(term.buffer_contains("Soru:"));
    }

    #[test]
    fn test_modal_shows_selected_category() {
        let mut form = QuestionFormState::new();
        form.category_down(2);
        let categories = categories();
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(QuestionModal::new(&form, &categories), area);

        assert!(term.buffer_contains("LOG - Logic"));
    }

    #[test]
    fn test_modal_shows_typed_text() {
        let mut form = QuestionFormState::new();
        form.next_field();
        for c in "Neden derlenmiyor?".chars() {
            form.input_char(c);
        }
        let categories = categories();
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(QuestionModal::new(&form, &categories), area);

        assert!(term.buffer_contains("Neden derlenmiyor?"));
    }
}
