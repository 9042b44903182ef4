//! Questions view: one card per question

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use hatatest_app::state::QuestionsViewState;
use hatatest_core::{Category, Question};

use crate::theme::styles;

pub struct QuestionList<'a> {
    questions: &'a [Question],
    categories: &'a [Category],
    view: &'a QuestionsViewState,
    date_format: &'a str,
}

impl<'a> QuestionList<'a> {
    pub fn new(
        questions: &'a [Question],
        categories: &'a [Category],
        view: &'a QuestionsViewState,
        date_format: &'a str,
    ) -> Self {
        Self {
            questions,
            categories,
            view,
            date_format,
        }
    }

    fn title(&self) -> String {
        match self.view.filter {
            Some(category_id) => {
                let code = self
                    .categories
                    .iter()
                    .find(|category| category.id == category_id)
                    .map(|category| category.category_code.as_str())
                    .unwrap_or("?");
                format!(" Sorular — {} ", code)
            }
            None => " Sorular ".to_string(),
        }
    }

    fn card(&self, question: &Question) -> ListItem<'static> {
        let badge = question
            .category_code
            .clone()
            .unwrap_or_else(|| "-".to_string());
        // Full-card view: the question text is never truncated here.
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("[{}]", badge), styles::accent_bold()),
                Span::raw(" "),
                Span::styled(question.question_text.clone(), styles::text_primary()),
            ]),
            Line::from(vec![
                Span::styled(
                    format!("📅 {}", question.created_at.format(self.date_format)),
                    styles::text_muted(),
                ),
                Span::raw("   "),
                Span::styled(
                    format!("🧪 {} Test", question.result_count),
                    styles::text_muted(),
                ),
            ]),
            Line::raw(""),
        ];
        ListItem::new(lines)
    }
}

impl Widget for QuestionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(self.title());
        let inner = block.inner(area);
        block.render(area, buf);

        if self.questions.is_empty() {
            Paragraph::new(Line::from(vec![
                Span::raw("❓ "),
                Span::styled(
                    "Henüz soru eklenmemiş. Yeni soru için 'n' tuşuna basın.",
                    styles::text_muted(),
                ),
            ]))
            .alignment(Alignment::Center)
            .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .questions
            .iter()
            .map(|question| self.card(question))
            .collect();
        let list = List::new(items).highlight_style(styles::focused_selected());
        let mut list_state = ListState::default();
        list_state.select(Some(self.view.selected));
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use chrono::NaiveDateTime;

    fn question(id: i64, text: &str) -> Question {
        Question {
            id,
            category_id: 1,
            category_code: Some("SYN".to_string()),
            category_name: Some("Syntax".to_string()),
            question_text: text.to_string(),
            created_at: NaiveDateTime::parse_from_str("2026-08-01T14:30:00", "%Y-%m-%dT%H:%M:%S")
                .unwrap(),
            result_count: 4,
        }
    }

    fn category(id: i64, code: &str) -> Category {
        Category {
            id,
            category_code: code.to_string(),
            category_name: code.to_string(),
            description: None,
            error_count: 0,
            question_count: 0,
        }
    }

    #[test]
    fn test_empty_state() {
        let view = QuestionsViewState::default();
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(QuestionList::new(&[], &[], &view, "%d.%m.%Y"), area);

        assert!(term.buffer_contains("Henüz soru eklenmemiş"));
    }

    #[test]
    fn test_card_shows_badge_text_date_and_count() {
        let questions = vec![question(1, "Bu kodda hata var mı?")];
        let view = QuestionsViewState::default();
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(QuestionList::new(&questions, &[], &view, "%d.%m.%Y"), area);

        assert!(term.buffer_contains("[SYN]"));
        assert!(term.buffer_contains("Bu kodda hata var mı?"));
        assert!(term.buffer_contains("01.08.2026"));
        assert!(term.buffer_contains("4 Test"));
    }

    #[test]
    fn test_full_card_text_is_not_truncated_at_sixty() {
        // 70 chars: the card must carry the full text (unlike picker labels).
        let text: String = "abcdefghij".repeat(7);
        let questions = vec![question(1, &text)];
        let view = QuestionsViewState::default();
        let mut term = TestTerminal::with_size(120, 24);
        let area = term.area();
        term.render_widget(QuestionList::new(&questions, &[], &view, "%d.%m.%Y"), area);

        assert!(term.buffer_contains(&text));
    }

    #[test]
    fn test_active_filter_is_shown_in_title() {
        let questions = vec![question(1, "soru")];
        let categories = vec![category(2, "LOG")];
        let view = QuestionsViewState {
            selected: 0,
            filter: Some(2),
        };
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(
            QuestionList::new(&questions, &categories, &view, "%d.%m.%Y"),
            area,
        );

        assert!(term.buffer_contains("Sorular — LOG"));
    }
}
