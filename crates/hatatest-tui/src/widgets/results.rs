//! Results view: stored test records

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use hatatest_app::state::ResultsViewState;
use hatatest_core::{truncate_chars, Question, TestResult};

use crate::theme::styles;

pub struct ResultList<'a> {
    results: &'a [TestResult],
    questions: &'a [Question],
    view: &'a ResultsViewState,
    datetime_format: &'a str,
}

impl<'a> ResultList<'a> {
    pub fn new(
        results: &'a [TestResult],
        questions: &'a [Question],
        view: &'a ResultsViewState,
        datetime_format: &'a str,
    ) -> Self {
        Self {
            results,
            questions,
            view,
            datetime_format,
        }
    }

    fn title(&self) -> String {
        match self.view.filter {
            Some(question_id) => {
                let label = self
                    .questions
                    .iter()
                    .find(|question| question.id == question_id)
                    // Selection widget context: truncated label.
                    .map(|question| truncate_chars(&question.question_text, 60))
                    .unwrap_or_else(|| question_id.to_string());
                format!(" Sonuçlar — {} ", label)
            }
            None => " Sonuçlar ".to_string(),
        }
    }

    fn card(&self, result: &TestResult) -> ListItem<'static> {
        let mut lines = Vec::new();
        if let Some(ref question_text) = result.question_text {
            lines.push(Line::from(Span::styled(
                question_text.clone(),
                styles::text_secondary(),
            )));
        }
        lines.push(Line::from(vec![
            Span::styled(result.model_name.clone(), styles::accent_bold()),
            Span::raw("  "),
            // Unknown provider values render raw instead of crashing.
            Span::styled(result.model_provider.label(), styles::text_secondary()),
        ]));
        lines.push(Line::from(Span::styled(
            result.response.clone(),
            styles::text_primary(),
        )));
        lines.push(Line::from(vec![
            Span::styled(format!("⏱️ {}s", result.response_time), styles::text_muted()),
            Span::raw("   "),
            Span::styled(
                format!("📅 {}", result.tested_at.format(self.datetime_format)),
                styles::text_muted(),
            ),
        ]));
        lines.push(Line::raw(""));
        ListItem::new(lines)
    }
}

impl Widget for ResultList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(self.title());
        let inner = block.inner(area);
        block.render(area, buf);

        if self.results.is_empty() {
            Paragraph::new(Line::from(vec![
                Span::raw("📋 "),
                Span::styled("Henüz test sonucu yok.", styles::text_muted()),
            ]))
            .alignment(Alignment::Center)
            .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .results
            .iter()
            .map(|result| self.card(result))
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
    use hatatest_core::Provider;

    fn result(provider: Provider) -> TestResult {
        TestResult {
            id: 1,
            question_id: 7,
            question_text: Some("Bu kodda hata var mı?".to_string()),
            model_name: "gemini-2.5-flash".to_string(),
            model_provider: provider,
            response: "Satır 3'te eksik noktalı virgül var.".to_string(),
            response_time: 1.2,
            tested_at: NaiveDateTime::parse_from_str("2026-08-01T14:30:00", "%Y-%m-%dT%H:%M:%S")
                .unwrap(),
        }
    }

    #[test]
    fn test_empty_state() {
        let view = ResultsViewState::default();
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(ResultList::new(&[], &[], &view, "%d.%m.%Y %H:%M"), area);

        assert!(term.buffer_contains("Henüz test sonucu yok."));
    }

    #[test]
    fn test_card_contents() {
        let results = vec![result(Provider::Gemini)];
        let view = ResultsViewState::default();
        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(
            ResultList::new(&results, &[], &view, "%d.%m.%Y %H:%M"),
            area,
        );

        assert!(term.buffer_contains("gemini-2.5-flash"));
        assert!(term.buffer_contains("Gemini"));
        assert!(term.buffer_contains("Satır 3'te eksik noktalı virgül var."));
        assert!(term.buffer_contains("1.2s"));
        assert!(term.buffer_contains("01.08.2026 14:30"));
    }

    #[test]
    fn test_provider_labels_per_family() {
        let view = ResultsViewState::default();

        let mut term = TestTerminal::new();
        let area = term.area();
        let results = vec![result(Provider::Huggingface)];
        term.render_widget(
            ResultList::new(&results, &[], &view, "%d.%m.%Y %H:%M"),
            area,
        );
        assert!(term.buffer_contains("HuggingFace"));
    }

    #[test]
    fn test_unknown_provider_renders_raw_without_crashing() {
        // Data contract violation: an unexpected provider value still renders.
        let view = ResultsViewState::default();
        let mut term = TestTerminal::new();
        let area = term.area();
        let results = vec![result(Provider::Other("openai".to_string()))];
        term.render_widget(
            ResultList::new(&results, &[], &view, "%d.%m.%Y %H:%M"),
            area,
        );
        assert!(term.buffer_contains("openai"));
    }
}
