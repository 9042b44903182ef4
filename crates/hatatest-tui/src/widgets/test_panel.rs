//! Test view: question picker, model checkboxes, streamed result cards

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use hatatest_app::state::TestViewState;
use hatatest_app::test_run::{CardBody, TestCard};
use hatatest_core::{ModelCatalog, ModelRef, Question};

use crate::theme::styles;

pub struct TestPanel<'a> {
    catalog: &'a ModelCatalog,
    view: &'a TestViewState,
    question: Option<&'a Question>,
}

impl<'a> TestPanel<'a> {
    pub fn new(
        catalog: &'a ModelCatalog,
        view: &'a TestViewState,
        question: Option<&'a Question>,
    ) -> Self {
        Self {
            catalog,
            view,
            question,
        }
    }

    fn checkbox_line(&self, entry: &ModelRef, index: usize) -> Line<'static> {
        let marker = if self.view.selection.is_selected(index) {
            "[x]"
        } else {
            "[ ]"
        };
        let style = if index == self.view.selection.cursor() {
            styles::focused_selected()
        } else if self.view.selection.is_selected(index) {
            styles::accent()
        } else {
            styles::text_primary()
        };
        Line::from(Span::styled(
            format!("{} {}", marker, entry.short_name()),
            style,
        ))
    }

    fn model_lines(&self) -> Vec<Line<'static>> {
        let entries = self.catalog.entries();
        let gemini_count = self.catalog.gemini.len();

        let mut lines = Vec::new();
        lines.push(Line::from(Span::styled(
            "🌟 Gemini Modelleri",
            styles::text_secondary(),
        )));
        for (index, entry) in entries.iter().take(gemini_count).enumerate() {
            lines.push(self.checkbox_line(entry, index));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "🤗 Hugging Face Modelleri",
            styles::text_secondary(),
        )));
        for (offset, entry) in entries.iter().skip(gemini_count).enumerate() {
            lines.push(self.checkbox_line(entry, gemini_count + offset));
        }
        lines
    }

    fn card_lines(card: &TestCard) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(vec![
            Span::styled(card.model_name.clone(), styles::accent_bold()),
            Span::raw("  "),
            Span::styled(card.provider.label(), styles::text_secondary()),
        ])];
        match &card.body {
            CardBody::Success {
                response,
                response_time,
            } => {
                lines.push(Line::from(Span::styled(
                    response.clone(),
                    styles::text_primary(),
                )));
                lines.push(Line::from(Span::styled(
                    format!("⏱️ Yanıt süresi: {}s", response_time),
                    styles::text_muted(),
                )));
            }
            CardBody::Failure { message } => {
                lines.push(Line::from(Span::styled(
                    format!("❌ {}", message),
                    styles::status_red(),
                )));
            }
        }
        lines.push(Line::raw(""));
        lines
    }

    fn result_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        if let Some(ref run) = self.view.run {
            let current = run.current_model.as_deref().unwrap_or("");
            lines.push(Line::from(Span::styled(
                format!("({}/{}) Test: {}...", run.completed, run.total, current),
                styles::status_yellow(),
            )));
            lines.push(Line::raw(""));
        }
        for card in &self.view.cards {
            lines.extend(Self::card_lines(card));
        }
        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "Model seçin ve Enter ile testi başlatın.",
                styles::text_muted(),
            )));
        }
        lines
    }
}

impl Widget for TestPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(area);
        let left =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(columns[0]);

        // Question picker
        let question_block = styles::panel_block(false).title(" Soru ");
        let question_inner = question_block.inner(left[0]);
        question_block.render(left[0], buf);
        let question_line = match self.question {
            // Selection widget: the 60-character truncated label.
            Some(question) => Line::from(Span::styled(
                question.picker_label(),
                styles::text_primary(),
            )),
            None => Line::from(Span::styled(
                "Soru seçin (←/→ ile)",
                styles::text_muted(),
            )),
        };
        Paragraph::new(question_line).render(question_inner, buf);

        // Model checkboxes
        let models_title = format!(" Modeller ({} seçili) ", self.view.selection.selected_count());
        let models_block = styles::panel_block(false).title(models_title);
        let models_inner = models_block.inner(left[1]);
        models_block.render(left[1], buf);
        if self.catalog.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "Model kataloğu yüklenemedi.",
                styles::text_muted(),
            )))
            .render(models_inner, buf);
        } else {
            Paragraph::new(self.model_lines()).render(models_inner, buf);
        }

        // Result stream
        let results_block = styles::panel_block(false).title(" Test Sonuçları ");
        let results_inner = results_block.inner(columns[1]);
        results_block.render(columns[1], buf);
        Paragraph::new(self.result_lines()).render(results_inner, buf);
    }
}
