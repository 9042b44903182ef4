//! Dashboard view: stat tiles and per-model aggregates

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Widget},
};

use hatatest_core::Stats;

use crate::theme::styles;

pub struct Dashboard<'a> {
    stats: &'a Stats,
    model_count: usize,
}

impl<'a> Dashboard<'a> {
    pub fn new(stats: &'a Stats, model_count: usize) -> Self {
        Self { stats, model_count }
    }

    fn render_tile(value: String, label: &str, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);
        Paragraph::new(Span::styled(value, styles::text_bright()))
            .alignment(Alignment::Center)
            .render(chunks[0], buf);
        Paragraph::new(Span::styled(label.to_string(), styles::text_muted()))
            .alignment(Alignment::Center)
            .render(chunks[1], buf);
    }

    fn model_stat_items(&self) -> Vec<ListItem<'static>> {
        self.stats
            .model_stats
            .iter()
            .map(|stat| {
                let lines = vec![
                    Line::from(vec![
                        Span::styled(stat.model_name.clone(), styles::accent_bold()),
                        Span::raw("  "),
                        Span::styled(stat.provider.label(), styles::text_secondary()),
                    ]),
                    Line::from(vec![
                        Span::styled(format!("{} Test", stat.test_count), styles::text_primary()),
                        Span::raw("   "),
                        Span::styled(
                            format!("{}s Ort. Süre", stat.avg_response_time),
                            styles::text_muted(),
                        ),
                    ]),
                    Line::raw(""),
                ];
                ListItem::new(lines)
            })
            .collect()
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).split(area);

        // Stat tiles
        let tiles = Layout::horizontal([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(chunks[0]);
        Self::render_tile(
            self.stats.total_categories.to_string(),
            "Kategori",
            tiles[0],
            buf,
        );
        Self::render_tile(
            self.stats.total_questions.to_string(),
            "Soru",
            tiles[1],
            buf,
        );
        Self::render_tile(self.stats.total_results.to_string(), "Sonuç", tiles[2], buf);
        Self::render_tile(self.model_count.to_string(), "Model", tiles[3], buf);

        // Model stats
        let block = styles::panel_block(false).title(" Model İstatistikleri ");
        let inner = block.inner(chunks[1]);
        block.render(chunks[1], buf);

        if self.stats.model_stats.is_empty() {
            Paragraph::new(Line::from(vec![
                Span::raw("📊 "),
                Span::styled("Henüz test sonucu yok", styles::text_muted()),
            ]))
            .alignment(Alignment::Center)
            .render(inner, buf);
        } else {
            List::new(self.model_stat_items()).render(inner, buf);
        }
    }
}
