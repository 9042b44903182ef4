//! Categories view: one card per category, expandable error-type list

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use hatatest_app::state::CategoriesViewState;
use hatatest_core::Category;

use crate::theme::styles;

pub struct CategoryList<'a> {
    categories: &'a [Category],
    view: &'a CategoriesViewState,
}

impl<'a> CategoryList<'a> {
    pub fn new(categories: &'a [Category], view: &'a CategoriesViewState) -> Self {
        Self { categories, view }
    }

    fn card(&self, category: &Category) -> ListItem<'static> {
        let mut lines = vec![
            Line::from(vec![
                Span::styled(category.category_code.clone(), styles::accent_bold()),
                Span::raw("  "),
                Span::styled(category.category_name.clone(), styles::text_bright()),
            ]),
        ];
        if let Some(ref description) = category.description {
            lines.push(Line::from(Span::styled(
                description.clone(),
                styles::text_muted(),
            )));
        }
        lines.push(Line::from(vec![
            Span::styled(
                format!("🔴 {} Hata Tipi", category.error_count),
                styles::text_secondary(),
            ),
            Span::raw("   "),
            Span::styled(
                format!("❓ {} Soru", category.question_count),
                styles::text_secondary(),
            ),
        ]));

        // Expanded error-type sub-list, present for at most one card.
        if let Some(ref detail) = self.view.expanded {
            if detail.id == category.id {
                lines.push(Line::from(Span::styled(
                    "Hata Tipleri:",
                    styles::text_secondary(),
                )));
                let mut tags: Vec<Span> = Vec::new();
                for error_type in &detail.error_types {
                    tags.push(Span::styled(
                        format!("[{}]", error_type.error_type),
                        styles::accent(),
                    ));
                    tags.push(Span::raw(" "));
                }
                lines.push(Line::from(tags));
            }
        }

        lines.push(Line::raw(""));
        ListItem::new(lines)
    }
}

impl Widget for CategoryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(" Hata Kategorileri ");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.categories.is_empty() {
            Paragraph::new(Line::from(vec![
                Span::raw("📁 "),
                Span::styled(
                    "Kategori bulunamadı. Veritabanını seed edin.",
                    styles::text_muted(),
                ),
            ]))
            .alignment(Alignment::Center)
            .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .categories
            .iter()
            .map(|category| self.card(category))
            .collect();
        let list = List::new(items).highlight_style(styles::focused_selected());
        let mut list_state = ListState::default();
        list_state.select(Some(self.view.selected));
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}
