//! Model checkbox selection state
//!
//! Single source of truth: a set of selected entry indices into the
//! flattened catalog order ([`ModelCatalog::entries`]). Any checkbox visual
//! is derived from this set, and test dispatch iterates it in catalog
//! order, so the rendered order and the run order always agree.

use std::collections::BTreeSet;

use hatatest_core::ModelRef;

#[derive(Debug, Clone, Default)]
pub struct ModelSelection {
    cursor: usize,
    selected: BTreeSet<usize>,
}

impl ModelSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Toggle membership of the entry at `index`.
    pub fn toggle(&mut self, index: usize) {
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    /// Toggle the entry under the cursor.
    pub fn toggle_cursor(&mut self) {
        self.toggle(self.cursor);
    }

    /// Select all rendered checkboxes unconditionally.
    pub fn select_all(&mut self, count: usize) {
        self.selected = (0..count).collect();
    }

    /// Deselect all rendered checkboxes unconditionally.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, count: usize) {
        if count > 0 && self.cursor + 1 < count {
            self.cursor += 1;
        }
    }

    /// Drop out-of-range state after the catalog changed.
    pub fn clamp(&mut self, count: usize) {
        self.selected.retain(|&index| index < count);
        if count == 0 {
            self.cursor = 0;
        } else if self.cursor >= count {
            self.cursor = count - 1;
        }
    }

    /// The selected models in checkbox render order.
    pub fn selected_models(&self, entries: &[ModelRef]) -> Vec<ModelRef> {
        self.selected
            .iter()
            .filter_map(|&index| entries.get(index).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hatatest_core::Provider;

    fn entries() -> Vec<ModelRef> {
        vec![
            ModelRef {
                name: "gemini-2.5-flash-lite".into(),
                provider: Provider::Gemini,
            },
            ModelRef {
                name: "gemini-2.5-flash".into(),
                provider: Provider::Gemini,
            },
            ModelRef {
                name: "Qwen/Qwen2.5-Coder-32B-Instruct".into(),
                provider: Provider::Huggingface,
            },
        ]
    }

    #[test]
    fn test_toggle_twice_is_idempotent() {
        let mut selection = ModelSelection::new();
        selection.toggle(1);
        assert!(selection.is_selected(1));
        selection.toggle(1);
        assert!(!selection.is_selected(1));
    }

    #[test]
    fn test_select_all_and_clear_are_unconditional() {
        let mut selection = ModelSelection::new();
        selection.toggle(0);
        selection.select_all(3);
        assert_eq!(selection.selected_count(), 3);

        selection.clear();
        assert_eq!(selection.selected_count(), 0);
    }

    #[test]
    fn test_selected_models_follow_catalog_order() {
        let mut selection = ModelSelection::new();
        // Toggled out of order; dispatch order must be render order.
        selection.toggle(2);
        selection.toggle(0);

        let models = selection.selected_models(&entries());
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].name, "gemini-2.5-flash-lite");
        assert_eq!(models[1].name, "Qwen/Qwen2.5-Coder-32B-Instruct");
    }

    #[test]
    fn test_cursor_movement_is_clamped() {
        let mut selection = ModelSelection::new();
        selection.move_up();
        assert_eq!(selection.cursor(), 0);

        selection.move_down(3);
        selection.move_down(3);
        selection.move_down(3); // already at the last row
        assert_eq!(selection.cursor(), 2);
    }

    #[test]
    fn test_clamp_drops_out_of_range_selection() {
        let mut selection = ModelSelection::new();
        selection.select_all(5);
        selection.clamp(2);
        assert_eq!(selection.selected_count(), 2);
        assert!(selection.is_selected(0));
        assert!(selection.is_selected(1));
        assert!(!selection.is_selected(4));
    }
}
