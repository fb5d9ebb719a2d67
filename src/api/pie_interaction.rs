use tracing::trace;

use crate::core::{Wedge, hit_test_wedges};
use crate::render::Renderer;

use super::{PieChart, PieSelectionState};

impl<R: Renderer> PieChart<R> {
    /// Returns the wedge under the pointer without changing any state.
    ///
    /// Only the ring band is hit-testable, and the full un-shrunk angular
    /// span of each wedge counts. On a shared boundary the earlier wedge wins.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&Wedge> {
        let index = hit_test_wedges(&self.layout.wedges, self.ring_geometry(), x, y);
        trace!(x, y, ?index, "pie hit test");
        index.map(|index| &self.layout.wedges[index])
    }

    /// Handles a pointer-down event.
    ///
    /// On a hit the wedge becomes selected, the click listener is notified
    /// once, and the category is returned. A miss changes nothing.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) -> Option<String> {
        let category = self.hit_test(x, y)?.category.clone();
        self.selected_category = Some(category.clone());
        self.needs_redraw = true;
        if let Some(listener) = self.on_category_click.as_mut() {
            listener(&category);
        }
        Some(category)
    }

    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn clear_selection(&mut self) {
        if self.selected_category.take().is_some() {
            self.needs_redraw = true;
        }
    }

    /// The only state that must survive a view-recreation boundary.
    #[must_use]
    pub fn serialize_selection(&self) -> Option<String> {
        self.selected_category.clone()
    }

    /// Restores a saved selection. The category is not checked against the
    /// current wedges since hosts usually restore before re-supplying data.
    pub fn restore_selection(&mut self, selected_category: Option<&str>) {
        self.selected_category = selected_category.map(str::to_owned);
        self.needs_redraw = true;
    }

    #[must_use]
    pub fn selection_state(&self) -> PieSelectionState {
        PieSelectionState {
            selected_category: self.selected_category.clone(),
        }
    }

    pub fn restore_selection_state(&mut self, state: PieSelectionState) {
        self.selected_category = state.selected_category;
        self.needs_redraw = true;
    }
}
