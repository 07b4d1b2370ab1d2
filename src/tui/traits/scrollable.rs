//! Scrollable and Selectable traits
//!
//! Components own a `ScrollState` and expose it here to get uniform
//! scroll behavior.

use super::Component;
use crate::tui::scroll::ScrollState;

/// Trait for components with scrollable content
///
/// Only `scroll_state()` and `scroll_state_mut()` need implementing; the
/// navigation methods delegate to `ScrollState`.
pub trait Scrollable: Component {
    fn scroll_state(&self) -> &ScrollState;

    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    fn scroll_up(&mut self) {
        self.scroll_state_mut().scroll_up();
    }

    fn scroll_down(&mut self) {
        self.scroll_state_mut().scroll_down();
    }

    fn scroll_to_top(&mut self) {
        self.scroll_state_mut().scroll_to_top();
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_state_mut().scroll_to_bottom();
    }

    fn page_up(&mut self) {
        self.scroll_state_mut().page_up();
    }

    fn page_down(&mut self) {
        self.scroll_state_mut().page_down();
    }
}

/// Scrollable content with a selected item
///
/// Moving the selection keeps it inside the viewport.
pub trait Selectable: Scrollable {
    fn selected_index(&self) -> Option<usize>;

    /// Set the selected index (implementations clamp to the item count)
    fn select(&mut self, index: usize);

    fn item_count(&self) -> usize;

    /// Select the next item, starting at the first
    fn select_next(&mut self) {
        let next = match self.selected_index() {
            Some(current) => (current + 1).min(self.item_count().saturating_sub(1)),
            None => 0,
        };
        if self.item_count() > 0 {
            self.select(next);
            self.scroll_state_mut().ensure_visible(next);
        }
    }

    /// Select the previous item, starting at the first
    fn select_previous(&mut self) {
        let prev = self.selected_index().map_or(0, |current| current.saturating_sub(1));
        if self.item_count() > 0 {
            self.select(prev);
            self.scroll_state_mut().ensure_visible(prev);
        }
    }

    fn select_first(&mut self) {
        if self.item_count() > 0 {
            self.select(0);
            self.scroll_state_mut().ensure_visible(0);
        }
    }

    fn select_last(&mut self) {
        let count = self.item_count();
        if count > 0 {
            self.select(count - 1);
            self.scroll_state_mut().ensure_visible(count - 1);
        }
    }
}
