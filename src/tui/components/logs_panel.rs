//! Logs panel component
//!
//! Shows entries captured by the TUI log layer. The buffer is shared with the
//! logging system, so the panel receives entries each frame instead of owning
//! them; it owns only scroll position and selection.

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::logging::LogEntry;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{
    Component, ComponentId, Handled, Interactive, RenderContext, Scrollable, Selectable,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LogsPanel {
    /// Auto-follows new entries until the user scrolls up
    scroll: ScrollState,

    /// Selected entry (None = follow mode)
    selected: Option<usize>,

    /// Entries from the last render, for Selectable bounds
    entries: Vec<LogEntry>,
}

impl LogsPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
            selected: None,
            entries: Vec::new(),
        }
    }

    /// Take the current buffer contents (call each frame before rendering)
    pub fn sync_entries(&mut self, entries: Vec<LogEntry>, viewport_height: usize) {
        self.scroll.update_dimensions(entries.len(), viewport_height);
        if let Some(idx) = self.selected {
            if idx >= entries.len() {
                self.selected = entries.len().checked_sub(1);
            }
        }
        self.entries = entries;
    }

    pub fn is_following(&self) -> bool {
        self.scroll.auto_follow
    }
}

impl Default for LogsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LogsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());
        let (start, end) = self.scroll.visible_range();

        let items: Vec<ListItem> = self.entries[start..end]
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if focused && self.selected == Some(start + i) {
                    Style::default()
                        .fg(theme.selection_fg)
                        .bg(theme.selection)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.log_level(entry.level))
                };
                ListItem::new(format_log_entry(entry)).style(style)
            })
            .collect();

        let title = if self.selected.is_some() && focused {
            " System Logs [select] "
        } else if self.scroll.auto_follow {
            self.id().title()
        } else {
            " System Logs [scroll] "
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.panel_border(self.id(), focused)))
                .title(title),
        );
        f.render_widget(list, area);

        render_scrollbar(f, area, &self.scroll, ScrollbarStyle::Minimal);
    }
}

impl Scrollable for LogsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Selectable for LogsPanel {
    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: usize) {
        self.selected = Some(index.min(self.entries.len().saturating_sub(1)));
    }

    fn item_count(&self) -> usize {
        self.entries.len()
    }

    // Selection starts from the most recent entry
    fn select_previous(&mut self) {
        let count = self.entries.len();
        if count == 0 {
            return;
        }
        let prev = self.selected.map_or(count - 1, |idx| idx.saturating_sub(1));
        self.select(prev);
        self.scroll.ensure_visible(prev);
    }
}

impl Interactive for LogsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected.is_none() {
                    return Handled::No;
                }
                self.select_next();
                if self.selected == self.entries.len().checked_sub(1) {
                    self.scroll.scroll_to_bottom();
                }
            }
            KeyCode::Home => {
                self.scroll_to_top();
                self.select_first();
            }
            KeyCode::End => {
                self.scroll_to_bottom();
                self.select_last();
            }
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Esc if self.selected.is_some() => {
                self.selected = None;
                self.scroll.scroll_to_bottom();
            }
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:select  Esc:follow")
    }
}

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use chrono::Utc;
    use crossterm::event::KeyModifiers;

    fn entries(n: usize) -> Vec<LogEntry> {
        (0..n)
            .map(|i| LogEntry {
                timestamp: Utc::now(),
                level: LogLevel::Info,
                message: format!("message {i}"),
            })
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_follows_new_entries() {
        let mut panel = LogsPanel::new();
        panel.sync_entries(entries(10), 4);
        assert_eq!(panel.scroll_state().offset(), 6);

        panel.sync_entries(entries(12), 4);
        assert_eq!(panel.scroll_state().offset(), 8);
        assert!(panel.is_following());
    }

    #[test]
    fn test_select_starts_at_latest_and_stops_following() {
        let mut panel = LogsPanel::new();
        panel.sync_entries(entries(10), 4);

        panel.handle_key(key(KeyCode::Up));
        assert_eq!(panel.selected_index(), Some(9));

        for _ in 0..5 {
            panel.handle_key(key(KeyCode::Up));
        }
        assert_eq!(panel.selected_index(), Some(4));
        assert_eq!(panel.scroll_state().offset(), 4);
        assert!(!panel.is_following());

        // New entries no longer move the view
        panel.sync_entries(entries(20), 4);
        assert_eq!(panel.scroll_state().offset(), 4);
    }

    #[test]
    fn test_esc_returns_to_follow_mode() {
        let mut panel = LogsPanel::new();
        panel.sync_entries(entries(10), 4);
        panel.handle_key(key(KeyCode::Home));
        assert_eq!(panel.selected_index(), Some(0));

        assert_eq!(panel.handle_key(key(KeyCode::Esc)), Handled::Yes);
        assert_eq!(panel.selected_index(), None);
        assert!(panel.is_following());

        // Nothing left to clear
        assert_eq!(panel.handle_key(key(KeyCode::Esc)), Handled::No);
    }

    #[test]
    fn test_selection_clamped_when_buffer_shrinks() {
        let mut panel = LogsPanel::new();
        panel.sync_entries(entries(10), 4);
        panel.handle_key(key(KeyCode::End));
        assert_eq!(panel.selected_index(), Some(9));

        panel.sync_entries(entries(3), 4);
        assert_eq!(panel.selected_index(), Some(2));
    }
}
