//! Schedule panel component
//!
//! A selectable list of schedule entries, three lines per entry: name,
//! time and location, and the entry's seat selection link. Enter on the
//! selected entry is handled by App, which asks for `selected_route()`.

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::model::{Route, ScheduleEntry};
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{
    Component, ComponentId, Handled, Interactive, RenderContext, Scrollable, Selectable,
};
use crate::util::truncate_to_width;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Terminal lines per entry
const LINES_PER_ENTRY: usize = 3;

pub struct SchedulePanel {
    entries: Vec<ScheduleEntry>,
    selected: Option<usize>,
    /// Measured in entries, not lines
    scroll: ScrollState,
}

impl SchedulePanel {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            selected: None,
            scroll: ScrollState::manual(),
        }
    }

    /// Replace the entries; selection resets to the first entry
    pub fn set_entries(&mut self, entries: Vec<ScheduleEntry>) {
        self.selected = if entries.is_empty() { None } else { Some(0) };
        self.entries = entries;
        self.scroll.scroll_to_top();
        let viewport = self.scroll.viewport();
        self.scroll.update_dimensions(self.entries.len(), viewport);
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Record the panel's inner height (call each frame before rendering)
    pub fn sync_viewport(&mut self, inner_height: usize) {
        let viewport = (inner_height / LINES_PER_ENTRY).max(1);
        self.scroll.update_dimensions(self.entries.len(), viewport);
        if let Some(idx) = self.selected {
            self.scroll.ensure_visible(idx);
        }
    }

    /// Link target of the selected entry
    pub fn selected_route(&self) -> Option<Route> {
        self.selected
            .and_then(|idx| self.entries.get(idx))
            .map(ScheduleEntry::route)
    }

    fn entry_item(
        &self,
        entry: &ScheduleEntry,
        selected: bool,
        width: usize,
        ctx: &RenderContext,
    ) -> ListItem<'static> {
        let theme = ctx.theme;
        let marker = if selected { "▶ " } else { "  " };
        let name_style = if selected {
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD)
        };
        // Body lines are indented by the marker's two columns
        let body_width = width.saturating_sub(2);

        let lines = vec![
            Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.highlight)),
                Span::styled(truncate_to_width(&entry.name, body_width), name_style),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    truncate_to_width(
                        &format!("時間: {}  地點: {}", entry.time, entry.location),
                        body_width,
                    ),
                    Style::default().fg(theme.foreground),
                ),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("→ Get {}", entry.route()),
                    Style::default().fg(theme.link),
                ),
            ]),
        ];
        ListItem::new(lines)
    }
}

impl Default for SchedulePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SchedulePanel {
    fn id(&self) -> ComponentId {
        ComponentId::Schedule
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id());
        let title = if self.entries.is_empty() {
            self.id().title().to_string()
        } else {
            format!("{}({}) ", self.id().title(), self.entries.len())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(ctx.theme.border_type)
            .border_style(Style::default().fg(ctx.theme.panel_border(self.id(), focused)))
            .title(title);

        // Failed or pending fetch: nothing to list
        if self.entries.is_empty() {
            let empty = Paragraph::new("No upcoming activities")
                .style(Style::default().fg(ctx.theme.muted))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let width = block.inner(area).width.saturating_sub(1) as usize;
        let (start, end) = self.scroll.visible_range();
        let items: Vec<ListItem> = self.entries[start..end]
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let selected = self.selected == Some(start + i);
                self.entry_item(entry, selected, width, ctx)
            })
            .collect();

        f.render_widget(List::new(items).block(block), area);
        render_scrollbar(f, area, &self.scroll, ScrollbarStyle::Arrows);
    }
}

impl Scrollable for SchedulePanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Selectable for SchedulePanel {
    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: usize) {
        if !self.entries.is_empty() {
            self.selected = Some(index.min(self.entries.len() - 1));
        }
    }

    fn item_count(&self) -> usize {
        self.entries.len()
    }
}

impl Interactive for SchedulePanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:select  Enter:get tickets")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn entry(id: i64, artist: &str) -> ScheduleEntry {
        ScheduleEntry {
            id,
            name: format!("{artist} - Live"),
            image: format!("{artist}.jpg"),
            time: "2025-01-01".to_string(),
            location: "Hall".to_string(),
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_empty_panel_has_no_route() {
        let mut panel = SchedulePanel::new();
        assert_eq!(panel.selected_route(), None);
        panel.handle_key(key(KeyCode::Down));
        assert_eq!(panel.selected_index(), None);
    }

    #[test]
    fn test_selection_moves_and_routes() {
        let mut panel = SchedulePanel::new();
        panel.set_entries(vec![entry(5, "A"), entry(9, "B"), entry(12, "C")]);
        assert_eq!(panel.selected_route(), Some(Route::SeatSelection(5)));

        panel.handle_key(key(KeyCode::Down));
        assert_eq!(panel.selected_route(), Some(Route::SeatSelection(9)));

        panel.handle_key(key(KeyCode::End));
        panel.handle_key(key(KeyCode::Down));
        assert_eq!(panel.selected_route(), Some(Route::SeatSelection(12)));

        panel.handle_key(key(KeyCode::Home));
        panel.handle_key(key(KeyCode::Up));
        assert_eq!(panel.selected_index(), Some(0));
        assert_eq!(panel.handle_key(key(KeyCode::Enter)), Handled::No);
    }

    #[test]
    fn test_selection_stays_visible() {
        let mut panel = SchedulePanel::new();
        panel.set_entries((0..10).map(|i| entry(i, "X")).collect());
        // Two entries fit in six lines
        panel.sync_viewport(6);
        assert_eq!(panel.scroll_state().viewport(), 2);

        for _ in 0..4 {
            panel.handle_key(key(KeyCode::Down));
        }
        assert_eq!(panel.selected_index(), Some(4));
        assert_eq!(panel.scroll_state().visible_range(), (3, 5));
    }

    #[test]
    fn test_renders_time_location_and_link() {
        let mut panel = SchedulePanel::new();
        panel.set_entries(vec![entry(5, "A")]);
        let theme = Theme::by_name("Box Office");

        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        terminal
            .draw(|f| {
                panel.sync_viewport(f.area().height.saturating_sub(2) as usize);
                let ctx = RenderContext::new(&theme, ComponentId::Schedule);
                panel.render(f, f.area(), &ctx);
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("A - Live"));
        assert!(text.contains("2025-01-01"));
        assert!(text.contains("Hall"));
        assert!(text.contains("/SeatSelection/5"));
    }
}
