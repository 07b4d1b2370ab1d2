// TUI application state
//
// App owns the home page plus the per-panel UI state (strip offset,
// schedule selection, log scroll). Page state only changes through
// handle_page_event and the carousel controls, all called from the event
// loop.

use super::components::{LogsPanel, PerformerStrip, SchedulePanel, Toast};
use super::input::InputHandler;
use super::traits::{ComponentId, Handled, Interactive};
use crate::logging::LogBuffer;
use crate::model::Route;
use crate::page::{HomePage, PageEvent};
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

pub struct App {
    pub page: HomePage,

    /// Panel receiving navigation keys
    pub focused: ComponentId,

    pub performer_strip: PerformerStrip,
    pub schedule_panel: SchedulePanel,
    pub logs_panel: LogsPanel,

    /// Shared with the tracing layer
    pub log_buffer: LogBuffer,

    pub theme: Theme,
    pub toast: Option<Toast>,

    /// Last link followed from the schedule
    pub last_route: Option<Route>,

    pub should_quit: bool,
    pub start_time: Instant,

    input_handler: InputHandler,
}

impl App {
    pub fn new(page: HomePage, log_buffer: LogBuffer, theme: Theme) -> Self {
        let performer_strip = PerformerStrip::new(page.performers().to_vec());
        let mut schedule_panel = SchedulePanel::new();
        schedule_panel.set_entries(page.schedule().to_vec());

        Self {
            page,
            focused: ComponentId::default(),
            performer_strip,
            schedule_panel,
            logs_panel: LogsPanel::new(),
            log_buffer,
            theme,
            toast: None,
            last_route: None,
            should_quit: false,
            start_time: Instant::now(),
            input_handler: InputHandler::with_default_config(),
        }
    }

    /// Apply a timer tick or fetch completion
    pub fn handle_page_event(&mut self, event: PageEvent) {
        if let PageEvent::ScheduleLoaded(entries) = &event {
            self.schedule_panel.set_entries(entries.clone());
        }
        self.page.handle(event);
    }

    pub fn next_image(&mut self) {
        self.page.next_image();
    }

    pub fn prev_image(&mut self) {
        self.page.prev_image();
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next_focus();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev_focus();
    }

    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focused == id
    }

    /// Returns true if the press should trigger an action
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Route a key to the focused panel
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        match self.focused {
            ComponentId::Carousel => self.handle_carousel_key(key),
            ComponentId::Performers => self.performer_strip.handle_key(key),
            ComponentId::Schedule => self.schedule_panel.handle_key(key),
            ComponentId::Logs => self.logs_panel.handle_key(key),
        }
    }

    // The carousel lives in HomePage, so its keys are handled here
    fn handle_carousel_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.prev_image(),
            KeyCode::Right | KeyCode::Char('l') => self.next_image(),
            _ => return Handled::No,
        }
        Handled::Yes
    }

    /// Key hint for the focused panel
    pub fn focus_hint(&self) -> Option<&'static str> {
        match self.focused {
            ComponentId::Carousel => Some("←→:slide"),
            ComponentId::Performers => self.performer_strip.focus_hint(),
            ComponentId::Schedule => self.schedule_panel.focus_hint(),
            ComponentId::Logs => self.logs_panel.focus_hint(),
        }
    }

    /// Follow the selected schedule entry's link
    pub fn follow_selected_link(&mut self) {
        let Some(route) = self.schedule_panel.selected_route() else {
            return;
        };
        tracing::info!(route = %route, "Navigating to seat selection");
        self.last_route = Some(route);
        self.show_toast(format!("→ {}", route));
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Drop the toast once it has been shown long enough
    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Uptime as HH:MM:SS
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::ImageSet;
    use crate::config::default_performers;
    use crate::model::ScheduleEntry;
    use crate::tui::traits::Selectable;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        let images = ImageSet::new(["a.jpg", "b.jpg", "c.jpg"]).unwrap();
        let page = HomePage::new(images, default_performers());
        App::new(page, LogBuffer::new(), Theme::default())
    }

    fn entry(id: i64) -> ScheduleEntry {
        ScheduleEntry {
            id,
            name: format!("Artist {id} - Tour"),
            image: format!("Artist {id}.jpg"),
            time: "2025-01-01".to_string(),
            location: "Hall".to_string(),
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_tick_advances_carousel() {
        let mut app = app();
        app.handle_page_event(PageEvent::Tick);
        assert_eq!(app.page.carousel().position(), 1);
    }

    #[test]
    fn test_schedule_loaded_syncs_panel() {
        let mut app = app();
        app.handle_page_event(PageEvent::ScheduleLoaded(vec![entry(5), entry(9)]));
        assert_eq!(app.page.schedule().len(), 2);
        assert_eq!(app.schedule_panel.entries().len(), 2);
        assert_eq!(app.schedule_panel.selected_index(), Some(0));
    }

    #[test]
    fn test_focus_cycle_wraps() {
        let mut app = app();
        assert!(app.is_focused(ComponentId::Carousel));
        app.focus_prev();
        assert!(app.is_focused(ComponentId::Logs));
        app.focus_next();
        app.focus_next();
        assert!(app.is_focused(ComponentId::Performers));
    }

    #[test]
    fn test_carousel_keys_only_when_focused() {
        let mut app = app();
        assert_eq!(app.dispatch_to_focused(key(KeyCode::Left)), Handled::Yes);
        assert_eq!(app.page.carousel().position(), 2);
        app.dispatch_to_focused(key(KeyCode::Right));
        assert_eq!(app.page.carousel().position(), 0);

        app.focus_next();
        app.dispatch_to_focused(key(KeyCode::Right));
        assert_eq!(app.page.carousel().position(), 0);
    }

    #[test]
    fn test_follow_selected_link() {
        let mut app = app();
        app.follow_selected_link();
        assert_eq!(app.last_route, None);
        assert!(app.toast.is_none());

        app.handle_page_event(PageEvent::ScheduleLoaded(vec![entry(5), entry(9)]));
        app.focused = ComponentId::Schedule;
        app.dispatch_to_focused(key(KeyCode::Down));
        app.follow_selected_link();

        assert_eq!(app.last_route, Some(Route::SeatSelection(9)));
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("→ /SeatSelection/9")
        );
    }

    #[test]
    fn test_uptime_format() {
        let app = app();
        assert_eq!(app.uptime(), "00:00:00");
    }
}
