// TUI module - Terminal User Interface
//
// Sets up the terminal, runs the event loop and restores the terminal on
// exit. The loop is the page's single consumer: key input, redraw ticks and
// page events (carousel ticks, fetch completion) are handled one at a time.

pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod scroll;
pub mod traits;
pub mod ui;

#[cfg(test)]
mod test_support;

use crate::logging::LogBuffer;
use crate::page::{HomePage, PageEvent};
use crate::theme::Theme;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use traits::ComponentId;

/// Run the TUI until the user quits
///
/// The terminal is restored even when the loop fails.
pub async fn run_tui(
    page: HomePage,
    page_rx: &mut mpsc::Receiver<PageEvent>,
    log_buffer: LogBuffer,
    theme: Theme,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    tracing::debug!(theme = %theme.name, "Theme loaded");
    let mut app = App::new(page, log_buffer, theme);
    let result = run_event_loop(&mut terminal, &mut app, page_rx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on terminal input, a redraw tick and page events with
/// `tokio::select!`, redrawing after each.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    page_rx: &mut mpsc::Receiver<PageEvent>,
) -> Result<()> {
    let mut redraw = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = redraw.tick() => {
                app.expire_toast();
            }

            Some(event) = page_rx.recv() => {
                app.handle_page_event(event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
///
/// Global keys first (quit, focus, carousel stepping, follow link), then the
/// focused panel.
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    let key = key_event.code;

    match key_event.kind {
        KeyEventKind::Press => {}
        KeyEventKind::Release => {
            app.handle_key_release(key);
            return;
        }
        _ => return,
    }

    // Raw mode swallows SIGINT
    if key == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if !app.handle_key_press(key) {
        return;
    }

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Char('[') => app.prev_image(),
        KeyCode::Char(']') => app.next_image(),
        KeyCode::Enter if app.is_focused(ComponentId::Schedule) => app.follow_selected_link(),
        _ => {
            app.dispatch_to_focused(key_event);
        }
    }
}

/// Mouse wheel scrolls the focused panel
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    let code = match mouse_event.kind {
        MouseEventKind::ScrollUp => KeyCode::Up,
        MouseEventKind::ScrollDown => KeyCode::Down,
        _ => return,
    };
    app.dispatch_to_focused(KeyEvent::new(code, KeyModifiers::NONE));
}
