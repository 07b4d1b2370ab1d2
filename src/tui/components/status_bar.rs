// Status bar component
//
// Uptime, schedule count, last followed link and key hints. Narrow
// terminals drop the labels and the global hints.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const GLOBAL_HINTS: &str = "Tab:focus  [ ]:slide  q:quit";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    f.render_widget(
        Paragraph::new(status_text(app, area.width))
            .style(Style::default().fg(app.theme.status_bar))
            .block(Block::default().borders(Borders::TOP)),
        area,
    );
}

pub fn status_text(app: &App, width: u16) -> String {
    let bp = Breakpoint::from_width(width);
    let count = app.page.schedule().len();
    let hint = app.focus_hint();

    let text = if bp.at_least(Breakpoint::Wide) {
        let route = app
            .last_route
            .map(|r| format!(" │ 🔗 {}", r))
            .unwrap_or_default();
        let hints = match hint {
            Some(h) => format!("{}  {}", h, GLOBAL_HINTS),
            None => GLOBAL_HINTS.to_string(),
        };
        format!(
            " ⏱ {} │ 🎟 {} activities{} │ {}",
            app.uptime(),
            count,
            route,
            hints
        )
    } else {
        let hints = hint.unwrap_or("Tab:focus  q:quit");
        format!(" {} │ 🎟 {} │ {}", app.uptime(), count, hints)
    };

    truncate_to_width(&text, width as usize)
}
