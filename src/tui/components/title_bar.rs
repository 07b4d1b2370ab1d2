// Title bar component
//
// App name plus the carousel's current image and position.

use super::carousel_panel::image_label;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let carousel = app.page.carousel();
    let title_text = format!(
        " 🎫 ticketbooth ──── {} ({}/{})",
        image_label(carousel.current()),
        carousel.position() + 1,
        carousel.len()
    );

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" q:quit ").right_aligned()),
        );

    f.render_widget(title, area);
}
