// Frame rendering
//
// One function per frame: lay out the page, sync panel dimensions with the
// areas they got, then render each panel with a shared RenderContext.

use super::app::App;
use super::components::{status_bar, title_bar, CarouselView};
use super::layout::page_layout;
use super::traits::{Component, RenderContext};
use ratatui::{style::Style, widgets::Block, Frame};

/// Render the whole home page
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let areas = page_layout(f.area());

    app.performer_strip.set_performers(app.page.performers());
    app.performer_strip.set_spotlight(app.page.carousel());

    // Inner sizes (minus borders) before rendering
    app.performer_strip
        .sync_viewport(areas.performers.width.saturating_sub(2) as usize);
    app.schedule_panel
        .sync_viewport(areas.schedule.height.saturating_sub(2) as usize);
    if let Some(logs) = areas.logs {
        app.logs_panel
            .sync_entries(app.log_buffer.get_all(), logs.height.saturating_sub(2) as usize);
    }

    let ctx = RenderContext::new(&app.theme, app.focused);

    title_bar::render(f, areas.title, app);
    CarouselView::new(app.page.carousel()).render(f, areas.carousel, &ctx);
    app.performer_strip.render(f, areas.performers, &ctx);
    app.schedule_panel.render(f, areas.schedule, &ctx);
    if let Some(logs) = areas.logs {
        app.logs_panel.render(f, logs, &ctx);
    }
    status_bar::render(f, areas.status, app);

    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::ImageSet;
    use crate::config::default_performers;
    use crate::logging::LogBuffer;
    use crate::model::ScheduleEntry;
    use crate::page::{HomePage, PageEvent};
    use crate::theme::Theme;
    use crate::tui::test_support::buffer_rows;
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> App {
        let images = ImageSet::new(["周杰倫.jpg", "YOASOBI.jpg"]).unwrap();
        let page = HomePage::new(images, default_performers());
        App::new(page, LogBuffer::new(), Theme::by_name("Box Office"))
    }

    fn render(app: &mut App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        buffer_rows(terminal.backend().buffer())
    }

    #[test]
    fn test_draws_page_regions() {
        let mut app = app();
        app.handle_page_event(PageEvent::ScheduleLoaded(vec![ScheduleEntry {
            id: 5,
            name: "A - Show".to_string(),
            image: "A.jpg".to_string(),
            time: "2025-01-01".to_string(),
            location: "Hall".to_string(),
        }]));

        let rows = render(&mut app, 120, 40);
        let screen = rows.join("\n");
        assert!(rows[1].contains("ticketbooth"));
        assert!(rows[1].contains("(1/2)"));
        assert!(screen.contains("Now Showing"));
        assert!(screen.contains("Featured Performers"));
        assert!(screen.contains("A - Show"));
        assert!(screen.contains("/SeatSelection/5"));
        assert!(screen.contains("System Logs"));
    }

    #[test]
    fn test_compact_layout_hides_logs() {
        let mut app = app();
        let screen = render(&mut app, 50, 40).join("\n");
        assert!(!screen.contains("System Logs"));
        assert!(screen.contains("No upcoming activities"));
    }

    #[test]
    fn test_toast_drawn_on_top() {
        let mut app = app();
        app.show_toast("hello");
        let screen = render(&mut app, 80, 30).join("\n");
        assert!(screen.contains("hello"));
    }
}
