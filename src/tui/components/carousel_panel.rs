//! Carousel panel
//!
//! Three slots side by side: the previous image dimmed on the left, the
//! current image highlighted in the center, the next image dimmed on the
//! right. A dot indicator below marks the position.

use crate::carousel::{Carousel, Slot};
use crate::tui::traits::{Component, ComponentId, RenderContext};
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Widths of the left, center and right slots
const SLOT_SPLIT: [u16; 3] = [23, 54, 23];

/// Read-only view of the page's carousel for one render
pub struct CarouselView<'a> {
    carousel: &'a Carousel,
}

impl<'a> CarouselView<'a> {
    pub fn new(carousel: &'a Carousel) -> Self {
        Self { carousel }
    }
}

/// Display label for an image identifier ("周杰倫.jpg" -> "周杰倫")
pub fn image_label(image: &str) -> &str {
    match image.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => image,
    }
}

/// Dot indicator, or "k / N" when the dots would not fit
fn indicator(carousel: &Carousel, width: u16, ctx: &RenderContext) -> Line<'static> {
    let len = carousel.len();
    let position = carousel.position();

    if len * 2 > width as usize {
        return Line::from(Span::styled(
            format!("{} / {}", position + 1, len),
            Style::default().fg(ctx.theme.muted),
        ));
    }

    let spans: Vec<Span> = (0..len)
        .flat_map(|i| {
            let dot = if i == position {
                Span::styled("●", Style::default().fg(ctx.theme.panel_carousel))
            } else {
                Span::styled("○", Style::default().fg(ctx.theme.muted))
            };
            [dot, Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

fn render_slot(f: &mut Frame, area: Rect, slot: Slot, center: bool, ctx: &RenderContext) {
    let theme = ctx.theme;
    let (border, text) = if center {
        (
            Style::default().fg(theme.highlight),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        let dimmed = Style::default().fg(theme.muted).add_modifier(Modifier::DIM);
        (dimmed, dimmed)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(border);
    let inner = block.inner(area);

    let label = truncate_to_width(image_label(slot.image), inner.width as usize);
    let padding = inner.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..padding).map(|_| Line::default()).collect();
    lines.push(Line::from(Span::styled(label, text)));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

impl Component for CarouselView<'_> {
    fn id(&self) -> ComponentId {
        ComponentId::Carousel
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.panel_border(self.id(), focused)))
            .title(self.id().title())
            .title_bottom(
                Line::from(format!(
                    " {} / {} ",
                    self.carousel.position() + 1,
                    self.carousel.len()
                ))
                .right_aligned(),
            );
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(inner);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(SLOT_SPLIT.map(Constraint::Percentage))
            .split(rows[0]);

        let slots = self.carousel.slots();
        render_slot(f, columns[0], slots.left, false, ctx);
        render_slot(f, columns[1], slots.center, true, ctx);
        render_slot(f, columns[2], slots.right, false, ctx);

        let dots = Paragraph::new(indicator(self.carousel, rows[1].width, ctx))
            .alignment(Alignment::Center);
        f.render_widget(dots, rows[1]);
    }
}
