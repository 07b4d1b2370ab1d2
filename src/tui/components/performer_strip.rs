//! Featured performer strip
//!
//! A horizontal row of fixed-width cards, wider than the viewport when there
//! are many performers. The strip starts centered: the offset is
//! `(content_width - viewport_width) / 2`, recomputed whenever the performer
//! list changes.

use crate::carousel::Carousel;
use crate::model::Performer;
use crate::tui::components::carousel_panel::image_label;
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crate::util::center_to_width;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Card width in columns, borders included
pub const CARD_WIDTH: usize = 22;
/// Gap between cards
pub const CARD_GAP: usize = 2;

/// Total width of `count` cards laid out in a row
pub fn content_width(count: usize) -> usize {
    count * CARD_WIDTH + count.saturating_sub(1) * CARD_GAP
}

/// Offset that centers the content in the viewport (0 when it fits)
pub fn centered_offset(content_width: usize, viewport_width: usize) -> usize {
    content_width.saturating_sub(viewport_width) / 2
}

pub struct PerformerStrip {
    performers: Vec<Performer>,
    /// Horizontal scroll offset in columns
    offset: usize,
    /// Viewport width from the last render
    viewport: usize,
    /// Set when the list changed and the next layout must recenter
    needs_centering: bool,
    /// Set once the user scrolls; a resize then only clamps
    user_scrolled: bool,
    /// Performer whose image is in the carousel's center slot
    spotlight: Option<usize>,
}

impl PerformerStrip {
    pub fn new(performers: Vec<Performer>) -> Self {
        Self {
            performers,
            offset: 0,
            viewport: 0,
            needs_centering: true,
            user_scrolled: false,
            spotlight: None,
        }
    }

    /// Replace the performer list if it differs; the strip then recenters
    /// on next layout
    pub fn set_performers(&mut self, performers: &[Performer]) {
        if performers != self.performers.as_slice() {
            self.performers = performers.to_vec();
            self.needs_centering = true;
            self.user_scrolled = false;
        }
    }

    /// Highlight the performer whose name matches the carousel's current image
    pub fn set_spotlight(&mut self, carousel: &Carousel) {
        let current = image_label(carousel.current());
        self.spotlight = self.performers.iter().position(|p| p.name == current);
    }

    pub fn spotlight(&self) -> Option<&Performer> {
        self.spotlight.and_then(|idx| self.performers.get(idx))
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    fn content_width(&self) -> usize {
        content_width(self.performers.len())
    }

    fn max_offset(&self) -> usize {
        self.content_width().saturating_sub(self.viewport)
    }

    /// Record the viewport width (call each frame before rendering)
    ///
    /// Recenters after a list change, or after a resize while the user has
    /// not scrolled.
    pub fn sync_viewport(&mut self, viewport: usize) {
        let resized = viewport != self.viewport;
        self.viewport = viewport;
        if self.needs_centering || (resized && !self.user_scrolled) {
            self.offset = centered_offset(self.content_width(), viewport);
            self.needs_centering = false;
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    pub fn scroll_left(&mut self) {
        self.user_scrolled = true;
        self.offset = self.offset.saturating_sub(CARD_WIDTH + CARD_GAP);
    }

    pub fn scroll_right(&mut self) {
        self.user_scrolled = true;
        self.offset = (self.offset + CARD_WIDTH + CARD_GAP).min(self.max_offset());
    }

    fn card_lines(&self, ctx: &RenderContext) -> Vec<Line<'static>> {
        let theme = ctx.theme;
        let normal_border = Style::default().fg(theme.panel_performers);
        let spotlight_border = Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD);
        let name_style = Style::default()
            .fg(theme.foreground)
            .add_modifier(Modifier::BOLD);
        let image_style = Style::default().fg(theme.muted);

        let inner = CARD_WIDTH - 4;
        let rule = "─".repeat(CARD_WIDTH - 2);
        let gap = " ".repeat(CARD_GAP);

        let mut top = Vec::new();
        let mut names = Vec::new();
        let mut images = Vec::new();
        let mut bottom = Vec::new();

        for (i, performer) in self.performers.iter().enumerate() {
            let border = if self.spotlight == Some(i) {
                spotlight_border
            } else {
                normal_border
            };
            if i > 0 {
                for row in [&mut top, &mut names, &mut images, &mut bottom] {
                    row.push(Span::raw(gap.clone()));
                }
            }
            top.push(Span::styled(format!("╭{}╮", rule), border));
            names.push(Span::styled("│ ", border));
            names.push(Span::styled(center_to_width(&performer.name, inner), name_style));
            names.push(Span::styled(" │", border));
            images.push(Span::styled("│ ", border));
            images.push(Span::styled(
                center_to_width(image_label(&performer.image), inner),
                image_style,
            ));
            images.push(Span::styled(" │", border));
            bottom.push(Span::styled(format!("╰{}╯", rule), border));
        }

        vec![
            Line::from(top),
            Line::from(names),
            Line::from(images),
            Line::from(bottom),
        ]
    }
}

impl Component for PerformerStrip {
    fn id(&self) -> ComponentId {
        ComponentId::Performers
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id());
        let title = if self.max_offset() > 0 {
            format!(
                "{}[{}/{}] ",
                self.id().title(),
                self.offset,
                self.max_offset()
            )
        } else {
            self.id().title().to_string()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(ctx.theme.border_type)
            .border_style(
                Style::default().fg(ctx.theme.panel_border(self.id(), focused)),
            )
            .title(title);

        if self.performers.is_empty() {
            let empty = Paragraph::new("No featured performers")
                .style(Style::default().fg(ctx.theme.muted))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        // Content narrower than the viewport is centered by alignment;
        // wider content scrolls horizontally from the offset
        let paragraph = Paragraph::new(self.card_lines(ctx)).block(block);
        let paragraph = if self.max_offset() == 0 {
            paragraph.alignment(Alignment::Center)
        } else {
            paragraph.scroll((0, self.offset.min(u16::MAX as usize) as u16))
        };
        f.render_widget(paragraph, area);
    }
}

impl Interactive for PerformerStrip {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.scroll_left();
                Handled::Yes
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.scroll_right();
                Handled::Yes
            }
            KeyCode::Home => {
                self.user_scrolled = true;
                self.offset = 0;
                Handled::Yes
            }
            KeyCode::End => {
                self.user_scrolled = true;
                self.offset = self.max_offset();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("←→:scroll  Home/End")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::ImageSet;
    use crate::config::default_performers;
    use crossterm::event::KeyModifiers;

    fn performers(n: usize) -> Vec<Performer> {
        (0..n)
            .map(|i| Performer::new(format!("Artist {i}"), format!("Artist {i}-直.jpg")))
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_centered_offset_arithmetic() {
        assert_eq!(content_width(0), 0);
        assert_eq!(content_width(1), CARD_WIDTH);
        assert_eq!(content_width(5), 5 * CARD_WIDTH + 4 * CARD_GAP);

        assert_eq!(centered_offset(200, 100), 50);
        assert_eq!(centered_offset(201, 100), 50);
        // Fits: no scrolling
        assert_eq!(centered_offset(80, 100), 0);
    }

    #[test]
    fn test_strip_centers_on_first_layout() {
        let mut strip = PerformerStrip::new(default_performers());
        strip.sync_viewport(60);
        assert_eq!(strip.offset(), centered_offset(content_width(5), 60));
    }

    #[test]
    fn test_strip_recenters_when_list_changes() {
        let mut strip = PerformerStrip::new(performers(5));
        strip.sync_viewport(60);
        strip.handle_key(key(KeyCode::Home));
        assert_eq!(strip.offset(), 0);

        // Same viewport, no list change: offset kept
        strip.sync_viewport(60);
        assert_eq!(strip.offset(), 0);

        strip.set_performers(&performers(8));
        strip.sync_viewport(60);
        assert_eq!(strip.offset(), centered_offset(content_width(8), 60));
    }

    #[test]
    fn test_scroll_keys_clamp() {
        let mut strip = PerformerStrip::new(performers(5));
        strip.sync_viewport(60);
        let max = content_width(5) - 60;

        for _ in 0..10 {
            strip.handle_key(key(KeyCode::Right));
        }
        assert_eq!(strip.offset(), max);

        strip.handle_key(key(KeyCode::Left));
        assert_eq!(strip.offset(), max - (CARD_WIDTH + CARD_GAP));

        strip.handle_key(key(KeyCode::End));
        assert_eq!(strip.offset(), max);
        assert_eq!(strip.handle_key(key(KeyCode::Enter)), Handled::No);
    }

    #[test]
    fn test_narrow_content_never_scrolls() {
        let mut strip = PerformerStrip::new(performers(2));
        strip.sync_viewport(100);
        assert_eq!(strip.offset(), 0);
        strip.handle_key(key(KeyCode::Right));
        assert_eq!(strip.offset(), 0);
    }

    #[test]
    fn test_same_list_keeps_offset() {
        let mut strip = PerformerStrip::new(performers(5));
        strip.sync_viewport(60);
        strip.handle_key(key(KeyCode::Home));

        strip.set_performers(&performers(5));
        strip.sync_viewport(60);
        assert_eq!(strip.offset(), 0);
    }

    #[test]
    fn test_resize_recenters_until_user_scrolls() {
        let mut strip = PerformerStrip::new(performers(8));
        strip.sync_viewport(60);
        strip.sync_viewport(90);
        assert_eq!(strip.offset(), centered_offset(content_width(8), 90));

        strip.handle_key(key(KeyCode::Right));
        let scrolled = strip.offset();
        strip.sync_viewport(80);
        assert_eq!(strip.offset(), scrolled.min(content_width(8) - 80));

        // A new list centers again and re-enables resize centering
        strip.set_performers(&performers(6));
        strip.sync_viewport(80);
        strip.sync_viewport(70);
        assert_eq!(strip.offset(), centered_offset(content_width(6), 70));
    }

    #[test]
    fn test_spotlight_follows_carousel() {
        let images = ImageSet::new(["周杰倫.jpg", "蘇打綠.jpg"]).unwrap();
        let mut carousel = Carousel::new(images);
        let mut strip = PerformerStrip::new(default_performers());

        strip.set_spotlight(&carousel);
        assert_eq!(strip.spotlight().unwrap().name, "周杰倫");

        carousel.advance();
        strip.set_spotlight(&carousel);
        assert!(strip.spotlight().is_none());
    }
}
