//! Toast notification component
//!
//! A non-blocking overlay in the bottom-right corner that dismisses itself
//! after a fixed duration.

use crate::theme::Theme;
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

pub struct Toast {
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    /// Toast shown for two seconds
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration: Duration::from_secs(2),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // Two columns of padding plus borders on each side
        let max_width = area.width.saturating_sub(4);
        let width = (self.message.width() as u16 + 4).min(max_width);
        let height = 3;

        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height).intersection(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.highlight))
            .style(Style::default().bg(theme.background));

        let message = truncate_to_width(&self.message, width.saturating_sub(2) as usize);
        let text = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_toast_not_expired() {
        let toast = Toast::new("→ /SeatSelection/5");
        assert!(!toast.is_expired());
    }

    #[test]
    fn test_zero_duration_expires() {
        let toast = Toast {
            duration: Duration::ZERO,
            ..Toast::new("gone")
        };
        assert!(toast.is_expired());
    }
}
