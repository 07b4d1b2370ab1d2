//! Responsive page layout
//!
//! Width breakpoints decide where the logs panel goes; everything else is a
//! fixed vertical stack: title, carousel, performer strip, schedule, status.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: schedule only, no logs panel
    Compact,
    /// 60-99 cols: logs below the schedule
    Normal,
    /// 100+ cols: logs beside the schedule
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }
}

/// Title bar height (borders + one line)
pub const TITLE_HEIGHT: u16 = 3;
/// Carousel height: borders, three slot lines, indicator
pub const CAROUSEL_HEIGHT: u16 = 9;
/// Performer strip height: borders + card (4 lines)
pub const STRIP_HEIGHT: u16 = 6;
/// Status bar height (top border + one line)
pub const STATUS_HEIGHT: u16 = 2;
/// Logs panel height when stacked below the schedule
const STACKED_LOGS_HEIGHT: u16 = 7;

/// Areas of the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAreas {
    pub title: Rect,
    pub carousel: Rect,
    pub performers: Rect,
    pub schedule: Rect,
    pub logs: Option<Rect>,
    pub status: Rect,
}

/// Split the terminal area into page regions
pub fn page_layout(area: Rect) -> PageAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(CAROUSEL_HEIGHT),
            Constraint::Length(STRIP_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    let body = rows[3];
    let (schedule, logs) = match Breakpoint::from_width(area.width) {
        Breakpoint::Compact => (body, None),
        Breakpoint::Normal => {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(STACKED_LOGS_HEIGHT)])
                .split(body);
            (split[0], Some(split[1]))
        }
        Breakpoint::Wide => {
            let split = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(body);
            (split[0], Some(split[1]))
        }
    };

    PageAreas {
        title: rows[0],
        carousel: rows[1],
        performers: rows[2],
        schedule,
        logs,
        status: rows[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(40), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(59), Breakpoint::Compact);
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Normal);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
        assert!(Breakpoint::Wide.at_least(Breakpoint::Normal));
        assert!(!Breakpoint::Compact.at_least(Breakpoint::Normal));
    }

    #[test]
    fn compact_layout_has_no_logs() {
        let areas = page_layout(Rect::new(0, 0, 50, 40));
        assert!(areas.logs.is_none());
        assert_eq!(areas.schedule.width, 50);
    }

    #[test]
    fn wide_layout_puts_logs_beside_schedule() {
        let areas = page_layout(Rect::new(0, 0, 120, 40));
        let logs = areas.logs.unwrap();
        assert_eq!(logs.y, areas.schedule.y);
        assert_eq!(areas.schedule.width + logs.width, 120);
        assert_eq!(areas.title.height, TITLE_HEIGHT);
        assert_eq!(areas.status.bottom(), 40);
    }

    #[test]
    fn normal_layout_stacks_logs() {
        let areas = page_layout(Rect::new(0, 0, 80, 40));
        let logs = areas.logs.unwrap();
        assert_eq!(logs.y, areas.schedule.bottom());
        assert_eq!(logs.width, 80);
    }
}
