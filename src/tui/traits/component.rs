//! Core component trait
//!
//! Every panel that can be rendered implements `Component`.

use crate::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Identifier for a panel on the home page
///
/// Used for focus tracking and panel-specific theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComponentId {
    /// Image carousel (default focus)
    #[default]
    Carousel,
    /// Featured performer strip
    Performers,
    /// Schedule list
    Schedule,
    /// System logs
    Logs,
}

impl ComponentId {
    /// Focus order for Tab
    const FOCUS_ORDER: [ComponentId; 4] = [
        ComponentId::Carousel,
        ComponentId::Performers,
        ComponentId::Schedule,
        ComponentId::Logs,
    ];

    fn focus_index(self) -> usize {
        Self::FOCUS_ORDER
            .iter()
            .position(|id| *id == self)
            .unwrap_or(0)
    }

    /// Cycle to next panel (Tab)
    pub fn next_focus(self) -> Self {
        let len = Self::FOCUS_ORDER.len();
        Self::FOCUS_ORDER[(self.focus_index() + 1) % len]
    }

    /// Cycle to previous panel (Shift+Tab)
    pub fn prev_focus(self) -> Self {
        let len = Self::FOCUS_ORDER.len();
        Self::FOCUS_ORDER[(self.focus_index() + len - 1) % len]
    }

    /// Panel title
    pub fn title(self) -> &'static str {
        match self {
            Self::Carousel => " Now Showing ",
            Self::Performers => " Featured Performers ",
            Self::Schedule => " Schedule ",
            Self::Logs => " System Logs ",
        }
    }
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need: the theme for this render and which
/// panel holds focus. Styling never comes from global state.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    pub focus: ComponentId,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, focus: ComponentId) -> Self {
        Self { theme, focus }
    }

    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }
}

/// Base trait for all panels
pub trait Component {
    /// Identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}
