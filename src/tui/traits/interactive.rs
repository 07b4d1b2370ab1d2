//! Interactive trait for components that handle keyboard input
//!
//! The App routes input to the focused component; unhandled keys bubble
//! back up for global handling.

use super::Component;
use crossterm::event::KeyEvent;

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// Trait for components that handle keyboard input
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// App (global: q, Tab, [ ])
///    │ if not handled
///    ▼
/// Focused Component (via Interactive)
///    │ Handled::Yes / Handled::No
///    ▼
/// App (fallback: Enter on schedule)
/// ```
pub trait Interactive: Component {
    /// Handle a key event
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Key hints shown in the status bar while focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
