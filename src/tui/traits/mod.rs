//! Component trait system for the home page TUI
//!
//! Panels declare their own capabilities through traits instead of App
//! knowing how to render and scroll each one.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App                                 │
//! │  (orchestrator: routes keys and page events, owns focus)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//!    ┌───────────┐       ┌───────────┐       ┌──────────┐
//!    │ Performer │       │ Schedule  │       │   Logs   │
//!    │   Strip   │       │   Panel   │       │  Panel   │
//!    └───────────┘       └───────────┘       └──────────┘
//! ```
//!
//! - [`Component`] - render + identity
//! - [`Scrollable`] - components with scrollable content
//! - [`Selectable`] - scrollable content with a selected item
//! - [`Interactive`] - components that handle keyboard input

mod component;
mod interactive;
mod scrollable;

pub use component::{Component, ComponentId, RenderContext};
pub use interactive::{Handled, Interactive};
pub use scrollable::{Scrollable, Selectable};
