// Key repeat and debounce
//
// Terminals differ in whether they report key release and auto-repeat. The
// handler decides, per key, whether a press event should trigger an action:
// - State-change keys (quit, focus, follow link) fire once per press
// - Repeatable keys (navigation, carousel stepping) fire on press, then
//   repeat at a fixed rate after an initial delay while held
//
// Without Release events a key looks held forever, so a press that follows
// the previous one by more than the OS auto-repeat gap counts as a new tap.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between triggers of a held state-change key, for terminals
/// that never send Release events
const STATE_CHANGE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Longest gap between auto-repeat events of a held key
const AUTO_REPEAT_GAP: Duration = Duration::from_millis(100);

/// Defines how a key should behave when pressed/held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Trigger once per press
    StateChange,

    /// Trigger on press, then repeat after an initial delay
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// List navigation (Up/Down, Left/Right in the strip)
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(400),
            repeat_interval: Duration::from_millis(60),
        }
    }

    /// Carousel stepping: slow enough that each image is seen
    pub fn carousel_step() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(500),
            repeat_interval: Duration::from_millis(250),
        }
    }
}

/// Tracks the state of a single key
#[derive(Debug, Default)]
struct KeyState {
    is_pressed: bool,
    press_started: Option<Instant>,
    last_triggered: Option<Instant>,
    /// Last press event seen, triggered or not
    last_seen: Option<Instant>,
}

impl KeyState {
    fn release(&mut self) {
        *self = Self::default();
    }
}

/// Input handler that manages key behaviors
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    /// Configure a key's behavior
    pub fn configure_key(&mut self, key: KeyCode, behavior: KeyBehavior) {
        self.key_behaviors.insert(key, behavior);
    }

    /// Configure multiple keys with the same behavior
    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.configure_key(*key, behavior);
        }
    }

    /// Behavior for a key (unconfigured keys are state-change)
    pub fn behavior(&self, key: KeyCode) -> KeyBehavior {
        self.key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange)
    }

    /// Handle a key press event
    /// Returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        let now = Instant::now();
        let behavior = self.behavior(key);
        let state = self.key_states.entry(key).or_default();

        let repeating = state
            .last_seen
            .is_some_and(|seen| now.duration_since(seen) <= AUTO_REPEAT_GAP);
        state.last_seen = Some(now);

        if !state.is_pressed || !repeating {
            // New key press - always trigger
            state.is_pressed = true;
            state.press_started = Some(now);
            state.last_triggered = Some(now);
            return true;
        }

        let (Some(press_start), Some(last)) = (state.press_started, state.last_triggered) else {
            return false;
        };

        let fire = match behavior {
            KeyBehavior::StateChange => now.duration_since(last) >= STATE_CHANGE_DEBOUNCE,
            KeyBehavior::Repeatable {
                initial_delay,
                repeat_interval,
            } => {
                now.duration_since(press_start) >= initial_delay
                    && now.duration_since(last) >= repeat_interval
            }
        };

        if fire {
            state.last_triggered = Some(now);
        }
        fire
    }

    /// Handle a key release event
    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            state.release();
        }
    }

    /// Key configuration for the home page
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        handler.configure_keys(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Char('j'),
                KeyCode::Char('k'),
                KeyCode::PageUp,
                KeyCode::PageDown,
            ],
            KeyBehavior::navigation(),
        );

        // Left/Right step the carousel or scroll the strip depending on focus
        handler.configure_keys(
            &[
                KeyCode::Left,
                KeyCode::Right,
                KeyCode::Char('h'),
                KeyCode::Char('l'),
                KeyCode::Char('['),
                KeyCode::Char(']'),
            ],
            KeyBehavior::carousel_step(),
        );

        handler.configure_keys(
            &[
                KeyCode::Enter,
                KeyCode::Esc,
                KeyCode::Tab,
                KeyCode::BackTab,
                KeyCode::Home,
                KeyCode::End,
                KeyCode::Char('q'),
                KeyCode::Char('Q'),
            ],
            KeyBehavior::StateChange,
        );

        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}
