//! Application events.
//!
//! Pure Rust with no FFI dependencies, so fully testable.

/// Mouse button that was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    X1,
    X2,
}

/// Events flowing from input producers to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A mouse button went down at screen position (x, y).
    Click { x: i32, y: i32, button: MouseButton },

    /// Leave the message loop and shut down (Ctrl+Shift+Q).
    Quit,
}

impl AppEvent {
    pub fn click(x: i32, y: i32, button: MouseButton) -> Self {
        AppEvent::Click { x, y, button }
    }

    /// Screen position of a click event.
    pub fn position(&self) -> Option<(i32, i32)> {
        match self {
            AppEvent::Click { x, y, .. } => Some((*x, *y)),
            AppEvent::Quit => None,
        }
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::Click { .. } => "Mouse button pressed",
            AppEvent::Quit => "Quit requested",
        }
    }
}
