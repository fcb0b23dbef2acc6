//! Input handling for Windows (global mouse hook, quit hotkey).

pub mod hotkeys;
pub mod mouse_hook;

pub use hotkeys::{install_quit_hotkey, is_quit_hotkey, uninstall_quit_hotkey, HOTKEY_QUIT};
pub use mouse_hook::{pressed_button, MouseListener, WM_RIPPLE_WAKE};
