//! Windows implementation using Win32 and Direct2D.
//!
//! - Audio: `PlaySoundW` click sounds
//! - Input: low-level mouse hook thread, quit hotkey
//! - UI: the layered overlay window and its Direct2D renderer

pub mod audio;
pub mod error;
pub mod input;
pub mod ui;

pub use audio::WinSoundPlayer;
pub use error::PlatformError;
pub use ui::*;
